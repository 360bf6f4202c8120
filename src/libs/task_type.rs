//! Academic task kinds and their presentation attributes.
//!
//! `TaskType` is a closed set of kinds; display labels and badge colors live
//! in separate lookup functions so the domain model carries no presentation
//! data. User-defined kinds are represented by `Custom` plus a label stored
//! on the task itself (see `libs::task`).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    Quiz1,
    Quiz2,
    Quiz3,
    ExtraQuiz,
    Assignment,
    Midterm,
    Final,
    Project,
    Presentation,
    Custom,
}

pub const ALL_TASK_TYPES: &[TaskType] = &[
    TaskType::Quiz1,
    TaskType::Quiz2,
    TaskType::Quiz3,
    TaskType::ExtraQuiz,
    TaskType::Assignment,
    TaskType::Midterm,
    TaskType::Final,
    TaskType::Project,
    TaskType::Presentation,
    TaskType::Custom,
];

impl TaskType {
    /// Canonical name used for database storage.
    pub fn name(&self) -> &'static str {
        match self {
            TaskType::Quiz1 => "quiz_1",
            TaskType::Quiz2 => "quiz_2",
            TaskType::Quiz3 => "quiz_3",
            TaskType::ExtraQuiz => "extra_quiz",
            TaskType::Assignment => "assignment",
            TaskType::Midterm => "midterm",
            TaskType::Final => "final",
            TaskType::Project => "project",
            TaskType::Presentation => "presentation",
            TaskType::Custom => "custom",
        }
    }

    /// Decodes a stored name. Unknown names fall back to `Custom` so that
    /// rows written by a newer version still load.
    pub fn from_name(name: &str) -> Self {
        match name {
            "quiz_1" => TaskType::Quiz1,
            "quiz_2" => TaskType::Quiz2,
            "quiz_3" => TaskType::Quiz3,
            "extra_quiz" => TaskType::ExtraQuiz,
            "assignment" => TaskType::Assignment,
            "midterm" => TaskType::Midterm,
            "final" => TaskType::Final,
            "project" => TaskType::Project,
            "presentation" => TaskType::Presentation,
            _ => TaskType::Custom,
        }
    }

    /// Human-readable label shown in listings and prompts.
    pub fn label(&self) -> &'static str {
        match self {
            TaskType::Quiz1 => "Quiz 1",
            TaskType::Quiz2 => "Quiz 2",
            TaskType::Quiz3 => "Quiz 3",
            TaskType::ExtraQuiz => "Extra Quiz",
            TaskType::Assignment => "Assignment",
            TaskType::Midterm => "Midterm",
            TaskType::Final => "Final",
            TaskType::Project => "Project",
            TaskType::Presentation => "Presentation",
            TaskType::Custom => "Custom",
        }
    }

    /// Badge color associated with the kind.
    pub fn color(&self) -> &'static str {
        match self {
            TaskType::Quiz1 | TaskType::Quiz2 | TaskType::Quiz3 | TaskType::ExtraQuiz => "#3B82F6",
            TaskType::Assignment => "#F97316",
            TaskType::Midterm | TaskType::Final => "#EF4444",
            TaskType::Project => "#8B5CF6",
            TaskType::Presentation => "#10B981",
            TaskType::Custom => "#6366F1",
        }
    }

    /// Looks up a kind by its display label, falling back to `Custom`.
    pub fn from_label(label: &str) -> Self {
        ALL_TASK_TYPES
            .iter()
            .copied()
            .find(|t| t.label().eq_ignore_ascii_case(label))
            .unwrap_or(TaskType::Custom)
    }
}
