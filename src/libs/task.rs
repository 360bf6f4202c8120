use crate::libs::messages::Message;
use crate::libs::reminder;
use crate::libs::task_type::TaskType;
use crate::msg_bail_anyhow;
use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<i64>,
    pub title: String,
    pub course: String,
    pub task_type: TaskType,
    pub custom_type: Option<String>,
    pub due_date: NaiveDate,
    pub due_time: String,
    pub notes: Option<String>,
    pub completed: bool,
    pub created_at: Option<String>,
}

impl Task {
    pub fn new(title: &str, course: &str, task_type: TaskType, due_date: NaiveDate) -> Self {
        Task {
            id: None,
            title: title.to_string(),
            course: course.to_string(),
            task_type,
            custom_type: None,
            due_date,
            due_time: "09:00".to_string(),
            notes: None,
            completed: false,
            created_at: None,
        }
    }

    pub fn with_custom_type(mut self, name: &str) -> Self {
        self.custom_type = Some(name.to_string());
        self
    }

    pub fn with_due_time(mut self, due_time: &str) -> Self {
        self.due_time = due_time.to_string();
        self
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = if notes.trim().is_empty() { None } else { Some(notes.to_string()) };
        self
    }

    /// Trims text fields and rejects blank required ones.
    pub fn validate(&mut self) -> Result<()> {
        self.title = self.title.trim().to_string();
        self.course = self.course.trim().to_string();
        if self.title.is_empty() {
            msg_bail_anyhow!(Message::TaskTitleRequired);
        }
        if self.course.is_empty() {
            msg_bail_anyhow!(Message::TaskCourseRequired);
        }
        // The custom label only applies to the Custom kind
        if self.task_type != TaskType::Custom {
            self.custom_type = None;
        }
        Ok(())
    }

    /// Whether the task's due instant has passed. The wall-clock due time
    /// participates here, with malformed values falling back to midnight.
    pub fn is_overdue(&self, now: NaiveDateTime) -> bool {
        !self.completed && reminder::due_instant(self.due_date, &self.due_time) < now
    }

    /// Label shown for the task kind, preferring the user-defined name.
    pub fn type_label(&self) -> &str {
        match (&self.task_type, &self.custom_type) {
            (TaskType::Custom, Some(name)) => name.as_str(),
            (task_type, _) => task_type.label(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum TaskFilter {
    All,
    Upcoming,
    Completed,
    ById(i64),
}
