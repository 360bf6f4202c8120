//! AI study assistant command.
//!
//! Sends the user's question together with a compact summary of their
//! upcoming tasks to Gemini. Requires the `gemini` module to be configured
//! via `tsk init`.

use crate::api::gemini::Gemini;
use crate::db::tasks::Tasks;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskFilter};
use crate::libs::urgency::Urgency;
use crate::libs::view::DATE_DISPLAY_FORMAT;
use crate::{msg_bail_anyhow, msg_print};
use anyhow::Result;
use chrono::Local;
use clap::{Args, Subcommand};

const SYSTEM_PROMPT: &str = "You are a helpful AI study assistant for university students. \
You help them manage their academic tasks, prioritize their work, and provide study tips. \
Be encouraging, practical, and concise in your responses.";

/// Upper bound on the number of tasks included in the prompt context.
const CONTEXT_TASK_LIMIT: usize = 10;

#[derive(Debug, Args)]
pub struct AiArgs {
    #[command(subcommand)]
    command: AiCommand,
}

#[derive(Debug, Subcommand)]
enum AiCommand {
    /// Ask a free-form question with your tasks as context
    Ask {
        /// The question to ask
        question: String,
    },
    /// Get prioritization suggestions for your upcoming tasks
    Suggest,
}

pub async fn cmd(args: AiArgs) -> Result<()> {
    let config = Config::read()?;
    let Some(gemini_config) = config.gemini else {
        msg_bail_anyhow!(Message::AiNotConfigured);
    };

    let mut tasks_db = Tasks::new()?;
    let tasks = tasks_db.fetch(TaskFilter::Upcoming)?;
    let context = build_task_context(&tasks);

    let prompt = match args.command {
        AiCommand::Ask { question } => format!(
            "Here are the user's current tasks:\n{}\n\nUser's question: {}\n\nPlease provide a helpful, concise response.",
            context, question
        ),
        AiCommand::Suggest => format!(
            "Here are the user's current tasks:\n{}\n\nAnalyze these tasks and provide:\n\
             1. Priority recommendations (which tasks to focus on first)\n\
             2. Time management suggestions\n\
             3. Any potential conflicts or concerns\n\n\
             Keep the response concise and actionable.",
            context
        ),
    };

    let client = Gemini::new(&gemini_config)?;
    let reply = client.generate(SYSTEM_PROMPT, &prompt).await?;

    msg_print!(Message::AiReplyHeader, true);
    println!("{}", reply.trim());
    Ok(())
}

/// Formats the upcoming tasks into one prompt line per task, oldest due
/// date first, capped at `CONTEXT_TASK_LIMIT` entries.
fn build_task_context(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return Message::AiNoTasksForContext.to_string();
    }

    let today = Local::now().date_naive();
    tasks
        .iter()
        .take(CONTEXT_TASK_LIMIT)
        .map(|task| {
            let date = task.due_date.format(DATE_DISPLAY_FORMAT);
            let urgency = match Urgency::classify(task.due_date, today) {
                Some(urgency) => format!(" ({})", urgency),
                None => String::new(),
            };
            format!("- {} ({}) - {} - Due: {}{}", task.title, task.course, task.type_label(), date, urgency)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::task_type::TaskType;
    use chrono::NaiveDate;

    #[test]
    fn context_lists_tasks_with_course_and_type() {
        let due = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let tasks = vec![Task::new("Lab report", "Physics II", TaskType::Assignment, due)];
        let context = build_task_context(&tasks);
        assert!(context.contains("- Lab report (Physics II) - Assignment - Due: 10-03-2025"));
    }

    #[test]
    fn context_caps_at_limit() {
        let due = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        let tasks: Vec<Task> = (0..20)
            .map(|i| Task::new(&format!("Task {i}"), "CS101", TaskType::Project, due))
            .collect();
        let context = build_task_context(&tasks);
        assert_eq!(context.lines().count(), CONTEXT_TASK_LIMIT);
    }

    #[test]
    fn empty_context_has_placeholder() {
        assert_eq!(build_task_context(&[]), Message::AiNoTasksForContext.to_string());
    }
}
