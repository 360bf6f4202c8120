use crate::db::task_types::CustomTaskType;
use crate::libs::task::Task;
use crate::libs::urgency::Urgency;
use anyhow::Result;
use chrono::NaiveDateTime;
use prettytable::{row, Table};

/// Display format for due dates, matching user input format.
pub const DATE_DISPLAY_FORMAT: &str = "%d-%m-%Y";

pub struct View {}

impl View {
    /// Renders tasks with an urgency badge computed against `now`.
    pub fn tasks(tasks: &[Task], now: NaiveDateTime) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "COURSE", "TYPE", "DUE DATE", "DUE TIME", "URGENCY"]);
        for task in tasks {
            let badge = Self::urgency_badge(task, now);
            table.add_row(row![
                task.id.unwrap_or(0),
                task.title,
                task.course,
                task.type_label(),
                task.due_date.format(DATE_DISPLAY_FORMAT),
                task.due_time,
                badge
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Badge text for the urgency column. A task past its due instant shows
    /// "Overdue" instead of a classifier label.
    pub fn urgency_badge(task: &Task, now: NaiveDateTime) -> String {
        if task.is_overdue(now) {
            return "Overdue".to_string();
        }
        Urgency::classify(task.due_date, now.date()).map(|u| u.to_string()).unwrap_or_default()
    }

    pub fn task_types(types: &[CustomTaskType]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "COLOR"]);
        for task_type in types {
            table.add_row(row![
                task_type.id.unwrap_or(0),
                task_type.name,
                task_type.color.clone().unwrap_or_default()
            ]);
        }
        table.printstd();

        Ok(())
    }
}
