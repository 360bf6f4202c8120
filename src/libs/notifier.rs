//! Reminder delivery action.
//!
//! Invoked by the watcher when a trigger fires. The task is re-fetched at
//! delivery time: a task that was deleted or completed since scheduling is
//! treated as success with nothing shown, not as an error.

use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;

/// Renders the reminder for a fired trigger.
///
/// Message text varies with `due_today` (due-day vs day-before reminder).
pub fn deliver(tasks: &mut Tasks, task_id: i64, due_today: bool) -> Result<()> {
    let task = match tasks.get_by_id(task_id)? {
        Some(task) => task,
        None => return Ok(()),
    };
    if task.completed {
        return Ok(());
    }

    let message = if due_today {
        Message::ReminderDueToday {
            title: task.title.clone(),
            course: task.course.clone(),
        }
    } else {
        Message::ReminderDueTomorrow {
            title: task.title.clone(),
            course: task.course.clone(),
        }
    };
    msg_print!(message, true);
    Ok(())
}
