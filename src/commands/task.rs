//! Task management command.
//!
//! CRUD surface for academic tasks. Every mutation ends with a reminder
//! reschedule for the affected task: creates and edits replace the pending
//! triggers, completion and deletion leave only the unconditional cancel.

use crate::db::task_types::TaskTypes;
use crate::db::tasks::Tasks;
use crate::db::triggers::Triggers;
use crate::libs::messages::Message;
use crate::libs::reminder;
use crate::libs::task::{Task, TaskFilter};
use crate::libs::task_type::{TaskType, ALL_TASK_TYPES};
use crate::libs::view::{View, DATE_DISPLAY_FORMAT};
use crate::{msg_debug, msg_error, msg_error_anyhow, msg_info, msg_print, msg_success, msg_warning};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: Option<TaskCommand>,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// Create a new task
    Add {
        /// Task title
        title: Option<String>,
        /// Course name
        #[arg(short, long)]
        course: Option<String>,
        /// Task type label (e.g. "Assignment", "Midterm")
        #[arg(short = 't', long = "type")]
        task_type: Option<String>,
        /// Due date (DD-MM-YYYY)
        #[arg(short, long)]
        due: Option<String>,
        /// Due time (HH:MM)
        #[arg(long)]
        time: Option<String>,
        /// Free-form notes
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// List tasks grouped by upcoming and completed
    List,
    /// Edit a task interactively
    Edit {
        /// Task ID to edit
        id: i64,
    },
    /// Toggle task completion
    Complete {
        /// Task ID to complete or reopen
        id: i64,
    },
    /// Delete a task
    Delete {
        /// Task ID to delete
        id: i64,
    },
}

pub fn cmd(args: TaskArgs) -> Result<()> {
    match args.command {
        Some(TaskCommand::Add {
            title,
            course,
            task_type,
            due,
            time,
            notes,
        }) => handle_add(title, course, task_type, due, time, notes),
        Some(TaskCommand::Edit { id }) => handle_edit(id),
        Some(TaskCommand::Complete { id }) => handle_complete(id),
        Some(TaskCommand::Delete { id }) => handle_delete(id),
        Some(TaskCommand::List) | None => handle_list(),
    }
}

fn handle_add(
    title: Option<String>,
    course: Option<String>,
    task_type: Option<String>,
    due: Option<String>,
    time: Option<String>,
    notes: Option<String>,
) -> Result<()> {
    let title = match title {
        Some(title) => title,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskTitle.to_string())
            .interact_text()?,
    };
    let course = match course {
        Some(course) => course,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskCourse.to_string())
            .interact_text()?,
    };

    let (task_type, custom_type) = match task_type {
        Some(label) => resolve_type_label(&label)?,
        None => prompt_type()?,
    };

    let due_date = match due {
        Some(input) => parse_due_date(&input)?,
        None => {
            let input: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptDueDate.to_string())
                .validate_with(|input: &String| parse_due_date(input).map(|_| ()).map_err(|e| e.to_string()))
                .interact_text()?;
            parse_due_date(&input)?
        }
    };

    let due_time = match time {
        Some(time) => time,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDueTime.to_string())
            .default("09:00".to_string())
            .interact_text()?,
    };
    if !reminder::is_valid_due_time(&due_time) {
        // Stored as-is; the due instant computation falls back to 00:00
        msg_warning!(Message::InvalidDueTime(due_time.clone()));
    }

    let notes = match notes {
        Some(notes) => notes,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptNotes.to_string())
            .allow_empty(true)
            .interact_text()?,
    };

    let mut task = Task::new(&title, &course, task_type, due_date).with_due_time(&due_time).with_notes(&notes);
    if let Some(name) = custom_type {
        task = task.with_custom_type(&name);
    }
    task.validate()?;

    let mut tasks_db = Tasks::new()?;
    let id = tasks_db.insert(&task)?;
    task.id = Some(id);
    reschedule(&task)?;

    msg_success!(Message::TaskCreated(task.title));
    Ok(())
}

fn handle_list() -> Result<()> {
    let mut tasks_db = Tasks::new()?;
    let now = Local::now().naive_local();

    let upcoming = tasks_db.fetch(TaskFilter::Upcoming)?;
    if upcoming.is_empty() {
        msg_info!(Message::NoUpcomingTasks);
    } else {
        msg_print!(Message::UpcomingTasksHeader, true);
        View::tasks(&upcoming, now)?;
    }

    let completed = tasks_db.fetch(TaskFilter::Completed)?;
    if completed.is_empty() {
        msg_info!(Message::NoCompletedTasks);
    } else {
        msg_print!(Message::CompletedTasksHeader, true);
        View::tasks(&completed, now)?;
    }
    Ok(())
}

fn handle_edit(id: i64) -> Result<()> {
    let mut tasks_db = Tasks::new()?;
    let mut task = match tasks_db.get_by_id(id)? {
        Some(task) => task,
        None => {
            msg_error!(Message::TaskNotFoundWithId(id));
            return Ok(());
        }
    };

    msg_print!(Message::EditingTask(task.title.clone()), true);

    task.title = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTitle.to_string())
        .default(task.title.clone())
        .interact_text()?;

    task.course = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskCourse.to_string())
        .default(task.course.clone())
        .interact_text()?;

    let due_input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptDueDate.to_string())
        .default(task.due_date.format(DATE_DISPLAY_FORMAT).to_string())
        .validate_with(|input: &String| parse_due_date(input).map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()?;
    task.due_date = parse_due_date(&due_input)?;

    task.due_time = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptDueTime.to_string())
        .default(task.due_time.clone())
        .interact_text()?;
    if !reminder::is_valid_due_time(&task.due_time) {
        msg_warning!(Message::InvalidDueTime(task.due_time.clone()));
    }

    let notes: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptNotes.to_string())
        .default(task.notes.clone().unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;
    task.notes = if notes.trim().is_empty() { None } else { Some(notes) };

    task.validate()?;
    tasks_db.update(&task)?;
    reschedule(&task)?;

    msg_success!(Message::TaskUpdated(task.title));
    Ok(())
}

fn handle_complete(id: i64) -> Result<()> {
    let mut tasks_db = Tasks::new()?;
    let mut task = match tasks_db.get_by_id(id)? {
        Some(task) => task,
        None => {
            msg_error!(Message::TaskNotFoundWithId(id));
            return Ok(());
        }
    };

    task.completed = !task.completed;
    tasks_db.set_completed(id, task.completed)?;
    // Completion cancels pending reminders; reopening recreates them
    reschedule(&task)?;

    if task.completed {
        msg_success!(Message::TaskCompleted(task.title));
    } else {
        msg_success!(Message::TaskReopened(task.title));
    }
    Ok(())
}

fn handle_delete(id: i64) -> Result<()> {
    let mut tasks_db = Tasks::new()?;
    let task = match tasks_db.get_by_id(id)? {
        Some(task) => task,
        None => {
            msg_error!(Message::TaskNotFoundWithId(id));
            return Ok(());
        }
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteTask(task.title.clone()).to_string())
        .default(false)
        .interact()?;
    if !confirmed {
        return Ok(());
    }

    tasks_db.delete(id)?;
    let mut queue = Triggers::new()?;
    reminder::schedule(&mut queue, id, task.due_date, true, Local::now().naive_local())?;

    msg_success!(Message::TaskDeleted(task.title));
    Ok(())
}

/// Replaces the task's pending triggers to match its current state.
fn reschedule(task: &Task) -> Result<()> {
    let id = task.id.ok_or_else(|| msg_error_anyhow!(Message::TaskNotFoundWithId(0)))?;
    let mut queue = Triggers::new()?;
    let count = reminder::schedule(&mut queue, id, task.due_date, task.completed, Local::now().naive_local())?;
    msg_debug!(format!("{}", Message::RemindersScheduled(count)));
    Ok(())
}

fn prompt_type() -> Result<(TaskType, Option<String>)> {
    let labels: Vec<&str> = ALL_TASK_TYPES.iter().map(|t| t.label()).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskType.to_string())
        .items(&labels)
        .default(0)
        .interact()?;

    let task_type = ALL_TASK_TYPES[selection];
    if task_type == TaskType::Custom {
        let name: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptCustomTypeName.to_string())
            .interact_text()?;
        return Ok((task_type, Some(name)));
    }
    Ok((task_type, None))
}

/// Resolves a type label given on the command line, checking the built-in
/// kinds first and user-defined ones second.
fn resolve_type_label(label: &str) -> Result<(TaskType, Option<String>)> {
    let task_type = TaskType::from_label(label);
    if task_type != TaskType::Custom {
        return Ok((task_type, None));
    }
    let mut types_db = TaskTypes::new()?;
    match types_db.get_by_name(label)? {
        Some(custom) => Ok((TaskType::Custom, Some(custom.name))),
        None => Ok((TaskType::Custom, Some(label.to_string()))),
    }
}

fn parse_due_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_DISPLAY_FORMAT).map_err(|_| msg_error_anyhow!(Message::InvalidDueDate(input.to_string())))
}
