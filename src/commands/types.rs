//! Custom task type management command.

use crate::db::task_types::{CustomTaskType, TaskTypes};
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

#[derive(Debug, Args)]
pub struct TypesArgs {
    #[command(subcommand)]
    command: Option<TypesCommand>,
}

#[derive(Debug, Subcommand)]
enum TypesCommand {
    /// Create a custom task type
    Add {
        /// Type name
        name: Option<String>,
        /// Badge color as a hex string, e.g. "#6366F1"
        #[arg(short, long)]
        color: Option<String>,
    },
    /// List custom task types
    List,
    /// Delete a custom task type
    Delete {
        /// Type ID to delete
        id: i64,
    },
}

pub fn cmd(args: TypesArgs) -> Result<()> {
    match args.command {
        Some(TypesCommand::Add { name, color }) => handle_add(name, color),
        Some(TypesCommand::Delete { id }) => handle_delete(id),
        Some(TypesCommand::List) | None => handle_list(),
    }
}

fn handle_add(name: Option<String>, color: Option<String>) -> Result<()> {
    let name = match name {
        Some(name) => name,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTypeName.to_string())
            .interact_text()?,
    };
    let name = name.trim().to_string();
    if name.is_empty() {
        return Ok(());
    }

    let mut types_db = TaskTypes::new()?;
    if types_db.get_by_name(&name)?.is_some() {
        msg_error!(Message::TypeAlreadyExists(name));
        return Ok(());
    }

    let color = match color {
        Some(color) => Some(color),
        None => {
            let input: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTypeColor.to_string())
                .allow_empty(true)
                .interact_text()?;
            if input.trim().is_empty() { None } else { Some(input) }
        }
    };

    types_db.create(&CustomTaskType::new(name.clone(), color))?;
    msg_success!(Message::TypeCreated(name));
    Ok(())
}

fn handle_list() -> Result<()> {
    let mut types_db = TaskTypes::new()?;
    let types = types_db.list()?;
    if types.is_empty() {
        msg_info!(Message::NoCustomTypes);
        return Ok(());
    }
    msg_print!(Message::TypeListHeader, true);
    View::task_types(&types)?;
    Ok(())
}

fn handle_delete(id: i64) -> Result<()> {
    let mut types_db = TaskTypes::new()?;
    let types = types_db.list()?;
    let Some(task_type) = types.into_iter().find(|t| t.id == Some(id)) else {
        msg_error!(Message::TypeNotFound(id.to_string()));
        return Ok(());
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteType(task_type.name.clone()).to_string())
        .default(false)
        .interact()?;
    if !confirmed {
        return Ok(());
    }

    types_db.delete(id)?;
    msg_success!(Message::TypeDeleted(task_type.name));
    Ok(())
}
