//! Command-line surface: one verb per invocation, one repository call per verb.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::application::todo_service::TodoService;
use crate::domain::{error::TodoError, id::ItemId};

pub mod prompt;
pub mod render;

use prompt::DescriptionPrompt;

#[derive(Parser, Debug)]
#[command(name = "todo", version, about = "maintain a to-do checklist from your terminal")]
pub struct Cli {
    /// Use this list file instead of the configured one.
    #[arg(long, global = true, value_name = "PATH")]
    pub list: Option<PathBuf>,

    /// Calling without a command lists the items.
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    pub fn into_command(self) -> Command { self.command.unwrap_or(Command::List) }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the current state of the list.
    #[command(alias = "l")]
    List,

    /// Add a new item to the list.
    #[command(alias = "a")]
    Add {
        #[arg(required = true, num_args = 1.., value_name = "DESCRIPTION")]
        description: Vec<String>,
    },

    /// Change an item's description; prompts when none is given.
    #[command(alias = "e")]
    Edit {
        #[arg(allow_negative_numbers = true)]
        id: String,
        #[arg(value_name = "DESCRIPTION")]
        description: Vec<String>,
    },

    /// Mark an item as complete.
    #[command(alias = "c")]
    Complete {
        #[arg(allow_negative_numbers = true)]
        id: String,
    },

    /// Mark an item as incomplete.
    #[command(visible_alias = "incomplete", alias = "i")]
    Uncomplete {
        #[arg(allow_negative_numbers = true)]
        id: String,
    },

    /// Remove an item from the list.
    #[command(alias = "r")]
    Remove {
        #[arg(allow_negative_numbers = true)]
        id: String,
    },

    /// Remove all items from the list.
    #[command(alias = "p")]
    Purge,

    /// Remove all completed items from the list.
    #[command(alias = "cu")]
    Cleanup,
}

fn parse_id(raw: &str, verb: &str) -> Result<ItemId> {
    raw.parse::<ItemId>().map_err(TodoError::from).with_context(|| format!("unable to {verb} item"))
}

pub fn run<S: TodoService>(
    command: Command,
    service: &mut S,
    prompt: &mut impl DescriptionPrompt,
    out: &mut impl Write,
) -> Result<()> {
    debug!(?command, "running");
    match command {
        Command::List => {
            if let Some(notice) = render::empty_notice(service.count() == 0) {
                writeln!(out, "{notice}")?;
            }
            for item in service.list() {
                writeln!(out, "{item}")?;
            }
        }
        Command::Add { description } => {
            let item = service.add(&description.join(" "))?;
            writeln!(out, "{}", render::action_line("Added", &item))?;
        }
        Command::Edit { id, description } => {
            let id = parse_id(&id, "edit")?;
            let item = service
                .get(id)
                .ok_or(TodoError::NotFound(id))
                .with_context(|| format!("unable to edit item {id}"))?;
            let description = if description.is_empty() {
                prompt
                    .edit_description(&item.description)
                    .with_context(|| format!("error while editing item {id}"))?
                    .ok_or_else(|| anyhow!("edit of item {id} cancelled"))?
            } else {
                description.join(" ")
            };
            let updated = service.edit(id, &description)?;
            writeln!(out, "{}", render::action_line("Updated", &updated))?;
        }
        Command::Complete { id } => {
            let item = service.complete(parse_id(&id, "complete")?)?;
            writeln!(out, "{}", render::action_line("Completed", &item))?;
        }
        Command::Uncomplete { id } => {
            let item = service.uncomplete(parse_id(&id, "incomplete")?)?;
            writeln!(out, "{}", render::action_line("Incompleted", &item))?;
        }
        Command::Remove { id } => {
            let item = service.remove(parse_id(&id, "remove")?)?;
            writeln!(out, "{}", render::action_line("Removed", &item))?;
        }
        Command::Purge => {
            if let Some(notice) = render::empty_notice(service.count() == 0) {
                writeln!(out, "{notice}")?;
            }
            service.purge()?;
            writeln!(out, "{}", render::PURGED)?;
        }
        Command::Cleanup => {
            if let Some(notice) = render::empty_notice(service.count() == 0) {
                writeln!(out, "{notice}")?;
            }
            writeln!(out, "{}", render::CLEANING)?;
            let removed = service.cleanup()?;
            debug!(removed, "cleanup finished");
            writeln!(out, "{}", render::CLEANED)?;
        }
    }
    Ok(())
}
