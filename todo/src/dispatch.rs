//! One-shot command dispatch for `todo <command> [args...]`.
//!
//! Each command performs exactly one repository operation and reports the
//! outcome. The interactive menu is never printed here.

use std::io::Write;

use anyhow::{Context, Result, anyhow};
use clap::Subcommand;
use tracing::{debug, info};

use crate::core::collection::parse_id;
use crate::core::filter::Filter;
use crate::core::types::Request;
use crate::exit_codes;
use crate::io::store::TodoStore;
use crate::render::{INVALID_FILTER, list_block, outcome_message};
use crate::repository::TodoRepository;

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Append a new unchecked todo.
    Add {
        #[arg(allow_hyphen_values = true)]
        title: String,
        #[arg(allow_hyphen_values = true)]
        body: String,
    },
    /// Replace the title and body of a todo.
    Edit {
        #[arg(allow_hyphen_values = true)]
        id: String,
        #[arg(allow_hyphen_values = true)]
        title: String,
        #[arg(allow_hyphen_values = true)]
        body: String,
    },
    /// Delete a todo; later ids shift down by one.
    Remove {
        #[arg(allow_hyphen_values = true)]
        id: String,
    },
    /// Mark a todo as completed.
    Check {
        #[arg(allow_hyphen_values = true)]
        id: String,
    },
    /// Mark a todo as not completed.
    Uncheck {
        #[arg(allow_hyphen_values = true)]
        id: String,
    },
    /// Print todos: `all`, `checked` or `unchecked`.
    List {
        #[arg(allow_hyphen_values = true)]
        filter: Option<String>,
    },
}

/// Run one command against `repo`, writing user output to `out`.
///
/// Returns the process exit code. Invalid ids still exit with
/// `exit_codes::OK`; an unknown list filter exits with `exit_codes::INVALID`.
/// Save failures are returned as errors.
pub fn dispatch<S: TodoStore, W: Write>(
    repo: &mut TodoRepository<S>,
    command: Command,
    out: &mut W,
) -> Result<i32> {
    let request = match command {
        Command::List { filter } => return list(repo, filter.as_deref(), out),
        Command::Add { title, body } => Request::Add { title, body },
        Command::Edit { id, title, body } => Request::Edit {
            id: parse_id(&id),
            title,
            body,
        },
        Command::Remove { id } => Request::Remove { id: parse_id(&id) },
        Command::Check { id } => Request::Check { id: parse_id(&id) },
        Command::Uncheck { id } => Request::Uncheck { id: parse_id(&id) },
    };
    debug!(?request, "dispatching one-shot request");
    let outcome = repo.apply(request)?;
    info!(?outcome, "one-shot command finished");
    writeln!(out, "{}", outcome_message(&outcome)).context("write outcome")?;
    Ok(exit_codes::OK)
}

fn list<S: TodoStore, W: Write>(
    repo: &TodoRepository<S>,
    raw_filter: Option<&str>,
    out: &mut W,
) -> Result<i32> {
    // One-shot `list` requires an explicit keyword; absent is rejected like an unknown one.
    let parsed = raw_filter
        .ok_or_else(|| anyhow!("missing list filter"))
        .and_then(str::parse::<Filter>);
    let filter = match parsed {
        Ok(filter) => filter,
        Err(err) => {
            debug!(error = %err, "rejecting list filter");
            writeln!(out, "{INVALID_FILTER}").context("write filter error")?;
            return Ok(exit_codes::INVALID);
        }
    };
    let items = repo.list(Some(filter));
    debug!(%filter, count = items.len(), "listing todos");
    writeln!(out, "{}", list_block(&items)).context("write list")?;
    Ok(exit_codes::OK)
}
