//! Command-line todo list manager.
//!
//! `todo <command> [args...]` performs one operation and exits; `todo` with
//! no command starts the interactive menu. Todos live in `todos.json` in the
//! working directory unless `.todo.toml` or `--file` says otherwise.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use todo::dispatch::{Command, dispatch};
use todo::exit_codes;
use todo::io::config::{CONFIG_FILE_NAME, load_config};
use todo::io::console::Console;
use todo::io::store::JsonFileStore;
use todo::logging;
use todo::render::INVALID_COMMAND;
use todo::repository::TodoRepository;
use todo::session::run_session;
use tracing::debug;

#[derive(Parser)]
#[command(name = "todo", version, about = "Single-user todo list manager")]
struct Cli {
    /// Todo data file (overrides `data_file` from `.todo.toml`).
    #[arg(long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Omit to start the interactive menu.
    #[command(subcommand)]
    command: Option<Command>,
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return Ok(report_usage_error(&err)),
    };

    let cwd = std::env::current_dir().context("resolve working directory")?;
    let config = load_config(&cwd.join(CONFIG_FILE_NAME))?;
    let data_file = cli.file.unwrap_or_else(|| config.data_file_path(&cwd));
    debug!(data_file = %data_file.display(), "resolved data file");

    let mut repo = TodoRepository::open(JsonFileStore::new(data_file));
    let stdout = io::stdout();
    match cli.command {
        Some(command) => {
            let mut out = stdout.lock();
            let code = dispatch(&mut repo, command, &mut out)?;
            out.flush().context("flush stdout")?;
            Ok(code)
        }
        None => {
            let mut console = Console::new(io::stdin().lock(), stdout.lock());
            run_session(&mut repo, &mut console)?;
            Ok(exit_codes::OK)
        }
    }
}

/// Map clap parse failures onto the CLI's exit codes.
fn report_usage_error(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            exit_codes::OK
        }
        ErrorKind::InvalidSubcommand => {
            println!("{INVALID_COMMAND}");
            exit_codes::INVALID
        }
        _ => {
            let _ = err.print();
            exit_codes::INVALID
        }
    }
}
