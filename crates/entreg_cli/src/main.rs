//! entreg console entry point.
//!
//! # Responsibility
//! - Parse configuration flags and bootstrap logging and storage.
//! - Wire the layers explicitly: repository over connection, service over
//!   repository, loop over service.
//!
//! # Invariants
//! - Configuration comes from flags only; the command protocol stays on
//!   stdin.
//! - A logging failure downgrades the session to console-only; a storage
//!   or I/O failure ends the process with status 1.

use clap::Parser;
use entreg_cli::repl;
use entreg_core::db::{open_db, open_db_in_memory};
use entreg_core::{default_log_level, init_logging, EntityService, SqliteEntityRepository};
use log::error;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "entreg")]
#[command(about = "entreg - interactive entity registry console", long_about = None)]
struct Cli {
    /// SQLite database file backing the registry.
    #[arg(long, default_value = "entreg.sqlite3", conflicts_with = "in_memory")]
    db: PathBuf,

    /// Run against an ephemeral in-memory database instead of a file.
    #[arg(long)]
    in_memory: bool,

    /// Log level: trace|debug|info|warn|error.
    #[arg(long)]
    log_level: Option<String>,

    /// Directory for rolling log files.
    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = bootstrap_logging(&cli) {
        eprintln!("Warning: file logging disabled: {err}");
    }

    if let Err(err) = run(&cli) {
        error!("event=app_exit module=cli status=error error={err}");
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let conn = if cli.in_memory {
        open_db_in_memory()?
    } else {
        open_db(&cli.db)?
    };

    let repo = SqliteEntityRepository::new(&conn);
    let service = EntityService::new(repo);

    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::run(stdin.lock(), stdout.lock(), &service)?;

    Ok(())
}

fn bootstrap_logging(cli: &Cli) -> Result<(), String> {
    let level = cli.log_level.as_deref().unwrap_or_else(default_log_level);

    // Core logging requires an absolute directory; resolve relative flags
    // against the working directory before handing them over.
    let log_dir = absolute_log_dir(&cli.log_dir)?;
    let log_dir = log_dir
        .to_str()
        .ok_or_else(|| format!("log directory `{}` is not valid UTF-8", log_dir.display()))?;

    init_logging(level, log_dir)
}

fn absolute_log_dir(dir: &Path) -> Result<PathBuf, String> {
    if dir.is_absolute() {
        return Ok(dir.to_path_buf());
    }

    let cwd = std::env::current_dir()
        .map_err(|err| format!("cannot resolve working directory: {err}"))?;
    Ok(cwd.join(dir))
}
