use std::fs::File;
use std::io::{BufRead, ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use journal_config::{journal_dirs, Config};
use journal_store::RecordStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod console;
mod handlers;
mod menu;

use console::Console;
use menu::{Journal, SystemClock};

const MAIN_HELP: &str = r#"Travel Journal keeps a list of users and the trips each of them has taken.

Run without a subcommand to start an interactive session. Everything entered
during a session is kept in memory and discarded when the session ends.

Settings are read from ~/.config/travel-journal/config.toml; see
`travel-journal config` for the active file."#;

#[derive(Parser)]
#[command(name = "travel-journal")]
#[command(about = MAIN_HELP)]
#[command(version)]
struct Cli {
    #[arg(long, global = true, help = "Path to the config file")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Print config file location and contents.")]
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let dirs = journal_dirs();
    let config_path = cli.config.unwrap_or_else(|| dirs.config_file());

    match cli.command {
        Some(Commands::Config) => write_config_report(&config_path, &mut std::io::stdout().lock()),
        None => {
            let stdin = std::io::stdin();
            handle_session(
                &config_path,
                &dirs.log_file(),
                stdin.lock(),
                std::io::stdout().lock(),
            )
        }
    }
}

fn write_config_report<W: Write>(config_path: &Path, out: &mut W) -> Result<()> {
    writeln!(out, "Config file: {}", config_path.display())?;
    writeln!(out)?;

    match std::fs::read_to_string(config_path) {
        Ok(content) => writeln!(out, "{}", content.trim_end())?,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            writeln!(out, "(file does not exist, using defaults)")?
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn handle_session<R: BufRead, W: Write>(
    config_path: &Path,
    log_path: &Path,
    input: R,
    output: W,
) -> Result<()> {
    let config = Config::load_from(config_path)?;
    init_logging(&config, log_path);

    info!(
        "Starting session (duplicate names: {}, max attempts: {:?})",
        config.users.duplicate_names, config.input.max_attempts
    );

    let store = RecordStore::new(config.users.duplicate_names);
    let mut journal = Journal::new(store, SystemClock);
    let mut console = Console::new(input, output, config.input.max_attempts);
    journal.run(&mut console)?;

    info!("Session ended with {} user(s)", journal.store().user_count());
    Ok(())
}

/// Logs go to a file so stdout carries only the dialogue. Without a usable
/// log file the session runs unlogged. Returns whether a subscriber was
/// installed.
fn init_logging(config: &Config, log_path: &Path) -> bool {
    let Some(log_file) = open_log_file(log_path) else {
        return false;
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(log_file)
        .with_ansi(false)
        .try_init()
        .is_ok()
}

fn open_log_file(log_path: &Path) -> Option<File> {
    if let Some(dir) = log_path.parent() {
        std::fs::create_dir_all(dir).ok()?;
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .ok()
}
