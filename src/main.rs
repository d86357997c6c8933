use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cycletool::{commands, DEFAULT_DB_PATH};

/// Maintenance tool for the cycle tracker's SQLite database.
#[derive(Parser)]
#[command(name = "cycletool", version, about)]
struct Cli {
    /// Path to the tracker's SQLite database
    #[arg(long, global = true, default_value = DEFAULT_DB_PATH)]
    db: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create the three tables if they do not exist
    Init,
    /// Delete every row from user_settings, trade_logs and cycle_statuses
    Reset,
    /// Reset, then insert the fixed development scenario
    Seed,
    /// Show the row count of each table
    Status {
        /// Emit the counts as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Init => commands::init(&cli.db)?,
        Command::Reset => commands::reset(&cli.db)?,
        Command::Seed => commands::seed(&cli.db)?,
        Command::Status { json } => commands::status(&cli.db, json)?,
    }

    Ok(())
}
