//! daogen CLI tool

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use daogen_cli::commands::{ConfigCommand, DiffCommand, GenerateCommand};
use daogen_cli::observability;

#[derive(Parser)]
#[command(name = "daogen")]
#[command(version)]
#[command(about = "ScalikeJDBC model and DAO generator", long_about = None)]
struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate model and test-spec sources
    Generate(GenerateCommand),
    /// Show how regenerating would change existing files
    Diff(DiffCommand),
    /// Manage generator settings
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    observability::init(cli.verbose)?;

    match cli.command {
        Commands::Generate(cmd) => cmd.execute()?,
        Commands::Diff(cmd) => cmd.execute()?,
        Commands::Config { command } => command.execute()?,
    }

    Ok(())
}
