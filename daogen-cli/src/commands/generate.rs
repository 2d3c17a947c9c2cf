//! Generate model and test-spec files

use super::{generate_all, load_config, project_root};
use crate::sink::{OutputSink, WriteMode, WriteOutcome};
use anyhow::{Context, Result};
use clap::Args;
use console::style;
use std::path::PathBuf;

/// Generate sources for tables in a schema file
///
/// Examples:
///   daogen generate schema.toml
///   daogen generate schema.toml --table member --table member_group
///   daogen generate schema.json --overwrite
#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Schema file describing the tables (TOML, or JSON with a `.json` extension)
    pub schema: PathBuf,

    /// Only generate these tables (repeatable)
    #[arg(short, long = "table", value_name = "NAME")]
    pub tables: Vec<String>,

    /// Configuration file to use instead of the standard locations
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Replace files that already exist
    #[arg(long)]
    pub overwrite: bool,

    /// Print what would be written without touching the file system
    #[arg(long)]
    pub dry_run: bool,

    /// Directory the generated paths are relative to (default: current directory)
    #[arg(long, value_name = "DIR")]
    pub output_root: Option<PathBuf>,
}

impl GenerateCommand {
    /// Execute the generate command
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration or schema file is invalid
    /// - A table fails validation
    /// - A file cannot be written
    pub fn execute(self) -> Result<()> {
        let config = load_config(self.config.as_deref())?;
        let artifacts = generate_all(&self.schema, &self.tables, &config)?;
        let root = project_root(self.output_root)?;

        let mode = if self.overwrite {
            WriteMode::Overwrite
        } else {
            WriteMode::SkipExisting
        };
        let sink = OutputSink::new(root, mode);

        println!(
            "\n{} {} {}",
            style("Generating").cyan().bold(),
            style(artifacts.len()).green().bold(),
            style(if artifacts.len() == 1 { "table" } else { "tables" }).cyan().bold()
        );

        let mut written = 0usize;
        for artifact in &artifacts {
            for file in artifact.files() {
                if self.dry_run {
                    println!(
                        "  {} {} ({})",
                        style("~").yellow(),
                        style(sink.target(file).display()).dim(),
                        style(&file.description).dim()
                    );
                    continue;
                }

                let outcome = sink
                    .commit(file)
                    .with_context(|| format!("Failed to write file: {}", sink.target(file).display()))?;
                let marker = match outcome {
                    WriteOutcome::Written => style("✓").green(),
                    WriteOutcome::Overwritten => style("↻").yellow(),
                    WriteOutcome::AlreadyExists => style("=").dim(),
                };
                let note = match outcome {
                    WriteOutcome::AlreadyExists => "already exists".to_string(),
                    WriteOutcome::Written | WriteOutcome::Overwritten => {
                        written += 1;
                        file.description.clone()
                    }
                };
                println!(
                    "  {} {} ({})",
                    marker,
                    style(file.path.display()).dim(),
                    style(note).dim()
                );
            }
        }

        if self.dry_run {
            println!("\n{} Nothing written", style("Dry run:").yellow().bold());
        } else {
            println!(
                "\n{} {} file(s) written",
                style("✨").green().bold(),
                style(written).green().bold()
            );
        }
        tracing::info!(tables = artifacts.len(), files = written, "Generation finished");

        Ok(())
    }
}
