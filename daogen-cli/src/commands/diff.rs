//! Compare generated sources with what is on disk

use super::{generate_all, load_config, project_root};
use crate::sink::{OutputSink, WriteMode};
use anyhow::{Context, Result};
use clap::Args;
use console::style;
use similar::{ChangeTag, TextDiff};
use std::path::PathBuf;

/// Show how regenerating would change existing files
#[derive(Debug, Args)]
pub struct DiffCommand {
    /// Schema file describing the tables
    pub schema: PathBuf,

    /// Only compare these tables (repeatable)
    #[arg(short, long = "table", value_name = "NAME")]
    pub tables: Vec<String>,

    /// Configuration file to use instead of the standard locations
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory the generated paths are relative to (default: current directory)
    #[arg(long, value_name = "DIR")]
    pub output_root: Option<PathBuf>,
}

impl DiffCommand {
    /// Execute the diff command
    ///
    /// # Errors
    ///
    /// Returns an error if generation fails or an existing file cannot be read.
    pub fn execute(self) -> Result<()> {
        let config = load_config(self.config.as_deref())?;
        let artifacts = generate_all(&self.schema, &self.tables, &config)?;
        let sink = OutputSink::new(project_root(self.output_root)?, WriteMode::SkipExisting);

        let mut changed = 0usize;
        for file in artifacts.iter().flat_map(|a| a.files()) {
            let target = sink.target(file);
            let existing = sink
                .existing(file)
                .with_context(|| format!("Failed to read file: {}", target.display()))?;

            match existing {
                None => {
                    changed += 1;
                    println!("{} {}", style("new").green().bold(), file.path.display());
                }
                Some(current) if current == file.content => {
                    println!("{} {}", style("unchanged").dim(), style(file.path.display()).dim());
                }
                Some(current) => {
                    changed += 1;
                    println!("{} {}", style("changed").yellow().bold(), file.path.display());
                    print_diff(&current, &file.content);
                }
            }
        }

        println!("\n{} file(s) would change", style(changed).bold());
        Ok(())
    }
}

fn print_diff(old: &str, new: &str) {
    let diff = TextDiff::from_lines(old, new);
    for group in diff.grouped_ops(3) {
        for op in group {
            for change in diff.iter_changes(&op) {
                let line = change.value().trim_end_matches(['\r', '\n']);
                match change.tag() {
                    ChangeTag::Delete => println!("  {}", style(format!("-{line}")).red()),
                    ChangeTag::Insert => println!("  {}", style(format!("+{line}")).green()),
                    ChangeTag::Equal => println!("  {}", style(format!(" {line}")).dim()),
                }
            }
        }
        println!("  {}", style("...").dim());
    }
}
