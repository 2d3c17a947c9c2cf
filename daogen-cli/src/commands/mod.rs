//! CLI command implementations

pub mod config;
pub mod diff;
pub mod generate;

pub use config::ConfigCommand;
pub use diff::DiffCommand;
pub use generate::GenerateCommand;

use crate::schema_file::SchemaFile;
use anyhow::{bail, Context, Result};
use daogen::{GeneratedArtifact, GeneratorConfig, GeneratorSettings};
use std::path::{Path, PathBuf};

/// Effective configuration, from `path` when given
///
/// # Errors
///
/// Returns an error if the settings cannot be loaded or hold unsupported values.
pub fn load_config(path: Option<&Path>) -> Result<GeneratorConfig> {
    let settings = match path {
        Some(path) => GeneratorSettings::load_from(path)
            .with_context(|| format!("Failed to load configuration: {}", path.display()))?,
        None => GeneratorSettings::load().context("Failed to load configuration")?,
    };
    settings.resolve().context("Invalid configuration")
}

/// Generate artifacts for the selected tables of `schema_path`
///
/// # Errors
///
/// Returns an error if the schema cannot be read, a requested table is missing,
/// a class name override would apply to more than one table, or a table fails
/// to generate.
pub fn generate_all(
    schema_path: &Path,
    tables: &[String],
    config: &GeneratorConfig,
) -> Result<Vec<GeneratedArtifact>> {
    let schema = SchemaFile::load(schema_path)?;
    let selected = schema.select(tables, config)?;
    if let Some(class_name) = config.target_class_name.as_deref().filter(|_| selected.len() > 1) {
        bail!(
            "target_class_name '{class_name}' would apply to {} tables; select a single table with --table",
            selected.len()
        );
    }
    selected
        .into_iter()
        .map(|table| {
            daogen::generate(table, config)
                .with_context(|| format!("Failed to generate code for table '{}'", table.name))
        })
        .collect()
}

/// Project root the generated paths are relative to
///
/// # Errors
///
/// Returns an error if no root is given and the current directory is unavailable.
pub fn project_root(output_root: Option<PathBuf>) -> Result<PathBuf> {
    match output_root {
        Some(root) => Ok(root),
        None => std::env::current_dir().context("Failed to get current directory"),
    }
}
