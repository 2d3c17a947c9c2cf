//! Table descriptions read from disk
//!
//! A schema file stands in for live introspection. TOML by default, JSON when
//! the path ends in `.json`:
//!
//! ```toml
//! [[tables]]
//! name = "member"
//! primary_key = ["id"]
//! auto_increment = ["id"]
//!
//! [[tables.columns]]
//! name = "id"
//! type = "BIGINT"
//! ```

use anyhow::{bail, Context, Result};
use daogen::{GeneratorConfig, Table};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Every table described by one file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaFile {
    /// Tables in file order
    #[serde(default)]
    pub tables: Vec<Table>,
}

impl SchemaFile {
    /// Read and parse `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read schema file: {}", path.display()))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let schema: Self = if is_json {
            serde_json::from_str(&raw)
                .with_context(|| format!("Failed to parse JSON schema: {}", path.display()))?
        } else {
            toml::from_str(&raw)
                .with_context(|| format!("Failed to parse TOML schema: {}", path.display()))?
        };

        tracing::debug!(path = %path.display(), tables = schema.tables.len(), "Loaded schema file");
        Ok(schema)
    }

    /// Tables to generate, in file order
    ///
    /// With an empty `names` every table is selected. Tables listed in
    /// `tables_to_skip` are dropped either way.
    ///
    /// # Errors
    ///
    /// Returns an error if a requested name matches no table.
    pub fn select<'a>(&'a self, names: &[String], config: &GeneratorConfig) -> Result<Vec<&'a Table>> {
        if let Some(missing) = names
            .iter()
            .find(|n| !self.tables.iter().any(|t| t.name.eq_ignore_ascii_case(n)))
        {
            bail!("Table '{missing}' is not described in the schema file");
        }

        Ok(self
            .tables
            .iter()
            .filter(|t| names.is_empty() || names.iter().any(|n| t.name.eq_ignore_ascii_case(n)))
            .filter(|t| {
                let skipped = config.skips(&t.name);
                if skipped {
                    tracing::info!(table = %t.name, "Skipping table");
                }
                !skipped
            })
            .collect())
    }
}
