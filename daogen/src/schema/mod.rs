//! Schema model consumed by the generator
//!
//! A [`Table`] is the fully populated description an introspector (or a schema
//! file) hands over: ordered columns, the primary-key list in declaration order
//! and the auto-increment list. Nothing here talks to a database.
//!
//! # Example
//!
//! ```
//! use daogen::schema::{Column, SqlType, Table};
//!
//! let table = Table::new("member")
//!     .column(Column::not_null("id", SqlType::BigInt))
//!     .column(Column::not_null("name", SqlType::VarChar))
//!     .column(Column::nullable("birthday", SqlType::Date))
//!     .primary_key(["id"])
//!     .auto_increment(["id"]);
//!
//! assert!(table.validate().is_ok());
//! assert_eq!(table.key_indices(), vec![0]);
//! assert_eq!(table.auto_increment_index(), Some(0));
//! ```

mod sql_type;

pub use sql_type::SqlType;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// One relation's columns and keys
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Schema (namespace) the table lives in, if any
    #[serde(default)]
    pub schema: Option<String>,
    /// Table name as used in SQL
    pub name: String,
    /// Columns in declaration order
    #[serde(default)]
    pub columns: Vec<Column>,
    /// Primary-key column names in key declaration order
    #[serde(default)]
    pub primary_key: Vec<String>,
    /// Auto-increment column names
    #[serde(default)]
    pub auto_increment: Vec<String>,
}

/// One field of a [`Table`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Wire name, used verbatim in SQL and string literals
    pub name: String,
    /// JDBC type family
    #[serde(rename = "type")]
    pub sql_type: SqlType,
    /// Whether the column accepts NULL
    #[serde(default)]
    pub nullable: bool,
}

impl Column {
    /// Create a NOT NULL column
    #[must_use]
    pub fn not_null(name: impl Into<String>, sql_type: SqlType) -> Self {
        Self {
            name: name.into(),
            sql_type,
            nullable: false,
        }
    }

    /// Create a nullable column
    #[must_use]
    pub fn nullable(name: impl Into<String>, sql_type: SqlType) -> Self {
        Self {
            name: name.into(),
            sql_type,
            nullable: true,
        }
    }
}

impl Table {
    /// Create an empty table description
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            schema: None,
            name: name.into(),
            columns: Vec::new(),
            primary_key: Vec::new(),
            auto_increment: Vec::new(),
        }
    }

    /// Set the schema name
    #[must_use]
    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// Append a column
    #[must_use]
    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Set the primary-key columns, in key order
    #[must_use]
    pub fn primary_key<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.primary_key = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the auto-increment columns
    #[must_use]
    pub fn auto_increment<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.auto_increment = names.into_iter().map(Into::into).collect();
        self
    }

    /// Look up a column by wire name
    #[must_use]
    pub fn find_column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Position of a column in declaration order
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Check that the table is usable for generation
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The table has no columns
    /// - A primary-key or auto-increment entry names an unknown column
    /// - A primary-key or auto-increment entry is listed twice
    pub fn validate(&self) -> Result<()> {
        if self.columns.is_empty() {
            return Err(Error::EmptyTable {
                table: self.name.clone(),
            });
        }

        if let Some(missing) = self.primary_key.iter().find(|n| self.find_column(n).is_none()) {
            return Err(Error::UnknownPrimaryKeyColumn {
                table: self.name.clone(),
                column: missing.clone(),
            });
        }

        if let Some(missing) = self
            .auto_increment
            .iter()
            .find(|n| self.find_column(n).is_none())
        {
            return Err(Error::UnknownAutoIncrementColumn {
                table: self.name.clone(),
                column: missing.clone(),
            });
        }

        if let Some(repeated) = first_repeat(&self.primary_key) {
            return Err(Error::DuplicatePrimaryKeyColumn {
                table: self.name.clone(),
                column: repeated.to_string(),
            });
        }

        if let Some(repeated) = first_repeat(&self.auto_increment) {
            return Err(Error::DuplicateAutoIncrementColumn {
                table: self.name.clone(),
                column: repeated.to_string(),
            });
        }

        Ok(())
    }

    /// Positions of the columns used for lookup, update and delete predicates
    ///
    /// The declared primary key in key order, or every column when no primary
    /// key is declared.
    #[must_use]
    pub fn key_indices(&self) -> Vec<usize> {
        if self.primary_key.is_empty() {
            (0..self.columns.len()).collect()
        } else {
            self.primary_key
                .iter()
                .filter_map(|name| self.column_index(name))
                .collect()
        }
    }

    /// Position of the auto-increment column, honoured only when exactly one
    /// is declared
    #[must_use]
    pub fn auto_increment_index(&self) -> Option<usize> {
        match self.auto_increment.as_slice() {
            [single] => self.column_index(single),
            _ => None,
        }
    }
}

fn first_repeat(names: &[String]) -> Option<&str> {
    names
        .iter()
        .enumerate()
        .find(|&(index, name)| names[..index].contains(name))
        .map(|(_, name)| name.as_str())
}
