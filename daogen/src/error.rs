//! Error types and error handling

use thiserror::Error;

/// Result alias used throughout the generator
pub type Result<T> = std::result::Result<T, Error>;

/// Generator error type
///
/// Every variant names the table, column or configuration field it was raised
/// for, so malformed input is reported before any text is produced.
#[derive(Debug, Error)]
pub enum Error {
    /// The table declares no columns
    #[error("Table '{table}' has no columns")]
    EmptyTable {
        /// Table name
        table: String,
    },

    /// Every column was excluded from the insert list
    #[error("Table '{table}' has no insertable columns (its only column is auto-increment)")]
    EmptyInsertColumns {
        /// Table name
        table: String,
    },

    /// A column maps onto a name the generated code already uses
    #[error(
        "Column '{column}' of table '{table}' maps to '{identifier}', which is reserved in generated code"
    )]
    ReservedNameCollision {
        /// Table name
        table: String,
        /// Wire name of the offending column
        column: String,
        /// Identifier the column mapped to
        identifier: String,
    },

    /// Two columns map onto the same identifier
    #[error("Columns '{first}' and '{second}' of table '{table}' both map to '{identifier}'")]
    DuplicateIdentifier {
        /// Table name
        table: String,
        /// Shared identifier
        identifier: String,
        /// First column wire name
        first: String,
        /// Second column wire name
        second: String,
    },

    /// A primary-key entry names a column the table does not have
    #[error("Primary key of table '{table}' references unknown column '{column}'")]
    UnknownPrimaryKeyColumn {
        /// Table name
        table: String,
        /// Missing column name
        column: String,
    },

    /// An auto-increment entry names a column the table does not have
    #[error("Auto-increment list of table '{table}' references unknown column '{column}'")]
    UnknownAutoIncrementColumn {
        /// Table name
        table: String,
        /// Missing column name
        column: String,
    },

    /// A primary-key entry is listed more than once
    #[error("Primary key of table '{table}' lists column '{column}' more than once")]
    DuplicatePrimaryKeyColumn {
        /// Table name
        table: String,
        /// Repeated column name
        column: String,
    },

    /// An auto-increment entry is listed more than once
    #[error("Auto-increment list of table '{table}' lists column '{column}' more than once")]
    DuplicateAutoIncrementColumn {
        /// Table name
        table: String,
        /// Repeated column name
        column: String,
    },

    /// Unrecognised value for an enumerated configuration option
    #[error("Unsupported value '{value}' for configuration option '{field}'")]
    UnsupportedOption {
        /// Configuration field name
        field: &'static str,
        /// Rejected value
        value: String,
    },

    /// Unrecognised SQL type name in a schema description
    #[error("Unknown SQL type: '{0}'")]
    UnknownSqlType(String),

    /// Package name is not a dotted sequence of identifiers
    #[error("Invalid package name: '{value}'")]
    InvalidPackageName {
        /// Rejected package name
        value: String,
    },

    /// Class name override is not a plain Scala identifier
    #[error("Invalid class name: '{value}'")]
    InvalidClassName {
        /// Rejected class name
        value: String,
    },

    /// Derived class name shadows a type the generated code refers to
    #[error(
        "Table '{table}' maps to class '{class_name}', which shadows a type used in generated code; set target_class_name"
    )]
    ReservedClassName {
        /// Table name
        table: String,
        /// Derived class name
        class_name: String,
    },

    /// Test-spec skeleton failed to render
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    /// Configuration sources could not be merged or extracted
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}
