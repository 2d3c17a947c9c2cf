//! Generator configuration
//!
//! [`GeneratorConfig`] is the resolved, typed set of options every generation
//! call reads. Enumerated options are closed enums, so the template selector
//! handles each variant exhaustively. Loading from files and the environment
//! lives in [`settings`], which resolves raw strings into this type.
//!
//! # Example
//!
//! ```
//! use daogen::config::{CollectionShape, GeneratorConfig, SqlStyle};
//!
//! let config = GeneratorConfig::default()
//!     .with_package("com.example.models")
//!     .with_sql_style(SqlStyle::Interpolation)
//!     .with_collection_shape(CollectionShape::Vector);
//!
//! assert_eq!(config.package_name, "com.example.models");
//! ```

pub mod settings;

pub use settings::GeneratorSettings;

use crate::error::{Error, Result};
use crate::naming::NameHelpers;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// How SQL statements are written in generated accessors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SqlStyle {
    /// `sql"""..."""` string interpolation with `${...}` placeholders
    Interpolation,
    /// `withSQL { select.from(...) }` query DSL calls
    #[default]
    QueryDsl,
}

/// Test framework skeleton for the generated spec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TestStyle {
    /// ScalaTest `FlatSpec` with linear `it should` assertions
    #[default]
    FlatSpec,
    /// specs2 unit specification with nested `in new AutoRollback` blocks
    UnitSpec,
    /// specs2 acceptance specification composing example fragments
    AcceptanceSpec,
    /// No test spec is generated
    None,
}

/// Result type of multi-row accessors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CollectionShape {
    /// `List[X]`
    #[default]
    List,
    /// `Vector[X]`
    Vector,
    /// `Array[X]`
    Array,
    /// `C[X]` with a `CanBuildFrom` builder parameter
    ParametricBuilder,
}

/// Date/time library the generated code binds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateTimeBinding {
    /// `org.joda.time`
    JodaTime,
    /// `java.time`
    #[default]
    JavaTime,
}

/// Whether accessors block or return futures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExecutionMode {
    /// `DBSession`, results returned directly
    #[default]
    Sync,
    /// `AsyncDBSession`, results wrapped in `Future`
    Async,
}

/// Line terminator of generated files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineBreak {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    Crlf,
}

/// Lowercase and drop separators so `query_dsl`, `queryDsl` and `query-dsl` agree
fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

fn unsupported(field: &'static str, value: &str) -> Error {
    Error::UnsupportedOption {
        field,
        value: value.to_string(),
    }
}

impl SqlStyle {
    /// Canonical configuration tag
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Interpolation => "interpolation",
            Self::QueryDsl => "query_dsl",
        }
    }
}

impl FromStr for SqlStyle {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        match normalize(input).as_str() {
            "interpolation" => Ok(Self::Interpolation),
            "querydsl" => Ok(Self::QueryDsl),
            _ => Err(unsupported("sql_style", input)),
        }
    }
}

impl TestStyle {
    /// Canonical configuration tag
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FlatSpec => "flat_spec",
            Self::UnitSpec => "unit_spec",
            Self::AcceptanceSpec => "acceptance_spec",
            Self::None => "none",
        }
    }
}

impl FromStr for TestStyle {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        match normalize(input).as_str() {
            "flatspec" | "scalatest" => Ok(Self::FlatSpec),
            "unitspec" | "specs2unit" => Ok(Self::UnitSpec),
            "acceptancespec" | "specs2acceptance" => Ok(Self::AcceptanceSpec),
            "none" | "off" => Ok(Self::None),
            _ => Err(unsupported("test_style", input)),
        }
    }
}

impl CollectionShape {
    /// Canonical configuration tag
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Vector => "vector",
            Self::Array => "array",
            Self::ParametricBuilder => "parametric_builder",
        }
    }
}

impl FromStr for CollectionShape {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        match normalize(input).as_str() {
            "list" => Ok(Self::List),
            "vector" => Ok(Self::Vector),
            "array" => Ok(Self::Array),
            "parametricbuilder" | "canbuildfrom" => Ok(Self::ParametricBuilder),
            _ => Err(unsupported("collection_shape", input)),
        }
    }
}

impl DateTimeBinding {
    /// Canonical configuration tag
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::JodaTime => "joda_time",
            Self::JavaTime => "java_time",
        }
    }
}

impl FromStr for DateTimeBinding {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        match normalize(input).as_str() {
            "jodatime" | "joda" => Ok(Self::JodaTime),
            "javatime" | "java" => Ok(Self::JavaTime),
            _ => Err(unsupported("date_time_binding", input)),
        }
    }
}

impl ExecutionMode {
    /// Canonical configuration tag
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sync => "sync",
            Self::Async => "async",
        }
    }
}

impl FromStr for ExecutionMode {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        match normalize(input).as_str() {
            "sync" | "blocking" => Ok(Self::Sync),
            "async" | "future" => Ok(Self::Async),
            _ => Err(unsupported("execution_mode", input)),
        }
    }
}

impl LineBreak {
    /// Canonical configuration tag
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "lf",
            Self::Crlf => "crlf",
        }
    }

    /// The terminator itself
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::Crlf => "\r\n",
        }
    }
}

impl FromStr for LineBreak {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        match normalize(input).as_str() {
            "lf" | "unix" => Ok(Self::Lf),
            "crlf" | "windows" => Ok(Self::Crlf),
            _ => Err(unsupported("line_break", input)),
        }
    }
}

macro_rules! display_as_tag {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_tag!(SqlStyle, TestStyle, CollectionShape, DateTimeBinding, ExecutionMode, LineBreak);

/// Resolved generator options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Package of generated sources, dotted
    pub package_name: String,
    /// Root of generated model sources
    pub model_source_dir: PathBuf,
    /// Root of generated test sources
    pub test_source_dir: PathBuf,
    /// SQL construction style
    pub sql_style: SqlStyle,
    /// Test skeleton style
    pub test_style: TestStyle,
    /// Result type of multi-row accessors
    pub collection_shape: CollectionShape,
    /// Date/time library binding
    pub date_time_binding: DateTimeBinding,
    /// Blocking or future-returning accessors
    pub execution_mode: ExecutionMode,
    /// Line terminator of generated files
    pub line_break: LineBreak,
    /// Map rows with `autoConstruct` instead of per-field accessors
    pub auto_derive_mapping: bool,
    /// Give every session parameter a default value
    pub default_session_injection: bool,
    /// Always emit a `case class`, even past 22 fields
    pub force_simple_value_type: bool,
    /// Overrides the class name derived from the table name
    pub target_class_name: Option<String>,
    /// Table names the CLI skips (compared case-insensitively)
    pub tables_to_skip: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            package_name: "models".to_string(),
            model_source_dir: PathBuf::from("src/main/scala"),
            test_source_dir: PathBuf::from("src/test/scala"),
            sql_style: SqlStyle::default(),
            test_style: TestStyle::default(),
            collection_shape: CollectionShape::default(),
            date_time_binding: DateTimeBinding::default(),
            execution_mode: ExecutionMode::default(),
            line_break: LineBreak::default(),
            auto_derive_mapping: false,
            default_session_injection: true,
            force_simple_value_type: false,
            target_class_name: None,
            tables_to_skip: Vec::new(),
        }
    }
}

impl GeneratorConfig {
    /// Set the package name
    #[must_use]
    pub fn with_package(mut self, package_name: impl Into<String>) -> Self {
        self.package_name = package_name.into();
        self
    }

    /// Set the SQL construction style
    #[must_use]
    pub const fn with_sql_style(mut self, sql_style: SqlStyle) -> Self {
        self.sql_style = sql_style;
        self
    }

    /// Set the test skeleton style
    #[must_use]
    pub const fn with_test_style(mut self, test_style: TestStyle) -> Self {
        self.test_style = test_style;
        self
    }

    /// Set the multi-row result shape
    #[must_use]
    pub const fn with_collection_shape(mut self, collection_shape: CollectionShape) -> Self {
        self.collection_shape = collection_shape;
        self
    }

    /// Set the date/time binding
    #[must_use]
    pub const fn with_date_time_binding(mut self, binding: DateTimeBinding) -> Self {
        self.date_time_binding = binding;
        self
    }

    /// Set the execution mode
    #[must_use]
    pub const fn with_execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.execution_mode = mode;
        self
    }

    /// Set the line terminator
    #[must_use]
    pub const fn with_line_break(mut self, line_break: LineBreak) -> Self {
        self.line_break = line_break;
        self
    }

    /// Toggle `autoConstruct` row mapping
    #[must_use]
    pub const fn with_auto_derive_mapping(mut self, enabled: bool) -> Self {
        self.auto_derive_mapping = enabled;
        self
    }

    /// Toggle default values on session parameters
    #[must_use]
    pub const fn with_default_session_injection(mut self, enabled: bool) -> Self {
        self.default_session_injection = enabled;
        self
    }

    /// Toggle the `case class` override for wide tables
    #[must_use]
    pub const fn with_force_simple_value_type(mut self, enabled: bool) -> Self {
        self.force_simple_value_type = enabled;
        self
    }

    /// Override the generated class name
    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.target_class_name = Some(class_name.into());
        self
    }

    /// Whether the CLI should skip a table
    #[must_use]
    pub fn skips(&self, table_name: &str) -> bool {
        self.tables_to_skip
            .iter()
            .any(|t| t.eq_ignore_ascii_case(table_name))
    }

    /// Check the names pasted into generated code and output paths
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPackageName`] for empty segments or segments that
    /// are not identifiers, and [`Error::InvalidClassName`] for a class name
    /// override that is not a plain identifier.
    pub fn validate(&self) -> Result<()> {
        let valid_package = !self.package_name.is_empty()
            && self
                .package_name
                .split('.')
                .all(NameHelpers::is_plain_identifier);
        if !valid_package {
            return Err(Error::InvalidPackageName {
                value: self.package_name.clone(),
            });
        }

        if let Some(class_name) = &self.target_class_name {
            if !NameHelpers::is_plain_identifier(class_name) {
                return Err(Error::InvalidClassName {
                    value: class_name.clone(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.package_name, "models");
        assert_eq!(config.sql_style, SqlStyle::QueryDsl);
        assert_eq!(config.test_style, TestStyle::FlatSpec);
        assert_eq!(config.collection_shape, CollectionShape::List);
        assert_eq!(config.execution_mode, ExecutionMode::Sync);
        assert!(config.default_session_injection);
        assert!(!config.force_simple_value_type);
    }

    #[test]
    fn test_parse_tags_with_separators() {
        assert_eq!("query_dsl".parse::<SqlStyle>().unwrap(), SqlStyle::QueryDsl);
        assert_eq!("queryDsl".parse::<SqlStyle>().unwrap(), SqlStyle::QueryDsl);
        assert_eq!("flat-spec".parse::<TestStyle>().unwrap(), TestStyle::FlatSpec);
        assert_eq!("specs2Acceptance".parse::<TestStyle>().unwrap(), TestStyle::AcceptanceSpec);
        assert_eq!("CanBuildFrom".parse::<CollectionShape>().unwrap(), CollectionShape::ParametricBuilder);
        assert_eq!("joda".parse::<DateTimeBinding>().unwrap(), DateTimeBinding::JodaTime);
        assert_eq!("CRLF".parse::<LineBreak>().unwrap(), LineBreak::Crlf);
    }

    #[test]
    fn test_unknown_tag_names_the_field() {
        let err = "minitest".parse::<TestStyle>().unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedOption { field: "test_style", value } if value == "minitest"
        ));
    }

    #[test]
    fn test_tags_round_trip_through_display() {
        for shape in [
            CollectionShape::List,
            CollectionShape::Vector,
            CollectionShape::Array,
            CollectionShape::ParametricBuilder,
        ] {
            assert_eq!(shape.to_string().parse::<CollectionShape>().unwrap(), shape);
        }
    }

    #[test]
    fn test_validate_package_name() {
        assert!(GeneratorConfig::default().with_package("com.example.models").validate().is_ok());
        assert!(GeneratorConfig::default().with_package("com..models").validate().is_err());
        assert!(GeneratorConfig::default().with_package("com.1st").validate().is_err());
        assert!(GeneratorConfig::default().with_package("").validate().is_err());
    }

    #[test]
    fn test_validate_class_name_override() {
        assert!(GeneratorConfig::default().with_class_name("Account").validate().is_ok());
        for bad in ["../../etc/Evil", "Bad Name", "type", ""] {
            let err = GeneratorConfig::default().with_class_name(bad).validate().unwrap_err();
            assert!(matches!(err, Error::InvalidClassName { value } if value == bad));
        }
    }

    #[test]
    fn test_skips_is_case_insensitive() {
        let mut config = GeneratorConfig::default();
        config.tables_to_skip = vec!["schema_version".to_string()];
        assert!(config.skips("SCHEMA_VERSION"));
        assert!(!config.skips("member"));
    }
}
