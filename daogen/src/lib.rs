//! daogen: ScalikeJDBC model and DAO generator
//!
//! Turns a table description into Scala source text: a value type with CRUD
//! accessors on its `SQLSyntaxSupport` companion, and a matching test spec.
//! Generation is a pure function of the [`schema::Table`] and the
//! [`config::GeneratorConfig`]; writing files is left to the caller.
//!
//! # Template axes
//!
//! - SQL style: `sql"""..."""` interpolation or the `withSQL` query DSL
//! - Test style: ScalaTest `FlatSpec`, specs2 unit, specs2 acceptance, or none
//! - Execution: blocking `DBSession` or `AsyncDBSession` with `Future`s
//! - Collection shape: `List`, `Vector`, `Array` or a `CanBuildFrom` parameter
//! - Date/time binding: Joda-Time or `java.time`
//!
//! # Quick Start
//!
//! ```
//! use daogen::config::{GeneratorConfig, SqlStyle};
//! use daogen::schema::{Column, SqlType, Table};
//!
//! let table = Table::new("member")
//!     .column(Column::not_null("id", SqlType::BigInt))
//!     .column(Column::not_null("name", SqlType::VarChar))
//!     .column(Column::nullable("birthday", SqlType::Date))
//!     .primary_key(["id"])
//!     .auto_increment(["id"]);
//!
//! let config = GeneratorConfig::default().with_sql_style(SqlStyle::Interpolation);
//! let artifact = daogen::generate(&table, &config)?;
//!
//! assert!(artifact.model.content.contains("case class Member("));
//! assert!(artifact.test_spec.is_some());
//! # Ok::<(), daogen::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]

pub mod artifact;
pub mod config;
pub mod error;
pub mod fragment;
pub mod generator;
pub mod naming;
pub mod schema;
pub mod select;
pub mod testspec;

pub use artifact::{GeneratedArtifact, GeneratedFile};
pub use config::{GeneratorConfig, GeneratorSettings};
pub use error::{Error, Result};
pub use generator::CodeGenerator;
pub use schema::{Column, SqlType, Table};

/// Generate the model source for `table`
///
/// # Errors
///
/// Returns an error if the table is malformed or collides with generated names.
pub fn generate_model(table: &Table, config: &GeneratorConfig) -> Result<String> {
    Ok(CodeGenerator::new(table, config)?.generate_model())
}

/// Generate the test spec source for `table`, `None` when tests are off
///
/// # Errors
///
/// Returns an error if the table is malformed or the skeleton fails to render.
pub fn generate_test_spec(table: &Table, config: &GeneratorConfig) -> Result<Option<String>> {
    CodeGenerator::new(table, config)?.generate_test_spec()
}

/// Generate both files for `table`
///
/// # Errors
///
/// Returns an error if the table is malformed or the skeleton fails to render.
pub fn generate(table: &Table, config: &GeneratorConfig) -> Result<GeneratedArtifact> {
    CodeGenerator::new(table, config)?.generate()
}
