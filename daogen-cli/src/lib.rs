//! daogen CLI library
//!
//! The I/O shell around the `daogen` core: reading schema files, initialising
//! logging and committing generated files to disk.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::multiple_crate_versions)]

pub mod commands;
pub mod observability;
pub mod schema_file;
pub mod sink;

pub use schema_file::SchemaFile;
pub use sink::{OutputSink, WriteMode, WriteOutcome};
