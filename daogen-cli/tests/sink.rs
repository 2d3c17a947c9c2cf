//! Integration tests for the output sink

use daogen::config::{GeneratorConfig, SqlStyle};
use daogen::schema::{Column, SqlType, Table};
use daogen::GeneratedFile;
use daogen_cli::{OutputSink, WriteMode, WriteOutcome};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn file(content: &str) -> GeneratedFile {
    GeneratedFile::new(
        PathBuf::from("src/main/scala/models/Member.scala"),
        content.to_string(),
        "model and accessors",
    )
}

/// Missing parent directories are created
#[test]
fn test_commit_creates_directories() {
    let temp_dir = TempDir::new().unwrap();
    let sink = OutputSink::new(temp_dir.path(), WriteMode::SkipExisting);

    let outcome = sink.commit(&file("package models\n")).unwrap();

    assert_eq!(outcome, WriteOutcome::Written);
    let written = temp_dir.path().join("src/main/scala/models/Member.scala");
    assert_eq!(fs::read_to_string(written).unwrap(), "package models\n");
}

/// Existing files are reported and left untouched
#[test]
fn test_existing_file_is_kept() {
    let temp_dir = TempDir::new().unwrap();
    let sink = OutputSink::new(temp_dir.path(), WriteMode::SkipExisting);
    sink.commit(&file("first\n")).unwrap();

    let outcome = sink.commit(&file("second\n")).unwrap();

    assert_eq!(outcome, WriteOutcome::AlreadyExists);
    assert_eq!(sink.existing(&file("")).unwrap().as_deref(), Some("first\n"));
}

/// Overwrite mode replaces existing files
#[test]
fn test_overwrite_mode_replaces() {
    let temp_dir = TempDir::new().unwrap();
    OutputSink::new(temp_dir.path(), WriteMode::SkipExisting)
        .commit(&file("first\n"))
        .unwrap();

    let sink = OutputSink::new(temp_dir.path(), WriteMode::Overwrite);
    assert_eq!(sink.commit(&file("second\n")).unwrap(), WriteOutcome::Overwritten);
    assert_eq!(sink.existing(&file("")).unwrap().as_deref(), Some("second\n"));

    let fresh = GeneratedFile::new(PathBuf::from("Other.scala"), String::new(), "model");
    assert_eq!(sink.commit(&fresh).unwrap(), WriteOutcome::Written);
}

/// A missing target reads as `None`
#[test]
fn test_existing_reports_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let sink = OutputSink::new(temp_dir.path(), WriteMode::SkipExisting);
    assert!(sink.existing(&file("")).unwrap().is_none());
}

/// Committing a full artifact lays out model and spec under their roots
#[test]
fn test_commit_artifact_paths() {
    let temp_dir = TempDir::new().unwrap();
    let sink = OutputSink::new(temp_dir.path(), WriteMode::SkipExisting);
    let table = Table::new("member")
        .column(Column::not_null("id", SqlType::BigInt))
        .column(Column::not_null("name", SqlType::VarChar))
        .primary_key(["id"])
        .auto_increment(["id"]);
    let config = GeneratorConfig::default()
        .with_package("com.example")
        .with_sql_style(SqlStyle::Interpolation);

    let artifact = daogen::generate(&table, &config).unwrap();
    for generated in artifact.files() {
        assert_eq!(sink.commit(generated).unwrap(), WriteOutcome::Written);
    }

    let model = temp_dir.path().join("src/main/scala/com/example/Member.scala");
    let spec = temp_dir.path().join("src/test/scala/com/example/MemberSpec.scala");
    assert!(fs::read_to_string(model).unwrap().starts_with("package com.example\n"));
    assert!(fs::read_to_string(spec).unwrap().contains("class MemberSpec"));
}

/// Skipped and completed commits leave only the target behind
#[test]
fn test_commit_leaves_no_staging_files() {
    let temp_dir = TempDir::new().unwrap();
    let sink = OutputSink::new(temp_dir.path(), WriteMode::SkipExisting);
    let content = "package models\n".repeat(4096);

    assert_eq!(sink.commit(&file(&content)).unwrap(), WriteOutcome::Written);
    assert_eq!(sink.commit(&file("second\n")).unwrap(), WriteOutcome::AlreadyExists);
    OutputSink::new(temp_dir.path(), WriteMode::Overwrite)
        .commit(&file(&content))
        .unwrap();

    let dir = temp_dir.path().join("src/main/scala/models");
    let names: Vec<String> = fs::read_dir(&dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["Member.scala".to_string()]);
    assert_eq!(fs::read_to_string(dir.join("Member.scala")).unwrap(), content);
}
