//! Integration tests for multi-table generation

use daogen::GeneratorConfig;
use daogen_cli::commands::generate_all;
use std::fs;
use tempfile::TempDir;

const SCHEMA: &str = r#"
[[tables]]
name = "member"
primary_key = ["id"]

[[tables.columns]]
name = "id"
type = "BIGINT"

[[tables]]
name = "member_group"
primary_key = ["id"]

[[tables.columns]]
name = "id"
type = "INTEGER"
"#;

fn schema(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("schema.toml");
    fs::write(&path, SCHEMA).unwrap();
    path
}

/// Each table gets its own class and paths
#[test]
fn test_generate_all_tables() {
    let temp_dir = TempDir::new().unwrap();
    let artifacts = generate_all(&schema(&temp_dir), &[], &GeneratorConfig::default()).unwrap();
    assert_eq!(artifacts.len(), 2);
    assert_ne!(artifacts[0].model.path, artifacts[1].model.path);
}

/// One class name override cannot name several tables
#[test]
fn test_class_name_override_with_many_tables_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config = GeneratorConfig::default().with_class_name("Account");
    let err = generate_all(&schema(&temp_dir), &[], &config).unwrap_err();
    assert!(err.to_string().contains("target_class_name 'Account'"));
}

/// With a single table selected the override applies
#[test]
fn test_class_name_override_with_one_table() {
    let temp_dir = TempDir::new().unwrap();
    let config = GeneratorConfig::default().with_class_name("Account");
    let artifacts = generate_all(&schema(&temp_dir), &["member".to_string()], &config).unwrap();
    assert_eq!(artifacts.len(), 1);
    assert_eq!(artifacts[0].class_name, "Account");
    assert!(artifacts[0].model.path.ends_with("Account.scala"));
}
