//! Integration tests for schema file loading

use daogen::schema::SqlType;
use daogen::GeneratorConfig;
use daogen_cli::SchemaFile;
use std::fs;
use tempfile::TempDir;

const TOML_SCHEMA: &str = r#"
[[tables]]
name = "member"
primary_key = ["id"]
auto_increment = ["id"]

[[tables.columns]]
name = "id"
type = "BIGINT"

[[tables.columns]]
name = "name"
type = "VARCHAR"

[[tables.columns]]
name = "birthday"
type = "DATE"
nullable = true

[[tables]]
name = "member_group"
schema = "public"

[[tables.columns]]
name = "id"
type = "INTEGER"
"#;

const JSON_SCHEMA: &str = r#"{
  "tables": [
    {
      "name": "member",
      "primary_key": ["id"],
      "columns": [
        { "name": "id", "type": "BIGINT" },
        { "name": "name", "type": "VARCHAR", "nullable": true }
      ]
    }
  ]
}"#;

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

/// TOML schemas deserialise straight into tables
#[test]
fn test_load_toml_schema() {
    let temp_dir = TempDir::new().unwrap();
    let schema = SchemaFile::load(&write(&temp_dir, "schema.toml", TOML_SCHEMA)).unwrap();

    assert_eq!(schema.tables.len(), 2);
    let member = &schema.tables[0];
    assert_eq!(member.name, "member");
    assert_eq!(member.primary_key, vec!["id"]);
    assert_eq!(member.auto_increment, vec!["id"]);
    assert_eq!(member.columns[2].sql_type, SqlType::Date);
    assert!(member.columns[2].nullable);
    assert!(!member.columns[0].nullable);
    assert_eq!(schema.tables[1].schema.as_deref(), Some("public"));
    assert!(schema.tables[1].primary_key.is_empty());
}

/// A `.json` extension switches the parser
#[test]
fn test_load_json_schema() {
    let temp_dir = TempDir::new().unwrap();
    let schema = SchemaFile::load(&write(&temp_dir, "schema.json", JSON_SCHEMA)).unwrap();

    assert_eq!(schema.tables.len(), 1);
    assert_eq!(schema.tables[0].columns[1].sql_type, SqlType::VarChar);
    assert!(schema.tables[0].columns[1].nullable);
}

/// Unknown SQL types fail to parse
#[test]
fn test_unknown_type_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = write(
        &temp_dir,
        "schema.toml",
        "[[tables]]\nname = \"t\"\n[[tables.columns]]\nname = \"a\"\ntype = \"WIDGET\"\n",
    );
    assert!(SchemaFile::load(&path).is_err());
}

/// Missing files report the path
#[test]
fn test_missing_file_names_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.toml");
    let err = SchemaFile::load(&path).unwrap_err();
    assert!(format!("{err:#}").contains("absent.toml"));
}

/// Selection honours requested names and skipped tables
#[test]
fn test_select_tables() {
    let temp_dir = TempDir::new().unwrap();
    let schema = SchemaFile::load(&write(&temp_dir, "schema.toml", TOML_SCHEMA)).unwrap();
    let config = GeneratorConfig::default();

    let all = schema.select(&[], &config).unwrap();
    assert_eq!(all.len(), 2);

    let one = schema.select(&["MEMBER_GROUP".to_string()], &config).unwrap();
    assert_eq!(one.len(), 1);
    assert_eq!(one[0].name, "member_group");

    let mut skipping = GeneratorConfig::default();
    skipping.tables_to_skip = vec!["member".to_string()];
    let rest = schema.select(&[], &skipping).unwrap();
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0].name, "member_group");

    assert!(schema.select(&["nope".to_string()], &config).is_err());
}
