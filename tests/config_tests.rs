use sqlschemadeploy::{DeployConfig, DeployError};
use std::path::PathBuf;

#[test]
fn test_minimal_config_uses_defaults() {
    let config = DeployConfig::from_json(serde_json::json!({"catalog": "dev"})).unwrap();
    assert_eq!(config, DeployConfig::new("dev"));
    assert_eq!(config.schema_dir, PathBuf::from("schema"));
    assert_eq!(config.priority_order, vec!["dim_", "fact_", "silver_", "gold_"]);
    assert_eq!(config.skip_schemas, vec!["information_schema", "system"]);
}

#[test]
fn test_full_config() {
    let config = DeployConfig::from_json(serde_json::json!({
        "catalog": "analytics",
        "schema_dir": "sql/tables",
        "priority_order": ["raw_", "curated_"],
        "skip_schemas": ["audit"]
    }))
    .unwrap();
    assert_eq!(config.catalog, "analytics");
    assert_eq!(config.schema_dir, PathBuf::from("sql/tables"));
    assert_eq!(config.priority_order, vec!["raw_", "curated_"]);
    assert!(config.skips_schema("AUDIT"));
    assert!(!config.skips_schema("system"));
}

#[test]
fn test_invalid_catalogs_are_rejected() {
    let empty = DeployConfig::from_json(serde_json::json!({"catalog": "  "}));
    assert!(matches!(empty, Err(DeployError::Config(_))));

    let backtick = DeployConfig::from_json(serde_json::json!({"catalog": "a`b"}));
    assert!(matches!(backtick, Err(DeployError::Config(_))));

    let missing = DeployConfig::from_json(serde_json::json!({"schema_dir": "x"}));
    assert!(matches!(missing, Err(DeployError::Json(_))));
}

#[test]
fn test_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deploy.json");
    std::fs::write(&path, r#"{"catalog": "dev", "schema_dir": "schema"}"#).unwrap();
    let config = DeployConfig::from_file(&path).unwrap();
    assert_eq!(config.catalog, "dev");

    let missing = DeployConfig::from_file(dir.path().join("none.json"));
    assert!(matches!(missing, Err(DeployError::Io(_))));
}

#[test]
fn test_system_schemas_are_skipped_case_insensitively() {
    let config = DeployConfig::new("dev").with_schema_dir("elsewhere");
    assert!(config.skips_schema("INFORMATION_SCHEMA"));
    assert!(config.skips_schema("System"));
    assert!(!config.skips_schema("gold"));
    assert_eq!(config.schema_dir, PathBuf::from("elsewhere"));
}
