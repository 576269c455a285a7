use sqlschemadeploy::DeployError;
use sqlschemadeploy::files::{DEFAULT_PRIORITY_ORDER, discover_sql_files, file_priority};
use std::fs;

fn file_names(paths: &[std::path::PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn test_files_are_ordered_by_layer() {
    let dir = tempfile::tempdir().unwrap();
    for name in [
        "gold_sales.sql",
        "misc.sql",
        "silver_clean.sql",
        "fact_orders.sql",
        "dim_customer.sql",
        "README.md",
    ] {
        fs::write(dir.path().join(name), "SELECT 1;").unwrap();
    }
    fs::create_dir(dir.path().join("nested.sql")).unwrap();

    let files = discover_sql_files(dir.path(), &DEFAULT_PRIORITY_ORDER).unwrap();
    assert_eq!(
        file_names(&files),
        vec![
            "dim_customer.sql",
            "fact_orders.sql",
            "silver_clean.sql",
            "gold_sales.sql",
            "misc.sql"
        ]
    );
}

#[test]
fn test_ties_are_broken_by_name() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["dim_b.sql", "DIM_a.sql", "zz.sql", "aa.sql"] {
        fs::write(dir.path().join(name), "").unwrap();
    }
    let files = discover_sql_files(dir.path(), &DEFAULT_PRIORITY_ORDER).unwrap();
    assert_eq!(
        file_names(&files),
        vec!["DIM_a.sql", "dim_b.sql", "aa.sql", "zz.sql"]
    );
}

#[test]
fn test_extension_match_is_case_sensitive() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("dim_x.SQL"), "").unwrap();
    let files = discover_sql_files(dir.path(), &DEFAULT_PRIORITY_ORDER).unwrap();
    assert!(files.is_empty());
}

#[test]
fn test_file_priority() {
    assert_eq!(file_priority("dim_customer.sql", &DEFAULT_PRIORITY_ORDER), 0);
    assert_eq!(file_priority("Fact_Orders.sql", &DEFAULT_PRIORITY_ORDER), 1);
    // First pattern in priority order wins
    assert_eq!(file_priority("gold_dim_x.sql", &DEFAULT_PRIORITY_ORDER), 0);
    assert_eq!(file_priority("notes.sql", &DEFAULT_PRIORITY_ORDER), 4);

    let custom = vec!["raw_".to_string()];
    assert_eq!(file_priority("raw_events.sql", &custom), 0);
    assert_eq!(file_priority("dim_x.sql", &custom), 1);
}

#[test]
fn test_missing_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = discover_sql_files(dir.path().join("absent"), &DEFAULT_PRIORITY_ORDER);
    assert!(matches!(result, Err(DeployError::Io(_))));
}
