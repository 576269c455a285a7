//! Requires POSTGRES_CONNECTION_STRING; every test skips without it.

use sqlschemadeploy::{DeployConfig, PostgresRunner, SchemaDeployer, StatementRunner};
use std::path::Path;

fn connection_string() -> Option<String> {
    match std::env::var("POSTGRES_CONNECTION_STRING") {
        Ok(conn_str) => Some(conn_str),
        Err(_) => {
            println!("Skipping PostgreSQL test: POSTGRES_CONNECTION_STRING not set");
            None
        }
    }
}

#[test]
fn test_postgresql_statements_with_literal_semicolons() {
    let Some(conn_str) = connection_string() else {
        return;
    };
    let runner = PostgresRunner::connect(&conn_str).expect("Failed to connect to PostgreSQL");
    let mut deployer = SchemaDeployer::new(runner, DeployConfig::new("postgres"));

    let raw = "CREATE TEMP TABLE deploy_notes (id SERIAL PRIMARY KEY, body TEXT);\n\
               INSERT INTO deploy_notes (body) VALUES ('a;b'), ('c;d'); -- two rows\n\
               INSERT INTO missing_table VALUES (1);";
    let report = deployer.execute_sql(Path::new("notes.sql"), raw).unwrap();
    assert_eq!(report.executed, 2);
    assert_eq!(report.failed.len(), 1);

    let runner = deployer.runner();
    let row = runner
        .block_on(runner.client().query_one("SELECT COUNT(*) FROM deploy_notes", &[]))
        .unwrap();
    let count: i64 = row.get(0);
    assert_eq!(count, 2);
}

#[test]
fn test_postgresql_ensure_schema_is_idempotent() {
    let Some(conn_str) = connection_string() else {
        return;
    };
    let mut runner = PostgresRunner::connect(&conn_str).expect("Failed to connect to PostgreSQL");
    runner.ensure_catalog("postgres").unwrap();
    runner.ensure_schema("postgres", "sqlschemadeploy_test").unwrap();
    runner.ensure_schema("postgres", "sqlschemadeploy_test").unwrap();
    runner
        .execute("DROP SCHEMA IF EXISTS sqlschemadeploy_test CASCADE;")
        .unwrap();
}
