pub mod config;
pub mod connection;
pub mod deployer;
pub mod files;
pub mod logging;
pub mod result;
pub mod runner;
#[cfg(feature = "postgresql")]
pub mod runner_postgresql;
#[cfg(feature = "sqlite")]
pub mod runner_sqlite;
pub mod source;
pub mod sql;
pub mod str_utils;

// Re-export types for convenience
pub use config::DeployConfig;
pub use connection::DatabaseRunner;
pub use deployer::{DeployReport, FileReport, SchemaDeployer, StatementFailure};
pub use result::{DeployError, Result};
pub use runner::StatementRunner;
#[cfg(feature = "postgresql")]
pub use runner_postgresql::PostgresRunner;
#[cfg(feature = "sqlite")]
pub use runner_sqlite::SqliteRunner;
pub use sql::{split_sql, split_statements, strip_comments};

// Re-export third-party types used in the public API to provide fallback for dependency conflicts
#[cfg(feature = "sqlite")]
pub use rusqlite::Connection as SqliteConnection;
