use crate::{result::Result, runner::StatementRunner};

#[cfg(feature = "postgresql")]
use crate::runner_postgresql::PostgresRunner;
#[cfg(feature = "sqlite")]
use crate::runner_sqlite::SqliteRunner;

/// Database runner enum that holds different database backends
pub enum DatabaseRunner {
    /// SQLite connection
    #[cfg(feature = "sqlite")]
    SQLite(SqliteRunner),
    /// PostgreSQL connection
    #[cfg(feature = "postgresql")]
    PostgreSQL(PostgresRunner),
}

/// Whether `url` names a PostgreSQL server rather than a SQLite file
pub fn is_postgres_url(url: &str) -> bool {
    url.starts_with("postgres://") || url.starts_with("postgresql://")
}

impl DatabaseRunner {
    /// Connect to `postgres://`/`postgresql://` URLs with PostgreSQL, anything else as a SQLite path
    pub fn connect(url: &str) -> Result<Self> {
        if is_postgres_url(url) {
            #[cfg(feature = "postgresql")]
            return Ok(DatabaseRunner::PostgreSQL(PostgresRunner::connect(url)?));
            #[cfg(not(feature = "postgresql"))]
            return Err(crate::result::DeployError::config(
                "PostgreSQL support is disabled (enable the `postgresql` feature)",
            ));
        }

        #[cfg(feature = "sqlite")]
        return Ok(DatabaseRunner::SQLite(SqliteRunner::open(url)?));
        #[cfg(not(feature = "sqlite"))]
        return Err(crate::result::DeployError::config(format!(
            "SQLite support is disabled (enable the `sqlite` feature), cannot open {url}"
        )));
    }
}

impl StatementRunner for DatabaseRunner {
    fn execute(&mut self, sql: &str) -> Result<()> {
        match self {
            #[cfg(feature = "sqlite")]
            DatabaseRunner::SQLite(runner) => runner.execute(sql),
            #[cfg(feature = "postgresql")]
            DatabaseRunner::PostgreSQL(runner) => runner.execute(sql),
        }
    }

    fn ensure_catalog(&mut self, catalog: &str) -> Result<()> {
        match self {
            #[cfg(feature = "sqlite")]
            DatabaseRunner::SQLite(runner) => runner.ensure_catalog(catalog),
            #[cfg(feature = "postgresql")]
            DatabaseRunner::PostgreSQL(runner) => runner.ensure_catalog(catalog),
        }
    }

    fn ensure_schema(&mut self, catalog: &str, schema: &str) -> Result<()> {
        match self {
            #[cfg(feature = "sqlite")]
            DatabaseRunner::SQLite(runner) => runner.ensure_schema(catalog, schema),
            #[cfg(feature = "postgresql")]
            DatabaseRunner::PostgreSQL(runner) => runner.ensure_schema(catalog, schema),
        }
    }
}
