use crate::{result::Result, runner::StatementRunner};
use rusqlite::Connection;
use std::path::Path;

/// Runs statements on a SQLite connection.
///
/// SQLite has neither catalogs nor schemas, so the namespace checks are no-ops.
pub struct SqliteRunner {
    conn: Connection,
}

impl SqliteRunner {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(Connection::open(path)?))
    }

    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::new(Connection::open_in_memory()?))
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl StatementRunner for SqliteRunner {
    fn execute(&mut self, sql: &str) -> Result<()> {
        self.conn.execute_batch(sql)?;
        Ok(())
    }

    fn ensure_catalog(&mut self, catalog: &str) -> Result<()> {
        tracing::debug!("SQLite has no catalogs, skipping catalog {catalog}");
        Ok(())
    }

    fn ensure_schema(&mut self, catalog: &str, schema: &str) -> Result<()> {
        tracing::debug!("SQLite has no schemas, skipping schema {catalog}.{schema}");
        Ok(())
    }
}
