use crate::result::Result;

/// Trait for executing split SQL statements against different database backends
pub trait StatementRunner {
    /// Execute one `;`-terminated statement
    fn execute(&mut self, sql: &str) -> Result<()>;

    /// Make sure `catalog` exists before any schema in it is created
    fn ensure_catalog(&mut self, catalog: &str) -> Result<()>;

    /// Make sure `catalog`.`schema` exists before statements reference it
    fn ensure_schema(&mut self, catalog: &str, schema: &str) -> Result<()>;
}
