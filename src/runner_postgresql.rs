use crate::{result::Result, runner::StatementRunner, str_utils::quote_identifier};
use tokio::runtime::{Builder, Runtime};
use tokio_postgres::{Client, NoTls};

/// Runs statements on PostgreSQL, driving the async client on a private runtime.
///
/// The connected database plays the role of the catalog, so only schemas are created.
pub struct PostgresRunner {
    runtime: Runtime,
    client: Client,
}

impl PostgresRunner {
    pub fn connect(connection_string: &str) -> Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        let (client, connection) =
            runtime.block_on(tokio_postgres::connect(connection_string, NoTls))?;

        // Polled whenever the runtime is driven by block_on
        runtime.spawn(async move {
            if let Err(e) = connection.await {
                tracing::error!("PostgreSQL connection error: {e}");
            }
        });

        tracing::info!("Successfully connected to PostgreSQL");
        Ok(Self { runtime, client })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Run an async client operation to completion
    pub fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }
}

impl StatementRunner for PostgresRunner {
    fn execute(&mut self, sql: &str) -> Result<()> {
        self.runtime.block_on(self.client.batch_execute(sql))?;
        Ok(())
    }

    fn ensure_catalog(&mut self, catalog: &str) -> Result<()> {
        tracing::debug!("Catalog {catalog} maps to the connected PostgreSQL database");
        Ok(())
    }

    fn ensure_schema(&mut self, catalog: &str, schema: &str) -> Result<()> {
        let create_schema_sql = format!("CREATE SCHEMA IF NOT EXISTS {}", quote_identifier(schema));
        self.runtime
            .block_on(self.client.batch_execute(&create_schema_sql))?;
        tracing::info!("Ensured schema exists: {catalog}.{schema}");
        Ok(())
    }
}
