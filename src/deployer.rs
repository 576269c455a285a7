//! Drives a deployment: read each SQL file, retarget it to the configured
//! catalog, create the schemas it references, then execute its statements
//! one at a time.

use crate::{
    config::DeployConfig,
    files::discover_sql_files,
    result::Result,
    runner::StatementRunner,
    source::{extract_schemas, prepare_source},
    sql::split_sql,
    str_utils::statement_preview,
};
use std::fs;
use std::path::{Path, PathBuf};

/// A statement the database rejected
#[derive(Debug, Clone, PartialEq)]
pub struct StatementFailure {
    pub statement: String,
    pub error: String,
}

/// Outcome of executing one SQL file
#[derive(Debug, Clone, PartialEq)]
pub struct FileReport {
    pub path: PathBuf,
    pub executed: usize,
    pub failed: Vec<StatementFailure>,
}

impl FileReport {
    pub fn statement_count(&self) -> usize {
        self.executed + self.failed.len()
    }
}

/// Outcome of a whole directory deployment, files in execution order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeployReport {
    pub files: Vec<FileReport>,
}

impl DeployReport {
    pub fn total_executed(&self) -> usize {
        self.files.iter().map(|f| f.executed).sum()
    }

    pub fn total_failed(&self) -> usize {
        self.files.iter().map(|f| f.failed.len()).sum()
    }
}

pub struct SchemaDeployer<R> {
    runner: R,
    config: DeployConfig,
}

impl<R: StatementRunner> SchemaDeployer<R> {
    pub fn new(runner: R, config: DeployConfig) -> Self {
        Self { runner, config }
    }

    pub fn config(&self) -> &DeployConfig {
        &self.config
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn into_runner(self) -> R {
        self.runner
    }

    /// Create the catalog and every non-system schema that `sql` qualifies with it
    pub fn ensure_schemas(&mut self, sql: &str) -> Result<()> {
        let catalog = &self.config.catalog;
        let schemas: Vec<String> = extract_schemas(sql, catalog)?
            .into_iter()
            .filter(|schema| !self.config.skips_schema(schema))
            .collect();
        if schemas.is_empty() {
            return Ok(());
        }

        self.runner.ensure_catalog(catalog)?;
        for schema in &schemas {
            self.runner.ensure_schema(catalog, schema)?;
        }
        Ok(())
    }

    /// Deploy SQL text that was read from `path`.
    ///
    /// Namespace errors abort; a failing statement is logged and skipped.
    pub fn execute_sql(&mut self, path: &Path, raw: &str) -> Result<FileReport> {
        let sql = prepare_source(raw, &self.config.catalog);
        self.ensure_schemas(&sql)?;

        let mut report = FileReport {
            path: path.to_path_buf(),
            executed: 0,
            failed: Vec::new(),
        };
        for statement in split_sql(&sql) {
            tracing::info!("Executing: {}", statement_preview(&statement));
            match self.runner.execute(&statement) {
                Ok(()) => {
                    tracing::info!("Statement executed successfully");
                    report.executed += 1;
                }
                Err(e) => {
                    // Keep going: later statements may not depend on this one
                    tracing::error!("Error executing statement: {e}");
                    report.failed.push(StatementFailure {
                        statement,
                        error: e.to_string(),
                    });
                }
            }
        }
        Ok(report)
    }

    pub fn execute_sql_file(&mut self, path: impl AsRef<Path>) -> Result<FileReport> {
        let path = path.as_ref();
        let result = fs::read_to_string(path)
            .map_err(Into::into)
            .and_then(|raw| self.execute_sql(path, &raw));
        if let Err(e) = &result {
            tracing::error!("Error processing file {}: {e}", path.display());
        }
        result
    }

    /// Execute every SQL file of the schema directory in dependency order
    pub fn deploy_dir(&mut self) -> Result<DeployReport> {
        let files = discover_sql_files(&self.config.schema_dir, &self.config.priority_order)?;
        if files.is_empty() {
            tracing::warn!(
                "No SQL files found in {}",
                self.config.schema_dir.display()
            );
            return Ok(DeployReport::default());
        }

        tracing::info!("Found {} SQL files to execute", files.len());
        let mut report = DeployReport::default();
        for path in files {
            tracing::info!("Processing {}...", path.display());
            report.files.push(self.execute_sql_file(&path)?);
        }
        Ok(report)
    }
}
