use crate::files::DEFAULT_PRIORITY_ORDER;
use crate::result::{DeployError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Schemas that exist in every catalog and are never created
pub const SYSTEM_SCHEMAS: [&str; 2] = ["information_schema", "system"];

/// Settings for one deployment run
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeployConfig {
    /// Target catalog; replaces `${catalog}` and every backtick-quoted qualifier
    pub catalog: String,
    /// Directory holding the `.sql` files
    #[serde(default = "default_schema_dir")]
    pub schema_dir: PathBuf,
    /// File name patterns deciding execution order
    #[serde(default = "default_priority_order")]
    pub priority_order: Vec<String>,
    /// Schema names never passed to `ensure_schema` (case-insensitive)
    #[serde(default = "default_skip_schemas")]
    pub skip_schemas: Vec<String>,
}

fn default_schema_dir() -> PathBuf {
    PathBuf::from("schema")
}

fn default_priority_order() -> Vec<String> {
    DEFAULT_PRIORITY_ORDER.iter().map(|p| p.to_string()).collect()
}

fn default_skip_schemas() -> Vec<String> {
    SYSTEM_SCHEMAS.iter().map(|s| s.to_string()).collect()
}

impl DeployConfig {
    pub fn new(catalog: impl Into<String>) -> Self {
        Self {
            catalog: catalog.into(),
            schema_dir: default_schema_dir(),
            priority_order: default_priority_order(),
            skip_schemas: default_skip_schemas(),
        }
    }

    pub fn with_schema_dir(mut self, schema_dir: impl Into<PathBuf>) -> Self {
        self.schema_dir = schema_dir.into();
        self
    }

    /// Load a configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let json: serde_json::Value = serde_json::from_str(&content)?;
        Self::from_json(json)
    }

    /// Load a configuration from a serde_json::Value object
    pub fn from_json(json: serde_json::Value) -> Result<Self> {
        let config: DeployConfig = serde_json::from_value(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.catalog.trim().is_empty() {
            return Err(DeployError::config("catalog must not be empty"));
        }
        if self.catalog.contains('`') {
            return Err(DeployError::config(format!(
                "catalog '{}' must not contain backticks",
                self.catalog
            )));
        }
        Ok(())
    }

    pub fn skips_schema(&self, schema: &str) -> bool {
        self.skip_schemas
            .iter()
            .any(|skip| skip.eq_ignore_ascii_case(schema))
    }
}
