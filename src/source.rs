//! Preparing raw SQL file contents for a target catalog.

use crate::result::Result;
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};
use std::collections::BTreeSet;

/// Placeholder replaced by the target catalog name
pub const CATALOG_PLACEHOLDER: &str = "${catalog}";

// Any backtick-quoted identifier used as a qualifier, e.g. `dbx-prod-catalog`.
static CATALOG_REF_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"`[^`]+`\.").unwrap());

/// Substitute the catalog placeholder and retarget backtick-quoted qualifiers.
///
/// Every `` `name`. `` becomes `` `catalog`. ``, so files written against a
/// hard-coded catalog deploy into `catalog` instead.
pub fn prepare_source(raw: &str, catalog: &str) -> String {
    let substituted = raw.replace(CATALOG_PLACEHOLDER, catalog);
    let qualifier = format!("`{catalog}`.");
    CATALOG_REF_REGEX
        .replace_all(&substituted, NoExpand(&qualifier))
        .into_owned()
}

/// Collect schema names referenced as `` `catalog`.schema `` or `` `catalog`.`schema` ``
pub fn extract_schemas(sql: &str, catalog: &str) -> Result<BTreeSet<String>> {
    let pattern = format!(r"(?i)`{}`\.`?([a-zA-Z0-9_]+)`?", regex::escape(catalog));
    let schema_regex = Regex::new(&pattern)?;
    Ok(schema_regex
        .captures_iter(sql)
        .filter_map(|cap| cap.get(1))
        .map(|schema| schema.as_str().to_string())
        .collect())
}
