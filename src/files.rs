use crate::result::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// File name patterns in deployment order: dimensions, facts, silver, gold
pub const DEFAULT_PRIORITY_ORDER: [&str; 4] = ["dim_", "fact_", "silver_", "gold_"];

/// Index of the first pattern contained in `file_name` (case-insensitive),
/// or `priority.len()` when none matches
pub fn file_priority<S: AsRef<str>>(file_name: &str, priority: &[S]) -> usize {
    let name = file_name.to_lowercase();
    priority
        .iter()
        .position(|pattern| name.contains(&pattern.as_ref().to_lowercase()))
        .unwrap_or(priority.len())
}

/// List the `.sql` files directly inside `dir`, sorted by priority then by name
pub fn discover_sql_files<S: AsRef<str>>(
    dir: impl AsRef<Path>,
    priority: &[S],
) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir.as_ref())? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.ends_with(".sql") {
            files.push((file_priority(name, priority), name.to_string(), path));
        }
    }

    files.sort_by(|a, b| (a.0, &a.1).cmp(&(b.0, &b.1)));
    Ok(files.into_iter().map(|(_, _, path)| path).collect())
}
