//! Regex based comment removal.
//!
//! This is a best-effort heuristic, not a tokenizer: it does not know about
//! string literals, so a `--` inside a quoted value is stripped like any
//! other line comment. Callers only depend on [`strip_comments`], so the
//! regexes can be swapped for a real lexer later.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// Regexes compiled once as lazy statics
static LINE_COMMENT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)--.*$").unwrap());
static BLOCK_COMMENT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

/// Block comments containing any of these (case-insensitive) are kept verbatim
pub const PROTECTED_MARKERS: [&str; 3] = ["TBLPROPERTIES", "CREATE ", "SCHEMA "];

/// Check whether a `/* ... */` block must survive comment stripping
pub fn is_protected_comment(comment: &str) -> bool {
    let upper = comment.to_uppercase();
    PROTECTED_MARKERS.iter().any(|marker| upper.contains(marker))
}

/// Remove `--` comments and unprotected `/* */` comments, then normalize lines
pub fn strip_comments(sql: &str) -> String {
    let without_line_comments = LINE_COMMENT_REGEX.replace_all(sql, "");
    let without_block_comments =
        BLOCK_COMMENT_REGEX.replace_all(&without_line_comments, |caps: &Captures| {
            let comment = &caps[0];
            if is_protected_comment(comment) {
                comment.to_string()
            } else {
                String::new()
            }
        });
    normalize_lines(&without_block_comments)
}

/// Trim every line, drop blank ones and join the rest with `\n`
pub fn normalize_lines(sql: &str) -> String {
    sql.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
