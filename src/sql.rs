//! SQL text processing: comment stripping and statement splitting.
//!
//! Both passes are pure functions over an in-memory string. They never fail:
//! malformed input (an unterminated quote, an unclosed `TBLPROPERTIES`
//! clause) is folded into a trailing statement and left for the database to
//! reject.

pub mod comments;
pub mod splitter;

pub use comments::strip_comments;
pub use splitter::{ScanMode, StatementScanner, split_statements};

/// Strip comments, then split into `;`-terminated statements in source order
pub fn split_sql(sql: &str) -> Vec<String> {
    split_statements(&strip_comments(sql))
}
