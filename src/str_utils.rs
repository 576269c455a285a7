/// Utility functions for string processing around statement execution
use std::borrow::Cow;

/// Longest statement prefix written to the log before eliding
pub const LOG_PREVIEW_CHARS: usize = 100;

/// Shorten a statement for logging, cutting on a character boundary
pub fn statement_preview(statement: &str) -> Cow<'_, str> {
    match statement.char_indices().nth(LOG_PREVIEW_CHARS) {
        Some((cut, _)) => Cow::Owned(format!("{}...", &statement[..cut])),
        None => Cow::Borrowed(statement),
    }
}

/// Quote an identifier with double quotes, doubling any embedded quote
pub fn quote_identifier(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}
