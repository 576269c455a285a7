//! Character-level statement splitter.
//!
//! The scanner walks the text left to right and cuts a statement at every `;`
//! that is neither inside a quoted run nor inside a `TBLPROPERTIES (...)`
//! clause. A `TBLPROPERTIES` clause is opaque up to its first `)`, which also
//! ends the statement. Nested parentheses in that clause are not tracked and
//! a quote delimiter cannot be escaped inside its own literal.

const TBLPROPERTIES: &[u8] = b"TBLPROPERTIES";

/// Where the scanner currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    /// Outside any quote or properties clause
    #[default]
    Default,
    /// Inside a run opened by `'`, `"` or `` ` ``; only the same character closes it
    Quoted(char),
    /// Inside a `TBLPROPERTIES` clause, closed by the next `)`.
    ///
    /// `resume` holds the quote that was open when the keyword was seen, if any;
    /// scanning returns to that quote once the clause closes.
    TblProperties { resume: Option<char> },
}

/// Incremental statement scanner, fed one character at a time
#[derive(Debug, Default)]
pub struct StatementScanner {
    mode: ScanMode,
    current: String,
    statements: Vec<String>,
}

impl StatementScanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ScanMode {
        self.mode
    }

    /// Text accumulated for the statement in progress
    pub fn pending(&self) -> &str {
        &self.current
    }

    /// Statements completed so far, trimmed and without terminators
    pub fn completed(&self) -> &[String] {
        &self.statements
    }

    /// Consume `ch`. `rest` is the input starting at `ch` and is only used to
    /// look ahead for the `TBLPROPERTIES` keyword.
    pub fn feed(&mut self, ch: char, rest: &str) {
        // Keyword detection ignores the quote state
        if starts_with_tblproperties(rest) {
            self.mode = match self.mode {
                ScanMode::Default => ScanMode::TblProperties { resume: None },
                ScanMode::Quoted(quote) => ScanMode::TblProperties {
                    resume: Some(quote),
                },
                region => region,
            };
        }

        match self.mode {
            ScanMode::Default => match ch {
                '\'' | '"' | '`' => {
                    self.mode = ScanMode::Quoted(ch);
                    self.current.push(ch);
                }
                ';' => self.finish_statement(),
                _ => self.current.push(ch),
            },
            ScanMode::Quoted(quote) => {
                if ch == quote {
                    self.mode = ScanMode::Default;
                }
                self.current.push(ch);
            }
            ScanMode::TblProperties { resume } => {
                self.current.push(ch);
                if ch == ')' {
                    self.mode = resume.map_or(ScanMode::Default, ScanMode::Quoted);
                    self.finish_statement();
                }
            }
        }
    }

    /// Flush trailing content and return every statement ending in exactly one `;`
    pub fn finish(mut self) -> Vec<String> {
        self.finish_statement();
        self.statements
            .into_iter()
            .filter(|stmt| !stmt.trim().is_empty())
            .map(|stmt| {
                if stmt.ends_with(';') {
                    stmt
                } else {
                    stmt + ";"
                }
            })
            .collect()
    }

    fn finish_statement(&mut self) {
        let stmt = self.current.trim();
        if !stmt.is_empty() {
            self.statements.push(stmt.to_string());
        }
        self.current.clear();
    }
}

fn starts_with_tblproperties(rest: &str) -> bool {
    rest.as_bytes()
        .get(..TBLPROPERTIES.len())
        .is_some_and(|word| word.eq_ignore_ascii_case(TBLPROPERTIES))
}

/// Split comment-free SQL into statements, respecting quotes and `TBLPROPERTIES`
pub fn split_statements(sql: &str) -> Vec<String> {
    let mut scanner = StatementScanner::new();
    for (idx, ch) in sql.char_indices() {
        scanner.feed(ch, &sql[idx..]);
    }
    scanner.finish()
}
