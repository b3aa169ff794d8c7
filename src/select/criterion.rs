//! Selection criteria parsed from the `line` query parameter.

use std::fmt;

/// Rule used to pick one line out of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criterion {
    /// 1-indexed line number. Values below 1 never match.
    LineNumber(i64),
    /// Case-insensitive substring search; a random match is returned.
    Search(String),
    /// Uniformly random non-blank line.
    Random,
}

impl Criterion {
    /// Interpret the raw `line` parameter.
    ///
    /// Absent or blank selects a random line, an integer selects that line,
    /// and any other text becomes a search query.
    pub fn from_param(line: Option<&str>) -> Self {
        match line.map(str::trim) {
            None | Some("") => Criterion::Random,
            Some(value) => match value.parse::<i64>() {
                Ok(number) => Criterion::LineNumber(number),
                Err(_) => Criterion::Search(value.to_string()),
            },
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criterion::LineNumber(n) => write!(f, "line {}", n),
            Criterion::Search(query) => write!(f, "search \"{}\"", query),
            Criterion::Random => write!(f, "random"),
        }
    }
}
