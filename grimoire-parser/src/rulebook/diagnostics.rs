//! Diagnostics for lines the parser had to skip

use std::fmt;

/// A non-fatal problem found while parsing. The offending line was skipped and
/// the parser state left unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line number within the source
    pub line_number: usize,
    pub line: String,
    pub message: String,
}

impl Diagnostic {
    pub fn new(line_number: usize, line: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            line_number,
            line: line.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}: {:?}", self.line_number, self.message, self.line)
    }
}
