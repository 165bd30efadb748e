//! Error types for loading and parsing source files
//!
//! Only file access can fail. A line that matches nothing is either noise
//! between entries or a [`Diagnostic`](super::diagnostics::Diagnostic), never an
//! error.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The input file does not exist
    #[error("input file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The input file exists but could not be read as text
    #[error("cannot read input file {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ParseError {
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => ParseError::NotFound { path },
            _ => ParseError::Unreadable { path, source },
        }
    }

    pub fn path(&self) -> &std::path::Path {
        match self {
            ParseError::NotFound { path } | ParseError::Unreadable { path, .. } => path,
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_distinct() {
        let err = ParseError::from_io(
            "missing.txt",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, ParseError::NotFound { .. }));
        assert_eq!(err.to_string(), "input file not found: missing.txt");
    }

    #[test]
    fn test_other_io_errors_are_unreadable() {
        let err = ParseError::from_io(
            "locked.txt",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, ParseError::Unreadable { .. }));
        assert_eq!(err.path(), std::path::Path::new("locked.txt"));
    }
}
