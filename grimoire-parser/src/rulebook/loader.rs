//! Source loading and the file-level entry points
//!
//! ```rust
//! use grimoire_parser::rulebook::loader::{parse_all, parse_any, parse_one, parse_typed};
//! use grimoire_parser::rulebook::model::DocType;
//!
//! let spells = parse_one("06-spells.txt", DocType::Spells)?;
//! let spells_and_cantrips = parse_typed("06-spells.txt", DocType::Spells)?;
//! let anything = parse_any("07-ephemera.txt")?;
//! let corpus = parse_all(&["05a-objects.txt", "05b-objects.txt"])?;
//! ```

use super::error::{ParseError, ParseResult};
use super::merge::{ConflictPolicy, Merge};
use super::model::{Corpus, DocType, Document};
use super::parsing::EntryParser;
use std::fs;
use std::path::Path;

/// Read a source file as text. Invalid UTF-8 sequences are replaced rather
/// than rejected.
pub fn read_source(path: impl AsRef<Path>) -> ParseResult<String> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| ParseError::from_io(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn parse_with(path: &Path, parser: EntryParser) -> ParseResult<Corpus> {
    let source = read_source(path)?;
    let mut parser = parser;
    parser.feed_str(&source);
    let (corpus, diagnostics) = parser.into_parts();
    tracing::debug!(
        path = %path.display(),
        documents = corpus.len(),
        entries = corpus.entry_count(),
        skipped = diagnostics.len(),
        "parsed source file"
    );
    Ok(corpus)
}

/// Parse a file holding a known document type.
///
/// Cantrip lines found in the file are not part of the returned document; use
/// [`parse_typed`] to keep them.
pub fn parse_one(path: impl AsRef<Path>, doc_type: DocType) -> ParseResult<Document> {
    let mut corpus = parse_typed(path, doc_type)?;
    Ok(corpus.remove(doc_type).unwrap_or_default())
}

/// Parse a file holding a known document type, keeping everything it yields:
/// the `doc_type` document (present even if empty) plus any cantrips.
pub fn parse_typed(path: impl AsRef<Path>, doc_type: DocType) -> ParseResult<Corpus> {
    parse_with(path.as_ref(), EntryParser::with_document_type(doc_type))
}

/// Parse a file, taking the document type from its header line. A file
/// without a recognised header yields an empty corpus (plus any cantrips).
pub fn parse_any(path: impl AsRef<Path>) -> ParseResult<Corpus> {
    parse_with(path.as_ref(), EntryParser::new())
}

/// Parse several files in order and merge them. Each file starts from a fresh
/// parser state; where two files populate the same field, the earlier file's
/// value is kept.
pub fn parse_all<P: AsRef<Path>>(paths: &[P]) -> ParseResult<Corpus> {
    let mut corpus = Corpus::new();
    for path in paths {
        corpus.merge(parse_any(path)?, ConflictPolicy::KeepExisting);
    }
    Ok(corpus)
}
