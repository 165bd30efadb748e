//! Format trait definition
//!
//! Every output format renders documents and corpora to a string. Formats that
//! can also read their own output back (all built-in ones can, at least for a
//! single document) override [`Format::parse_document`].

use crate::error::ExportError;
use grimoire_parser::rulebook::{Corpus, Document};

pub trait Format: Send + Sync {
    /// The name of this format (e.g. "tsv", "json")
    fn name(&self) -> &str;

    /// File extension used when writing this format, without the dot
    fn extension(&self) -> &str {
        self.name()
    }

    fn description(&self) -> &str {
        ""
    }

    fn serialize_document(&self, document: &Document) -> Result<String, ExportError>;

    fn serialize_corpus(&self, corpus: &Corpus) -> Result<String, ExportError>;

    fn supports_parsing(&self) -> bool {
        false
    }

    /// Read a document back from this format's output.
    ///
    /// Default implementation returns NotSupported error.
    fn parse_document(&self, _source: &str) -> Result<Document, ExportError> {
        Err(ExportError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }
}
