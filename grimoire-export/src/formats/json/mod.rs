//! JSON output
//!
//! A document renders as an object keyed by entry title whose values are
//! objects keyed by field label, in parse order:
//!
//! ```text
//! {
//!   "Ember Ring": {
//!     "Title": "Ember Ring",
//!     "Type": "OBJECT OF POWER",
//!     "Level": "4"
//!   }
//! }
//! ```
//!
//! A corpus adds one more level keyed by document type label.

use crate::error::ExportError;
use crate::format::Format;
use grimoire_parser::rulebook::{Corpus, Document};
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub struct JsonFormat {
    pretty: bool,
}

impl JsonFormat {
    pub fn new(pretty: bool) -> Self {
        JsonFormat { pretty }
    }

    /// Single-line output.
    pub fn compact() -> Self {
        Self::new(false)
    }

    fn render<T: Serialize>(&self, value: &T) -> Result<String, ExportError> {
        let text = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(text)
    }
}

impl Default for JsonFormat {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Nested JSON objects keyed by title and field"
    }

    fn serialize_document(&self, document: &Document) -> Result<String, ExportError> {
        self.render(document)
    }

    fn serialize_corpus(&self, corpus: &Corpus) -> Result<String, ExportError> {
        self.render(corpus)
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse_document(&self, source: &str) -> Result<Document, ExportError> {
        Ok(serde_json::from_str(source)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grimoire_parser::rulebook::{DocType, Entry, Field};

    fn ring() -> Document {
        let mut entry = Entry::new("Ember Ring", "OBJECT OF POWER");
        entry.set(Field::Level, "4");
        entry.set(Field::Comment, "Rarely\nsold.");
        std::iter::once(entry).collect()
    }

    #[test]
    fn test_compact_document() {
        let out = JsonFormat::compact().serialize_document(&ring()).unwrap();
        assert_eq!(
            out,
            r#"{"Ember Ring":{"Title":"Ember Ring","Type":"OBJECT OF POWER","Level":"4","Comment":"Rarely\nsold."}}"#
        );
    }

    #[test]
    fn test_corpus_keyed_by_label() {
        let mut corpus = Corpus::new();
        corpus.insert(DocType::ObjectsOfPower, ring());
        let out = JsonFormat::default().serialize_corpus(&corpus).unwrap();
        assert!(out.starts_with("{\n  \"Objects of Power\": {"));
    }

    #[test]
    fn test_reads_back() {
        let format = JsonFormat::default();
        let text = format.serialize_document(&ring()).unwrap();
        assert_eq!(format.parse_document(&text).unwrap(), ring());
    }
}
