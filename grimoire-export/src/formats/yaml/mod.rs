//! YAML output, same shape as the JSON output.

use crate::error::ExportError;
use crate::format::Format;
use grimoire_parser::rulebook::{Corpus, Document};

#[derive(Debug, Clone, Copy, Default)]
pub struct YamlFormat;

impl Format for YamlFormat {
    fn name(&self) -> &str {
        "yaml"
    }

    fn extension(&self) -> &str {
        "yml"
    }

    fn description(&self) -> &str {
        "Nested YAML mappings keyed by title and field"
    }

    fn serialize_document(&self, document: &Document) -> Result<String, ExportError> {
        Ok(serde_yaml::to_string(document)?)
    }

    fn serialize_corpus(&self, corpus: &Corpus) -> Result<String, ExportError> {
        Ok(serde_yaml::to_string(corpus)?)
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse_document(&self, source: &str) -> Result<Document, ExportError> {
        Ok(serde_yaml::from_str(source)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grimoire_parser::rulebook::{Entry, Field};

    #[test]
    fn test_document_mapping() {
        let mut entry = Entry::new("Foo", "SPELL");
        entry.set(Field::Level, "2");
        let doc: Document = std::iter::once(entry).collect();

        let out = YamlFormat.serialize_document(&doc).unwrap();
        assert_eq!(out, "Foo:\n  Title: Foo\n  Type: SPELL\n  Level: '2'\n");
        assert_eq!(YamlFormat.parse_document(&out).unwrap(), doc);
    }
}
