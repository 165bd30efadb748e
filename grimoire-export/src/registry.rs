//! Format registry for format discovery and selection
//!
//! Formats are registered and looked up by name. Registering a second format
//! under an existing name replaces the first, which is how configured variants
//! (pretty JSON off, a different TSV line break marker) take over from the
//! defaults.

use crate::error::ExportError;
use crate::format::Format;
use grimoire_parser::rulebook::{Corpus, Document};
use std::collections::HashMap;

pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    pub fn get(&self, name: &str) -> Result<&dyn Format, ExportError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| ExportError::FormatNotFound(name.to_string()))
    }

    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn serialize_document(
        &self,
        document: &Document,
        format: &str,
    ) -> Result<String, ExportError> {
        self.get(format)?.serialize_document(document)
    }

    pub fn serialize_corpus(&self, corpus: &Corpus, format: &str) -> Result<String, ExportError> {
        self.get(format)?.serialize_corpus(corpus)
    }

    /// Read a document back using the specified format
    pub fn parse_document(&self, source: &str, format: &str) -> Result<Document, ExportError> {
        let fmt = self.get(format)?;
        if !fmt.supports_parsing() {
            return Err(ExportError::NotSupported(format!(
                "Format '{}' does not support parsing",
                format
            )));
        }
        fmt.parse_document(source)
    }

    /// Create a registry with the built-in formats in their default settings
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::TsvFormat::default());
        registry.register(crate::formats::JsonFormat::default());
        registry.register(crate::formats::YamlFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grimoire_parser::rulebook::{DocType, Entry};

    struct CountFormat;
    impl Format for CountFormat {
        fn name(&self) -> &str {
            "count"
        }
        fn extension(&self) -> &str {
            "txt"
        }
        fn serialize_document(&self, document: &Document) -> Result<String, ExportError> {
            Ok(document.len().to_string())
        }
        fn serialize_corpus(&self, corpus: &Corpus) -> Result<String, ExportError> {
            Ok(corpus.entry_count().to_string())
        }
    }

    fn sample() -> Corpus {
        let mut corpus = Corpus::new();
        let spells = corpus.document_mut(DocType::Spells);
        spells.insert(Entry::new("Foo", "SPELL"));
        spells.insert(Entry::new("Bar", "SPELL"));
        corpus
    }

    #[test]
    fn test_registry_creation() {
        let registry = FormatRegistry::new();
        assert!(registry.list_formats().is_empty());
    }

    #[test]
    fn test_register_and_serialize() {
        let mut registry = FormatRegistry::new();
        registry.register(CountFormat);

        assert!(registry.has("count"));
        assert_eq!(registry.serialize_corpus(&sample(), "count").unwrap(), "2");
    }

    #[test]
    fn test_format_not_found() {
        let registry = FormatRegistry::new();
        match registry.get("csv") {
            Err(ExportError::FormatNotFound(name)) => assert_eq!(name, "csv"),
            _ => panic!("Expected FormatNotFound error"),
        }
    }

    #[test]
    fn test_parse_not_supported() {
        let mut registry = FormatRegistry::new();
        registry.register(CountFormat);
        assert!(matches!(
            registry.parse_document("2", "count"),
            Err(ExportError::NotSupported(_))
        ));
    }

    #[test]
    fn test_defaults() {
        let registry = FormatRegistry::default();
        assert_eq!(registry.list_formats(), vec!["json", "tsv", "yaml"]);
    }

    #[test]
    fn test_register_replaces_same_name() {
        let mut registry = FormatRegistry::with_defaults();
        registry.register(crate::formats::JsonFormat::compact());

        let doc = sample().remove(DocType::Spells).unwrap();
        let out = registry.serialize_document(&doc, "json").unwrap();
        assert!(!out.contains('\n'));
    }
}
