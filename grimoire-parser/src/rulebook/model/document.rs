//! Documents and the corpus that aggregates them

use super::doc_type::DocType;
use super::entry::Entry;
use super::field::Field;
use super::ordered_map::OrderedMap;
use serde::{Deserialize, Serialize};

/// Entries of one document type, keyed by title in order of first appearance.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    entries: OrderedMap<String, Entry>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry under its title. An entry already stored under the same
    /// title is replaced wholesale (last write wins) but keeps its position.
    pub fn insert(&mut self, entry: Entry) -> Option<Entry> {
        let title = entry.title().unwrap_or_default().to_string();
        self.entries.insert(title, entry)
    }

    pub fn get(&self, title: &str) -> Option<&Entry> {
        self.entries.get(title)
    }

    pub fn get_mut(&mut self, title: &str) -> Option<&mut Entry> {
        self.entries.get_mut(title)
    }

    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Union of the fields used by any entry, in order of first appearance.
    pub fn columns(&self) -> Vec<Field> {
        let mut columns = Vec::new();
        for entry in self.entries.values() {
            for (field, _) in entry.fields() {
                if !columns.contains(&field) {
                    columns.push(field);
                }
            }
        }
        columns
    }

    pub(crate) fn entries_mut(&mut self) -> &mut OrderedMap<String, Entry> {
        &mut self.entries
    }
}

impl FromIterator<Entry> for Document {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        let mut document = Document::new();
        for entry in iter {
            document.insert(entry);
        }
        document
    }
}

impl IntoIterator for Document {
    type Item = (String, Entry);
    type IntoIter = std::vec::IntoIter<(String, Entry)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Every document produced from one or more source files, keyed by type.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Corpus {
    documents: OrderedMap<DocType, Document>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn document(&self, doc_type: DocType) -> Option<&Document> {
        self.documents.get(&doc_type)
    }

    /// The document for `doc_type`, created empty if this is its first mention.
    pub fn document_mut(&mut self, doc_type: DocType) -> &mut Document {
        self.documents.get_or_insert_with(doc_type, Document::new)
    }

    pub fn insert(&mut self, doc_type: DocType, document: Document) -> Option<Document> {
        self.documents.insert(doc_type, document)
    }

    pub fn remove(&mut self, doc_type: DocType) -> Option<Document> {
        self.documents.remove(&doc_type)
    }

    pub fn documents(&self) -> impl Iterator<Item = (DocType, &Document)> {
        self.documents.iter().map(|(t, d)| (*t, d))
    }

    pub fn doc_types(&self) -> impl Iterator<Item = DocType> + '_ {
        self.documents.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Total number of entries across all documents.
    pub fn entry_count(&self) -> usize {
        self.documents.values().map(Document::len).sum()
    }

    pub(crate) fn documents_mut(&mut self) -> &mut OrderedMap<DocType, Document> {
        &mut self.documents
    }
}

impl IntoIterator for Corpus {
    type Item = (DocType, Document);
    type IntoIter = std::vec::IntoIter<(DocType, Document)>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.into_iter()
    }
}
