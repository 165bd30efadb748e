//! A single parsed game item

use super::field::Field;
use super::ordered_map::OrderedMap;
use serde::{Deserialize, Serialize};

/// One titled record: `Title`, `Type` and any number of section fields, kept in
/// the order they were first set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entry {
    fields: OrderedMap<Field, String>,
}

impl Entry {
    pub fn new(title: impl Into<String>, entry_type: impl Into<String>) -> Self {
        let mut fields = OrderedMap::new();
        fields.insert(Field::Title, title.into());
        fields.insert(Field::Type, entry_type.into());
        Entry { fields }
    }

    pub fn title(&self) -> Option<&str> {
        self.get(Field::Title)
    }

    pub fn entry_type(&self) -> Option<&str> {
        self.get(Field::Type)
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.fields.contains_key(&field)
    }

    /// Set a field, returning the previous value.
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> Option<String> {
        self.fields.insert(field, value.into())
    }

    /// Start a section over with empty text.
    pub fn open_section(&mut self, field: Field) {
        self.fields.insert(field, String::new());
    }

    /// Append one continuation line to a section: an empty section takes the
    /// line verbatim, otherwise it is joined with a single space.
    pub fn append_line(&mut self, field: Field, line: &str) {
        let text = self.fields.get_or_insert_with(field, String::new);
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(line);
    }

    /// Append an already formatted, newline-terminated list item to a section.
    pub fn append_item(&mut self, field: Field, item: &str) {
        let text = self.fields.get_or_insert_with(field, String::new);
        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        text.push_str(item);
    }

    pub fn fields(&self) -> impl Iterator<Item = (Field, &str)> {
        self.fields.iter().map(|(field, value)| (*field, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub(crate) fn fields_mut(&mut self) -> &mut OrderedMap<Field, String> {
        &mut self.fields
    }
}

impl FromIterator<(Field, String)> for Entry {
    fn from_iter<I: IntoIterator<Item = (Field, String)>>(iter: I) -> Self {
        Entry {
            fields: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Entry {
    type Item = (Field, String);
    type IntoIter = std::vec::IntoIter<(Field, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}
