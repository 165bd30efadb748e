//! Recursive merge of parsed structures
//!
//! Merging walks the map tree (corpus → document → entry → field text). Keys
//! missing from the destination are appended in source order, keys present on
//! both sides recurse, and a leaf present on both sides is resolved by the
//! [`ConflictPolicy`].
//!
//! The aggregator merges file results with [`ConflictPolicy::KeepExisting`]: the
//! first file to populate a field wins. Inside a single file the parser does not
//! merge at all; a repeated title replaces the earlier entry (see
//! [`Document::insert`]).

use super::model::{Corpus, Document, Entry, OrderedMap};
use std::hash::Hash;

/// How a leaf present on both sides of a merge is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConflictPolicy {
    /// Keep the destination's value (first write wins).
    #[default]
    KeepExisting,
    /// Take the incoming value (last write wins).
    Overwrite,
}

pub trait Merge {
    fn merge(&mut self, other: Self, policy: ConflictPolicy);
}

impl Merge for String {
    fn merge(&mut self, other: Self, policy: ConflictPolicy) {
        if policy == ConflictPolicy::Overwrite {
            *self = other;
        }
    }
}

impl<K, V> Merge for OrderedMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Merge,
{
    fn merge(&mut self, other: Self, policy: ConflictPolicy) {
        for (key, value) in other {
            match self.get_mut(&key) {
                Some(existing) => existing.merge(value, policy),
                None => {
                    self.insert(key, value);
                }
            }
        }
    }
}

impl Merge for Entry {
    fn merge(&mut self, other: Self, policy: ConflictPolicy) {
        let incoming: OrderedMap<_, _> = other.into_iter().collect();
        self.fields_mut().merge(incoming, policy);
    }
}

impl Merge for Document {
    fn merge(&mut self, other: Self, policy: ConflictPolicy) {
        let incoming: OrderedMap<_, _> = other.into_iter().collect();
        self.entries_mut().merge(incoming, policy);
    }
}

impl Merge for Corpus {
    fn merge(&mut self, other: Self, policy: ConflictPolicy) {
        let incoming: OrderedMap<_, _> = other.into_iter().collect();
        self.documents_mut().merge(incoming, policy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rulebook::model::{DocType, Field};

    fn entry(title: &str, fields: &[(Field, &str)]) -> Entry {
        let mut entry = Entry::new(title, "OBJECT OF POWER");
        for (field, value) in fields {
            entry.set(*field, *value);
        }
        entry
    }

    #[test]
    fn test_leaf_policies() {
        let mut kept = "first".to_string();
        kept.merge("second".to_string(), ConflictPolicy::KeepExisting);
        assert_eq!(kept, "first");

        let mut replaced = "first".to_string();
        replaced.merge("second".to_string(), ConflictPolicy::Overwrite);
        assert_eq!(replaced, "second");
    }

    #[test]
    fn test_entry_merge_fills_missing_fields_only() {
        let mut dest = entry("Ring", &[(Field::Level, "4")]);
        let src = entry("Ring", &[(Field::Level, "9"), (Field::Price, "3 gems")]);

        dest.merge(src, ConflictPolicy::KeepExisting);

        assert_eq!(dest.get(Field::Level), Some("4"));
        assert_eq!(dest.get(Field::Price), Some("3 gems"));
    }

    #[test]
    fn test_corpus_merge_recurses_and_appends() {
        let mut dest = Corpus::new();
        dest.document_mut(DocType::ObjectsOfPower)
            .insert(entry("Ring", &[(Field::Form, "A ring.")]));

        let mut src = Corpus::new();
        src.document_mut(DocType::ObjectsOfPower)
            .insert(entry("Ring", &[(Field::Form, "Other."), (Field::Color, "Red")]));
        src.document_mut(DocType::ObjectsOfPower)
            .insert(entry("Cup", &[]));
        src.document_mut(DocType::Spells)
            .insert(Entry::new("Foo", "SPELL"));

        dest.merge(src, ConflictPolicy::KeepExisting);

        let objects = dest.document(DocType::ObjectsOfPower).unwrap();
        assert_eq!(objects.titles().collect::<Vec<_>>(), vec!["Ring", "Cup"]);
        let ring = objects.get("Ring").unwrap();
        assert_eq!(ring.get(Field::Form), Some("A ring."));
        assert_eq!(ring.get(Field::Color), Some("Red"));
        assert_eq!(
            dest.doc_types().collect::<Vec<_>>(),
            vec![DocType::ObjectsOfPower, DocType::Spells]
        );
    }

    #[test]
    fn test_overwrite_policy_replaces_leaves_but_keeps_order() {
        let mut dest = entry("Ring", &[(Field::Level, "4"), (Field::Form, "A ring.")]);
        let src = entry("Ring", &[(Field::Form, "Band."), (Field::Level, "5")]);

        dest.merge(src, ConflictPolicy::Overwrite);

        let fields: Vec<_> = dest.fields().collect();
        assert_eq!(
            fields,
            vec![
                (Field::Title, "Ring"),
                (Field::Type, "OBJECT OF POWER"),
                (Field::Level, "5"),
                (Field::Form, "Band."),
            ]
        );
    }
}
