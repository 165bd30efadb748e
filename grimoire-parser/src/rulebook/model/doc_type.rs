//! Document types
//!
//! A document type is announced by a header line at the top of a source file
//! (`SPELLS`, `OBJECTS OF POWER`, ...). Cantrips are special: their single-line
//! records may appear in any file and always belong to [`DocType::Cantrips`].

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DocType {
    Cantrips,
    Ephemera,
    Spells,
    Incantations,
    ObjectsOfPower,
    Monographs,
    CharacterSecrets,
    HouseSecrets,
    Forte,
}

impl DocType {
    pub const ALL: [DocType; 9] = [
        DocType::Cantrips,
        DocType::Ephemera,
        DocType::Spells,
        DocType::Incantations,
        DocType::ObjectsOfPower,
        DocType::Monographs,
        DocType::CharacterSecrets,
        DocType::HouseSecrets,
        DocType::Forte,
    ];

    /// Display label, also the key used in serialized output.
    pub fn label(self) -> &'static str {
        match self {
            DocType::Cantrips => "Cantrips",
            DocType::Ephemera => "Ephemera",
            DocType::Spells => "Spells",
            DocType::Incantations => "Incantations",
            DocType::ObjectsOfPower => "Objects of Power",
            DocType::Monographs => "Monographs",
            DocType::CharacterSecrets => "Character Secrets",
            DocType::HouseSecrets => "House Secrets",
            DocType::Forte => "Forte",
        }
    }

    /// Header lines announcing this document type in a source file.
    pub fn headers(self) -> &'static [&'static str] {
        match self {
            DocType::Cantrips => &["CANTRIPS"],
            DocType::Ephemera => &["EPHEMERA OBJECTS"],
            DocType::Spells => &["SPELLS"],
            DocType::Incantations => &["INCANTATIONS"],
            DocType::ObjectsOfPower => &["OBJECTS OF POWER"],
            DocType::Monographs => &["MONOGRAPHS"],
            DocType::CharacterSecrets => &["CHARACTER SECRETS"],
            DocType::HouseSecrets => &["HOUSE SECRETS"],
            DocType::Forte => &["FORTE", "FORTE ABILITIES"],
        }
    }

    /// Kebab-case name used on the command line, in configuration and for output
    /// file stems.
    pub fn slug(self) -> &'static str {
        match self {
            DocType::Cantrips => "cantrips",
            DocType::Ephemera => "ephemera",
            DocType::Spells => "spells",
            DocType::Incantations => "incantations",
            DocType::ObjectsOfPower => "objects-of-power",
            DocType::Monographs => "monographs",
            DocType::CharacterSecrets => "character-secrets",
            DocType::HouseSecrets => "house-secrets",
            DocType::Forte => "forte",
        }
    }

    pub fn from_label(label: &str) -> Option<DocType> {
        DocType::ALL.into_iter().find(|t| t.label() == label)
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown document type '{0}'")]
pub struct UnknownDocType(pub String);

/// Accepts either the slug (`objects-of-power`) or the label (`Objects of Power`).
impl FromStr for DocType {
    type Err = UnknownDocType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocType::ALL
            .into_iter()
            .find(|t| t.slug() == s || t.label() == s)
            .ok_or_else(|| UnknownDocType(s.to_string()))
    }
}

impl Serialize for DocType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for DocType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_and_label_parse() {
        for doc_type in DocType::ALL {
            assert_eq!(doc_type.slug().parse::<DocType>(), Ok(doc_type));
            assert_eq!(doc_type.label().parse::<DocType>(), Ok(doc_type));
        }
    }

    #[test]
    fn test_headers_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for doc_type in DocType::ALL {
            for header in doc_type.headers() {
                assert!(seen.insert(*header), "duplicate header {header}");
            }
        }
    }

    #[test]
    fn test_unknown() {
        assert!("grimoires".parse::<DocType>().is_err());
        assert_eq!(DocType::from_label("objects-of-power"), None);
    }
}
