//! Field names of an entry
//!
//! `Title` and `Type` come from the title line (or a special tag). Every other
//! variant is a section: a labelled or implicit block of text that may span
//! several source lines.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Title,
    Type,
    Level,
    Form,
    Color,
    Facet,
    Depletion,
    Price,
    EffectDepletion,
    ObjectDepletion,
    Requirements,
    Effect,
    Comment,
}

impl Field {
    pub const ALL: [Field; 13] = [
        Field::Title,
        Field::Type,
        Field::Level,
        Field::Form,
        Field::Color,
        Field::Facet,
        Field::Depletion,
        Field::Price,
        Field::EffectDepletion,
        Field::ObjectDepletion,
        Field::Requirements,
        Field::Effect,
        Field::Comment,
    ];

    /// The key used for this field in every output format.
    pub fn label(self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Type => "Type",
            Field::Level => "Level",
            Field::Form => "Form",
            Field::Color => "Color",
            Field::Facet => "Facet",
            Field::Depletion => "Depletion",
            Field::Price => "Price",
            Field::EffectDepletion => "Effect Depletion",
            Field::ObjectDepletion => "Object Depletion",
            Field::Requirements => "Requirements",
            Field::Effect => "Effect",
            Field::Comment => "Comment",
        }
    }

    pub fn is_section(self) -> bool {
        !matches!(self, Field::Title | Field::Type)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field '{0}'")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.label() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_parse_back() {
        for field in Field::ALL {
            assert_eq!(field.label().parse::<Field>(), Ok(field));
        }
    }

    #[test]
    fn test_unknown_label() {
        assert_eq!(
            "Flavor".parse::<Field>(),
            Err(UnknownField("Flavor".to_string()))
        );
    }

    #[test]
    fn test_sections() {
        assert!(!Field::Title.is_section());
        assert!(!Field::Type.is_section());
        assert!(Field::EffectDepletion.is_section());
    }
}
