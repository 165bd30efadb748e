//! Line Classification
//!
//! Pure functions that recognise one kind of line each. They take a line that
//! has already had trailing whitespace stripped and report a match (with any
//! extracted parts) or `None`. None of them look at parser state; the state
//! machine in [`parsing`](super::parsing) decides which classifier applies when.

use super::model::{DocType, Entry, Field};
use once_cell::sync::Lazy;
use regex::Regex;

/// Tags that may close an entry title line, e.g. `Ember Ring (OBJECT OF POWER)`.
pub const TITLE_TAGS: &[&str] = &[
    "EPHEMERA OBJECT",
    "SPELL",
    "INCANTATION",
    "OBJECT OF POWER",
    "CONJURATION",
    "INVOCATION",
    "ENCHANTMENT",
    "RITUAL",
    "CHARACTER SECRETS",
    "HOUSE SECRETS",
    "FORTE ABILITY",
];

/// Tags of single-line cantrip records, e.g. `Light (CANTRIP): A mote of light.`
pub const CANTRIP_TAGS: &[&str] = &["CANTRIP", "CHARM", "SIGN", "HEX"];

/// Lines that stand alone under a title and replace the entry's type.
pub const SPECIAL_TAGS: &[&str] = &["KINDLED", "RELIC", "ARTIFACT"];

/// Substrings marking a line as still talking about a price.
pub const MONEY_WORDS: &[&str] = &["gem", "orb", "bloodsilver"];

const REQUIREMENT_BULLET: &str = "?? ";

/// Section label patterns.
/// Order matters: patterns are tried in declaration order and the first match wins.
const SECTION_PATTERNS: &[(Field, &str)] = &[
    (Field::Level, r"^Level:(?:\s+(?P<content>.*))?$"),
    (Field::Form, r"^Form:(?:\s+(?P<content>.*))?$"),
    (Field::Color, r"^Color:(?:\s+(?P<content>.*))?$"),
    (Field::Facet, r"^Facets?:(?:\s+(?P<content>.*))?$"),
    (Field::Depletion, r"^Depletion:(?:\s+(?P<content>.*))?$"),
    (Field::Price, r"^(?:Conventional )?Price:(?:\s+(?P<content>.*))?$"),
    (
        Field::EffectDepletion,
        r"^Effect Depletion:(?:\s+(?P<content>.*))?$",
    ),
    (
        Field::ObjectDepletion,
        r"^Object Depletion:(?:\s+(?P<content>.*))?$",
    ),
    (Field::Requirements, r"^Requirements:(?:\s+(?P<content>.*))?$"),
];

static SECTION_REGEXES: Lazy<Vec<(Field, Regex)>> = Lazy::new(|| {
    SECTION_PATTERNS
        .iter()
        .map(|(field, pattern)| (*field, Regex::new(pattern).unwrap()))
        .collect()
});

static TITLE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^(?P<title>.+) \((?P<tag>{})\)$",
        alternation(TITLE_TAGS)
    ))
    .unwrap()
});

static CANTRIP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^(?P<title>.+) \((?P<tag>{})\): (?P<effect>.+)$",
        alternation(CANTRIP_TAGS)
    ))
    .unwrap()
});

fn alternation(tags: &[&str]) -> String {
    tags.iter()
        .map(|tag| regex::escape(tag))
        .collect::<Vec<_>>()
        .join("|")
}

/// Header line announcing the document type of the lines that follow.
pub fn detect_document_type(line: &str) -> Option<DocType> {
    DocType::ALL
        .into_iter()
        .find(|doc_type| doc_type.headers().contains(&line))
}

/// Entry title line: `<title> (<TAG>)`. Returns the title and the tag.
pub fn detect_title(line: &str) -> Option<(&str, &str)> {
    let caps = TITLE_REGEX.captures(line)?;
    let title = caps.name("title")?.as_str();
    let tag = caps.name("tag")?.as_str();
    Some((title, tag))
}

/// Complete single-line cantrip record: `<title> (<TAG>): <effect>`.
pub fn detect_cantrip_line(line: &str) -> Option<Entry> {
    let caps = CANTRIP_REGEX.captures(line)?;
    let mut entry = Entry::new(caps.name("title")?.as_str(), caps.name("tag")?.as_str());
    entry.set(Field::Effect, caps.name("effect")?.as_str());
    Some(entry)
}

/// Section label, with whatever followed it on the same line (possibly empty).
pub fn detect_section(line: &str) -> Option<(Field, &str)> {
    SECTION_REGEXES.iter().find_map(|(field, regex)| {
        regex.captures(line).map(|caps| {
            let content = caps.name("content").map_or("", |m| m.as_str());
            (*field, content)
        })
    })
}

pub fn is_special_tag(line: &str) -> bool {
    SPECIAL_TAGS.contains(&line)
}

/// A `?? ` prefixed requirement line, reformatted as a newline-terminated
/// `- ` list item.
pub fn is_requirement_bullet(line: &str) -> Option<String> {
    line.strip_prefix(REQUIREMENT_BULLET)
        .map(|rest| format!("- {rest}\n"))
}

pub fn mentions_money(line: &str) -> bool {
    MONEY_WORDS.iter().any(|word| line.contains(word))
}

pub fn starts_with_capital(line: &str) -> bool {
    line.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

/// Whether `line` starts a new unlabeled block rather than continuing the one
/// before it: it begins with a capital letter and `previous_line` does not end
/// a sentence. Without a previous line there is no boundary.
pub fn is_multiline_boundary(line: &str, previous_line: Option<&str>) -> bool {
    match previous_line {
        Some(previous) => starts_with_capital(line) && !previous.ends_with('.'),
        None => false,
    }
}
