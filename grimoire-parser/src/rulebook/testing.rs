//! Helpers for tests that parse inline sources
//!
//! Used by this crate's unit and integration tests and by downstream crates'
//! tests.

use super::model::{Corpus, DocType, Entry};
use super::parsing::parse_str;

/// Parse lines as if they were a file.
pub fn parse_lines(lines: &[&str]) -> Corpus {
    parse_str(&lines.join("\n"))
}

/// Look up an entry, panicking with a readable message when it is missing.
pub fn entry<'a>(corpus: &'a Corpus, doc_type: DocType, title: &str) -> &'a Entry {
    let document = corpus
        .document(doc_type)
        .unwrap_or_else(|| panic!("no {doc_type} document in corpus"));
    document
        .get(title)
        .unwrap_or_else(|| panic!("no entry '{title}' in {doc_type}"))
}

/// A small Objects of Power source exercising the form and price heuristics.
pub const OBJECTS_SAMPLE: &str = "\
OBJECTS OF POWER
Ember Ring (OBJECT OF POWER)
RELIC
Level: 4
Form: A small ring.
It glows.
Price: 3 gems
for trade.

Glass Eye (OBJECT OF POWER)
Level: 2
Color: Silver
Looks back at you.
Conventional Price:
1 orb
Rarely sold.
Effect Depletion: 2
Object Depletion:
1
";

/// A Spells source with an interleaved cantrip.
pub const SPELLS_SAMPLE: &str = "\
SPELLS

Foo (SPELL)
Level: 3

Bar Bolt (SPELL)
Level: 1
A bolt of light
strikes a foe.
Facets: Fire
Depletion: 2
Light (CANTRIP): A mote of light appears.
";
