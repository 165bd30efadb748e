//! # grimoire-parser
//!
//! Turns plain-text rulebook excerpts into structured records.
//!
//! Source files are read line by line. A header line names the document type
//! (`SPELLS`, `OBJECTS OF POWER`, ...), title lines such as `Ember Ring (OBJECT OF
//! POWER)` open entries, and labels such as `Level:` or `Price:` open sections
//! whose text may run over several lines. A blank line closes the entry.
//!
//! File Layout
//!
//! src/rulebook
//!   ├── classify     Pure line classifiers
//!   ├── parsing      The per-line state machine
//!   ├── loader       parse_one / parse_any / parse_all
//!   ├── merge        Recursive merge with a conflict policy
//!   └── model        Corpus / Document / Entry
//!
//! Rendering the result (TSV, JSON, YAML) lives in `grimoire-export`.

pub mod rulebook;
