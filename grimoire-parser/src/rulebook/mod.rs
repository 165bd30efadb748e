//! Rulebook parsing: classifiers, the entry state machine, and aggregation

pub mod classify;
pub mod diagnostics;
pub mod error;
pub mod loader;
pub mod merge;
pub mod model;
pub mod parsing;
pub mod testing;

pub use diagnostics::Diagnostic;
pub use error::{ParseError, ParseResult};
pub use loader::{parse_all, parse_any, parse_one, parse_typed, read_source};
pub use merge::{ConflictPolicy, Merge};
pub use model::{Corpus, DocType, Document, Entry, Field};
pub use parsing::{parse_str, transition, EntryParser, LineOutcome, ParserState};
