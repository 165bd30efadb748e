//! Data model for parsed rulebook text
//!
//! ```text
//! Corpus    DocType -> Document
//! Document  title   -> Entry
//! Entry     Field   -> text
//! ```
//!
//! All three levels are insertion-ordered maps, so output follows source order.

pub mod doc_type;
pub mod document;
pub mod entry;
pub mod field;
pub mod ordered_map;

pub use doc_type::{DocType, UnknownDocType};
pub use document::{Corpus, Document};
pub use entry::Entry;
pub use field::{Field, UnknownField};
pub use ordered_map::OrderedMap;
