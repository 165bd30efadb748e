//! Format implementations
//!
//! Each format renders the parsed map tree to text and reads its own output
//! back into a [`Document`](grimoire_parser::rulebook::Document).

pub mod json;
pub mod tsv;
pub mod yaml;

pub use json::JsonFormat;
pub use tsv::{read_tsv, TsvFormat};
pub use yaml::YamlFormat;
