//! Output formats for parsed rulebook records
//!
//!     This crate renders a [`Document`](grimoire_parser::rulebook::Document) or a whole
//!     [`Corpus`](grimoire_parser::rulebook::Corpus) as text. Nothing here prints or
//!     reads the environment; writing files goes through [`output::write_outputs`]
//!     with an explicit directory.
//!
//!     The file structure:
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── output.rs               # <dir>/<format>/<doc-slug>.<ext> tree writer
//!     ├── formats
//!     │   ├── tsv                 # Tab separated table, one row per entry
//!     │   ├── json
//!     │   └── yaml
//!     └── lib.rs
//!
//!     JSON and YAML keep the nested map shape of the parsed data as is. TSV flattens
//!     it to one table per document, which loses line breaks inside values.

pub mod error;
pub mod format;
pub mod formats;
pub mod output;
pub mod registry;

pub use error::ExportError;
pub use format::Format;
pub use formats::{read_tsv, JsonFormat, TsvFormat, YamlFormat};
pub use output::write_outputs;
pub use registry::FormatRegistry;
