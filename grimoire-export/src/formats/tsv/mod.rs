//! Tab separated output
//!
//! One table per document: a header row of field labels followed by one row
//! per entry, in parse order.
//!
//! ```text
//! Title	Type	Level	Requirements
//! Key Rite	RITUAL	2	- A silver key // - A brass lamp
//! ```
//!
//! Columns are the union of the fields used by the document's entries, in order
//! of first appearance; an entry lacking a column gets an empty cell. Cells are
//! flattened to one line: trailing line breaks are dropped, inner line breaks
//! become the configured marker (` // ` by default) and tabs become spaces.
//! Nothing is quoted.
//!
//! A corpus renders as its documents' tables separated by a blank line.

use crate::error::ExportError;
use crate::format::Format;
use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};
use grimoire_parser::rulebook::{Corpus, Document, Entry, Field};

pub const DEFAULT_LINE_BREAK_SEPARATOR: &str = " // ";

#[derive(Debug, Clone)]
pub struct TsvFormat {
    line_break_separator: String,
}

impl TsvFormat {
    pub fn new(line_break_separator: impl Into<String>) -> Self {
        TsvFormat {
            line_break_separator: line_break_separator.into(),
        }
    }

    pub fn line_break_separator(&self) -> &str {
        &self.line_break_separator
    }

    fn flatten(&self, value: &str) -> String {
        value
            .trim_end_matches(['\r', '\n'])
            .replace("\r\n", "\n")
            .replace(['\r', '\n'], &self.line_break_separator)
            .replace('\t', " ")
    }
}

impl Default for TsvFormat {
    fn default() -> Self {
        Self::new(DEFAULT_LINE_BREAK_SEPARATOR)
    }
}

impl Format for TsvFormat {
    fn name(&self) -> &str {
        "tsv"
    }

    fn description(&self) -> &str {
        "Tab separated table, one row per entry"
    }

    fn serialize_document(&self, document: &Document) -> Result<String, ExportError> {
        if document.is_empty() {
            return Ok(String::new());
        }
        let columns = document.columns();
        let mut writer = WriterBuilder::new()
            .delimiter(b'\t')
            .quote_style(QuoteStyle::Never)
            .from_writer(Vec::new());

        writer.write_record(columns.iter().map(|field| field.label()))?;
        for entry in document.entries() {
            writer.write_record(
                columns
                    .iter()
                    .map(|field| self.flatten(entry.get(*field).unwrap_or_default())),
            )?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|err| ExportError::Io(err.into_error()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn serialize_corpus(&self, corpus: &Corpus) -> Result<String, ExportError> {
        let tables = corpus
            .documents()
            .filter(|(_, document)| !document.is_empty())
            .map(|(_, document)| self.serialize_document(document))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(tables.join("\n"))
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    /// Rebuild a document from a table, keyed by the Title column. Empty cells
    /// are treated as absent fields. Flattened line breaks are not restored.
    fn parse_document(&self, source: &str) -> Result<Document, ExportError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .quoting(false)
            .flexible(true)
            .from_reader(source.as_bytes());

        let columns = reader
            .headers()?
            .iter()
            .map(|label| {
                label
                    .parse::<Field>()
                    .map_err(|_| ExportError::UnknownColumn(label.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut document = Document::new();
        for record in reader.records() {
            let record = record?;
            let entry: Entry = columns
                .iter()
                .zip(record.iter())
                .filter(|(_, cell)| !cell.is_empty())
                .map(|(field, cell)| (*field, cell.to_string()))
                .collect();
            document.insert(entry);
        }
        Ok(document)
    }
}

/// Read a table written by [`TsvFormat`] back into a document.
pub fn read_tsv(text: &str) -> Result<Document, ExportError> {
    TsvFormat::default().parse_document(text)
}
