//! Writing rendered outputs to disk
//!
//! Outputs are laid out as `<dir>/<format>/<doc-slug>.<ext>`, one file per
//! document and format:
//!
//! ```text
//! out/
//! ├── json/spells.json
//! ├── tsv/spells.tsv
//! └── yaml/spells.yml
//! ```
//!
//! Existing files are overwritten. Empty documents are skipped.

use crate::error::ExportError;
use crate::registry::FormatRegistry;
use grimoire_parser::rulebook::Corpus;
use std::fs;
use std::path::{Path, PathBuf};

/// Render every document of `corpus` in each of `formats` below `out_dir`.
/// Returns the written paths in write order.
pub fn write_outputs<S: AsRef<str>>(
    corpus: &Corpus,
    out_dir: &Path,
    registry: &FormatRegistry,
    formats: &[S],
) -> Result<Vec<PathBuf>, ExportError> {
    // Resolve every name up front so a typo doesn't leave a half-written tree.
    let formats = formats
        .iter()
        .map(|name| registry.get(name.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    let mut written = Vec::new();
    for format in formats {
        let dir = out_dir.join(format.name());
        fs::create_dir_all(&dir).map_err(|source| ExportError::Write {
            path: dir.clone(),
            source,
        })?;

        for (doc_type, document) in corpus.documents() {
            if document.is_empty() {
                continue;
            }
            let path = dir.join(format!("{}.{}", doc_type.slug(), format.extension()));
            let text = format.serialize_document(document)?;
            write_to_path(&path, &text)?;
            tracing::info!(
                path = %path.display(),
                entries = document.len(),
                "wrote {} output",
                format.name()
            );
            written.push(path);
        }
    }
    Ok(written)
}

fn write_to_path(path: &Path, text: &str) -> Result<(), ExportError> {
    fs::write(path, text).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })
}
