//! Turning the configured (or command-line) source list into one corpus

use grimoire_config::SourceConfig;
use grimoire_parser::rulebook::{
    parse_any, parse_typed, ConflictPolicy, Corpus, DocType, Merge, ParseResult,
};
use std::path::PathBuf;

/// Sources named on the command line replace the configured ones. `doc_type`
/// applies to every command-line file.
pub fn resolve_sources(
    files: Vec<PathBuf>,
    doc_type: Option<DocType>,
    configured: &[SourceConfig],
) -> Vec<SourceConfig> {
    if files.is_empty() {
        return configured.to_vec();
    }
    files
        .into_iter()
        .map(|path| SourceConfig { path, doc_type })
        .collect()
}

/// Parse every source in order. Earlier sources win field conflicts.
pub fn load_corpus(sources: &[SourceConfig]) -> ParseResult<Corpus> {
    let mut corpus = Corpus::new();
    for source in sources {
        let parsed = match source.doc_type {
            Some(doc_type) => parse_typed(&source.path, doc_type)?,
            None => parse_any(&source.path)?,
        };
        if parsed.is_empty() {
            tracing::warn!(path = %source.path.display(), "no document header found");
        }
        corpus.merge(parsed, ConflictPolicy::KeepExisting);
    }
    Ok(corpus)
}
