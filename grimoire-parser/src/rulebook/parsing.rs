//! Entry parser
//!
//! A single pass over the lines of one source file. The parser tracks which
//! document it is in, which entry is open and which section of that entry new
//! text belongs to. Each line goes through [`transition`], which tries the
//! classifiers in a fixed priority order:
//!
//! 1. cantrip line (stateless, accepted anywhere)
//! 2. document header (only until one has been seen)
//! 3. blank line, closing the open entry
//! 4. entry title (only while no entry is open)
//! 5. special tag, replacing the entry type
//! 6. section label
//! 7. document-specific continuation rules
//! 8. plain continuation of the current section
//!
//! The state lives in [`ParserState`] and the output in a [`Corpus`], both passed
//! in explicitly so single transitions can be tested without any file I/O.

use super::classify;
use super::diagnostics::Diagnostic;
use super::model::{Corpus, DocType, Entry, Field};

/// Everything the parser remembers between lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserState {
    pub document_type: Option<DocType>,
    pub current_title: Option<String>,
    pub current_section: Option<Field>,
    /// The line before the most recently consumed one. Continuation heuristics
    /// compare the incoming line against this.
    pub previous_line: Option<String>,
    last_line: Option<String>,
    line_number: usize,
}

impl ParserState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State for a file whose document type is known up front.
    pub fn with_document_type(doc_type: DocType) -> Self {
        Self {
            document_type: Some(doc_type),
            ..Self::default()
        }
    }

    /// Number of lines consumed so far.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    fn shift_lookback(&mut self, line: &str) {
        self.previous_line = self.last_line.replace(line.to_string());
    }
}

/// What a single line did to the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// A complete cantrip record was stored.
    Cantrip { title: String },
    /// The document header was recognised.
    DocumentType(DocType),
    /// Line before any document header.
    BeforeHeader,
    /// Blank line; the open entry (if any) is closed.
    EntryEnd,
    /// A new entry was opened.
    Title { title: String },
    /// Text between entries that is not a title, such as page furniture.
    Noise,
    /// The entry type was replaced by a special tag.
    SpecialTag,
    /// A labelled section started.
    SectionOpened(Field),
    /// The line was added to the given section.
    Appended(Field),
    /// The line could not be placed anywhere and was skipped.
    Malformed { reason: &'static str },
}

/// Consume one line, updating `state` and `corpus`.
pub fn transition(state: &mut ParserState, corpus: &mut Corpus, line: &str) -> LineOutcome {
    let line = line.trim_end();
    state.line_number += 1;
    let outcome = apply(state, corpus, line);
    state.shift_lookback(line);
    outcome
}

fn apply(state: &mut ParserState, corpus: &mut Corpus, line: &str) -> LineOutcome {
    if let Some(entry) = classify::detect_cantrip_line(line) {
        let title = entry.title().unwrap_or_default().to_string();
        corpus.document_mut(DocType::Cantrips).insert(entry);
        return LineOutcome::Cantrip { title };
    }

    let Some(doc_type) = state.document_type else {
        return match classify::detect_document_type(line) {
            Some(doc_type) => {
                tracing::debug!(document = %doc_type, "found document header");
                state.document_type = Some(doc_type);
                corpus.document_mut(doc_type);
                LineOutcome::DocumentType(doc_type)
            }
            None => LineOutcome::BeforeHeader,
        };
    };

    if line.is_empty() {
        state.current_title = None;
        state.current_section = None;
        return LineOutcome::EntryEnd;
    }

    let Some(title) = state.current_title.as_deref() else {
        return match classify::detect_title(line) {
            Some((title, tag)) => {
                let mut entry = Entry::new(title, tag);
                // An unlabeled comment may follow the title directly
                entry.open_section(Field::Comment);
                corpus.document_mut(doc_type).insert(entry);
                state.current_title = Some(title.to_string());
                state.current_section = Some(Field::Comment);
                LineOutcome::Title {
                    title: title.to_string(),
                }
            }
            None => LineOutcome::Noise,
        };
    };

    let Some(entry) = corpus.document_mut(doc_type).get_mut(title) else {
        return LineOutcome::Malformed {
            reason: "open entry is missing from its document",
        };
    };

    if classify::is_special_tag(line) {
        entry.set(Field::Type, line);
        return LineOutcome::SpecialTag;
    }

    if let Some((field, content)) = classify::detect_section(line) {
        entry.set(field, content);
        let open = match field {
            // Always single-line, followed by an unlabeled effect
            Field::Level => {
                entry.open_section(Field::Effect);
                Field::Effect
            }
            // Always single-line, possibly followed by an unlabeled comment
            Field::Color => {
                if entry.get(Field::Comment).map_or(true, str::is_empty) {
                    entry.open_section(Field::Comment);
                }
                Field::Comment
            }
            other => other,
        };
        state.current_section = Some(open);
        return LineOutcome::SectionOpened(field);
    }

    let Some(mut section) = state.current_section else {
        return LineOutcome::Malformed {
            reason: "no section is open",
        };
    };

    match (doc_type, section) {
        (DocType::Monographs, Field::Requirements) => {
            if let Some(item) = classify::is_requirement_bullet(line) {
                entry.append_item(Field::Requirements, &item);
                return LineOutcome::Appended(Field::Requirements);
            }
            section = Field::Effect;
            entry.open_section(section);
        }
        (DocType::Ephemera | DocType::ObjectsOfPower, Field::Form) => {
            if classify::is_multiline_boundary(line, state.previous_line.as_deref()) {
                section = Field::Effect;
                entry.open_section(section);
            }
        }
        // Starts the comment over, unlike Color which keeps one already captured
        (DocType::ObjectsOfPower, Field::Price) => {
            if !classify::mentions_money(line) && classify::starts_with_capital(line) {
                section = Field::Comment;
                entry.open_section(section);
            }
        }
        _ => {}
    }

    entry.append_line(section, line);
    state.current_section = Some(section);
    LineOutcome::Appended(section)
}

/// Line-at-a-time parser collecting a [`Corpus`] and any diagnostics.
#[derive(Debug, Clone, Default)]
pub struct EntryParser {
    state: ParserState,
    corpus: Corpus,
    diagnostics: Vec<Diagnostic>,
}

impl EntryParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parser for a file known to hold `doc_type`; no header line is required.
    pub fn with_document_type(doc_type: DocType) -> Self {
        let mut corpus = Corpus::new();
        corpus.document_mut(doc_type);
        Self {
            state: ParserState::with_document_type(doc_type),
            corpus,
            diagnostics: Vec::new(),
        }
    }

    pub fn feed_line(&mut self, line: &str) -> LineOutcome {
        let outcome = transition(&mut self.state, &mut self.corpus, line);
        if let LineOutcome::Malformed { reason } = outcome {
            let diagnostic = Diagnostic::new(self.state.line_number(), line.trim_end(), reason);
            tracing::warn!("skipping {}", diagnostic);
            self.diagnostics.push(diagnostic);
        }
        outcome
    }

    /// Feed every line of `text`. `\n`, `\r\n` and a lone `\r` all end a line.
    pub fn feed_str(&mut self, text: &str) {
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        for line in text.lines() {
            self.feed_line(line);
        }
    }

    pub fn state(&self) -> &ParserState {
        &self.state
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn finish(self) -> Corpus {
        self.corpus
    }

    pub fn into_parts(self) -> (Corpus, Vec<Diagnostic>) {
        (self.corpus, self.diagnostics)
    }
}

/// Parse in-memory text, detecting the document type from its header.
pub fn parse_str(text: &str) -> Corpus {
    let mut parser = EntryParser::new();
    parser.feed_str(text);
    parser.finish()
}
