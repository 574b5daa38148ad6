//! # Formatting
//!
//! Turns a parsed message into edits. There is one pipeline for both
//! presentation forms:
//!
//! - **Edit list** ([`Formatter::edits`]): one [`Edit`] per chunk whose text
//!   changes. Subjects collapse to one line, paragraphs rewrap, blank runs
//!   collapse to a single empty line. Comments, diff and trailers are never
//!   touched.
//! - **Whole document** ([`Formatter::format`]): the edit list applied to the
//!   rope.
//!
//! Edits replace a chunk's `content_span` (its lines minus the last
//! terminator), which is what makes a blank run of any length shrink to
//! exactly one empty line.

pub mod wrap;

use xi_rope::{Rope, delta::Builder};

use crate::parsing::{
    ParsedMessage,
    chunks::{Chunk, ChunkKind, LineRange},
    parse_message_with,
    rope::{LineRef, slice::slice_to_string, span::Span},
    trailers::TrailerRules,
};

pub use wrap::DEFAULT_WRAP_WIDTH;

/// Knobs for the formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Column paragraphs wrap at.
    pub wrap_width: usize,
    pub trailer_rules: TrailerRules,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            wrap_width: DEFAULT_WRAP_WIDTH,
            trailer_rules: TrailerRules::default(),
        }
    }
}

/// A replacement of one chunk's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// Kind of the chunk being replaced.
    pub kind: ChunkKind,
    pub lines: LineRange,
    /// Bytes replaced: the chunk's `content_span`.
    pub span: Span,
    pub replacement: String,
}

/// Replacement text for a chunk, or `None` when the kind is kept verbatim.
///
/// `newline` joins the lines of a rewrapped paragraph.
pub fn replacement_for(
    kind: ChunkKind,
    text: &str,
    width: usize,
    newline: &str,
) -> Option<String> {
    match kind {
        ChunkKind::Subject => Some(wrap::format_subject(text)),
        ChunkKind::Paragraph => {
            let wrapped = wrap::format_paragraph(text, width);
            Some(if newline == "\n" {
                wrapped
            } else {
                wrapped.replace('\n', newline)
            })
        }
        ChunkKind::Blank => Some(String::new()),
        ChunkKind::Comment | ChunkKind::Diff | ChunkKind::Trailers => None,
    }
}

/// The line terminator of the first line, used for inserted breaks.
fn detect_newline(lines: &[LineRef]) -> &'static str {
    match lines.first() {
        Some(l) if l.text.ends_with("\r\n") => "\r\n",
        _ => "\n",
    }
}

/// Builds the edit list for a parsed message. Unchanged chunks get no edit.
pub fn compute_edits(rope: &Rope, parsed: &ParsedMessage, width: usize) -> Vec<Edit> {
    let newline = detect_newline(&parsed.lines);

    parsed
        .chunks
        .iter()
        .filter_map(|chunk| edit_for(rope, parsed, chunk, width, newline))
        .collect()
}

fn edit_for(
    rope: &Rope,
    parsed: &ParsedMessage,
    chunk: &Chunk,
    width: usize,
    newline: &str,
) -> Option<Edit> {
    let replacement = replacement_for(chunk.kind, &parsed.chunk_text(chunk), width, newline)?;
    if replacement == slice_to_string(rope, chunk.content_span) {
        return None;
    }

    Some(Edit {
        kind: chunk.kind,
        lines: chunk.lines,
        span: chunk.content_span,
        replacement,
    })
}

/// Applies non-overlapping edits, sorted by position, to `rope`.
pub fn apply_edits(rope: &Rope, edits: &[Edit]) -> Rope {
    if edits.is_empty() {
        return rope.clone();
    }

    let mut builder = Builder::new(rope.len());
    for edit in edits {
        builder.replace(
            edit.span.start..edit.span.end,
            Rope::from(edit.replacement.as_str()),
        );
    }
    builder.build().apply(rope)
}

/// Parses and formats commit messages with a fixed set of options.
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    options: FormatOptions,
}

impl Formatter {
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    pub fn parse(&self, rope: &Rope) -> ParsedMessage {
        parse_message_with(rope, &self.options.trailer_rules)
    }

    /// The per-chunk edit list.
    pub fn edits(&self, rope: &Rope) -> Vec<Edit> {
        let parsed = self.parse(rope);
        compute_edits(rope, &parsed, self.options.wrap_width)
    }

    /// The whole-document transform on a rope.
    pub fn format_rope(&self, rope: &Rope) -> Rope {
        let edits = self.edits(rope);
        log::debug!("applying {} edits", edits.len());
        apply_edits(rope, &edits)
    }

    /// The whole-document transform on text.
    pub fn format(&self, text: &str) -> String {
        self.format_rope(&Rope::from(text)).to_string()
    }
}

/// Formats `text` with the default options.
pub fn format_message(text: &str) -> String {
    Formatter::default().format(text)
}
