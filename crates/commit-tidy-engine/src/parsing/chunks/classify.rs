use crate::parsing::rope::{lines::LineRef, span::Span};

use super::{kinds::Comment, types::ChunkKind};

/// Running state of the scissors/diff tracking across a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiffMode {
    /// No scissors line seen yet.
    #[default]
    Off,
    /// A scissors line was seen; the next non-comment line starts the diff.
    Armed,
    /// Inside the diff. Never resets.
    Active,
}

/// Raw kind of a single line, before merging and subject promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Comment,
    Paragraph,
    Diff,
}

impl LineKind {
    /// The chunk kind a run of these lines opens as.
    pub fn chunk_kind(self) -> ChunkKind {
        match self {
            LineKind::Blank => ChunkKind::Blank,
            LineKind::Comment => ChunkKind::Comment,
            LineKind::Paragraph => ChunkKind::Paragraph,
            LineKind::Diff => ChunkKind::Diff,
        }
    }
}

/// Classification of a single line.
///
/// This is phase 1 of chunk assembly: the kind depends only on the line's
/// own text and the [`DiffMode`] handed in by the builder.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Zero-based line number.
    pub index: usize,
    /// Full byte span of this line in the rope.
    pub line: Span,
    /// Byte span of the line without its terminator.
    pub content: Span,
    pub kind: LineKind,
    /// Whether this line is the scissors line.
    pub is_cut_marker: bool,
}

/// Classifies individual lines for the chunk assembly phase.
pub struct CommitLineClassifier;

impl CommitLineClassifier {
    /// Classifies a line into a [`LineClass`].
    pub fn classify(&self, lr: &LineRef, diff: DiffMode) -> LineClass {
        let (kind, is_cut_marker) = classify_text(lr.content(), diff);
        LineClass {
            index: lr.index,
            line: lr.span,
            content: lr.content_span(),
            kind,
            is_cut_marker,
        }
    }
}

/// Classifies one line of text (terminator already stripped).
///
/// Rules, first match wins:
/// 1. inside the diff, or armed and the line is not comment-like: `Diff`
/// 2. whitespace only: `Blank`
/// 3. first non-whitespace char is `#`: `Comment`
/// 4. anything else: `Paragraph`
///
/// Blank lines count as comment-like, so blank lines between the scissors
/// line and the diff stay `Blank`.
pub fn classify_text(text: &str, diff: DiffMode) -> (LineKind, bool) {
    let is_blank = text.trim().is_empty();
    let comment_like = is_blank || Comment::opens(text);

    let kind = match diff {
        DiffMode::Active => LineKind::Diff,
        DiffMode::Armed if !comment_like => LineKind::Diff,
        _ if is_blank => LineKind::Blank,
        _ if comment_like => LineKind::Comment,
        _ => LineKind::Paragraph,
    };

    let is_cut_marker = kind == LineKind::Comment && Comment::is_cut_marker(text);
    (kind, is_cut_marker)
}
