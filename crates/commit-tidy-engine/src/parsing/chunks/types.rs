use crate::parsing::rope::span::Span;

/// The semantic kind of a chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChunkKind {
    /// The first paragraph: the commit's one-line summary.
    Subject,
    /// A body paragraph, rewrapped on format.
    Paragraph,
    /// `#` lines, kept verbatim.
    Comment,
    /// Whitespace-only lines, collapsed on format.
    Blank,
    /// Everything after the scissors line, kept verbatim.
    Diff,
    /// The `Key: value` block closing the message, kept verbatim.
    Trailers,
}

impl ChunkKind {
    /// Display label used by outline and folding consumers.
    pub fn label(self) -> &'static str {
        match self {
            ChunkKind::Subject => "Subject",
            ChunkKind::Paragraph => "Paragraph",
            ChunkKind::Comment => "Comment",
            ChunkKind::Blank => "Blank",
            ChunkKind::Diff => "Diff",
            ChunkKind::Trailers => "Trailers",
        }
    }

    /// Whether formatting leaves chunks of this kind untouched.
    pub fn is_verbatim(self) -> bool {
        matches!(self, ChunkKind::Comment | ChunkKind::Diff | ChunkKind::Trailers)
    }
}

/// An inclusive range of zero-based line numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LineRange {
    pub start: usize,
    /// Inclusive.
    pub end: usize,
}

impl LineRange {
    pub fn single(line: usize) -> Self {
        Self {
            start: line,
            end: line,
        }
    }

    /// Number of lines covered (always at least one).
    pub fn line_count(self) -> usize {
        self.end - self.start + 1
    }

    pub fn contains(self, line: usize) -> bool {
        (self.start..=self.end).contains(&line)
    }
}

/// A maximal run of lines sharing one kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub kind: ChunkKind,
    /// Lines covered by the chunk, `start <= end`.
    pub lines: LineRange,
    /// Full byte span of the chunk's lines, terminators included.
    pub span: Span,
    /// `span` minus the terminator of the last line. Edits replace this.
    pub content_span: Span,
}
