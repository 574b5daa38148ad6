use crate::parsing::rope::span::Span;

use super::{
    classify::{DiffMode, LineClass, LineKind},
    types::{Chunk, ChunkKind, LineRange},
};

/// The chunk currently being extended.
#[derive(Debug, Clone, Copy)]
struct OpenChunk {
    /// Raw kind that extends this chunk; a `Subject` still merges `Paragraph` lines.
    line_kind: LineKind,
    kind: ChunkKind,
    lines: LineRange,
    span: Span,
    content_end: usize,
}

impl OpenChunk {
    fn extend(&mut self, c: &LineClass) {
        self.lines.end = c.index;
        self.span.end = c.line.end;
        self.content_end = c.content.end;
    }

    fn close(self) -> Chunk {
        Chunk {
            kind: self.kind,
            lines: self.lines,
            span: self.span,
            content_span: Span {
                start: self.span.start,
                end: self.content_end,
            },
        }
    }
}

/// Merges classified lines into chunks.
///
/// Feed lines in document order with [`ChunkBuilder::push`], passing each
/// line through the classifier with the builder's current
/// [`ChunkBuilder::diff_mode`].
pub struct ChunkBuilder {
    diff: DiffMode,
    open: Option<OpenChunk>,
    subject_assigned: bool,
    out: Vec<Chunk>,
}

impl ChunkBuilder {
    pub fn new() -> Self {
        Self {
            diff: DiffMode::Off,
            open: None,
            subject_assigned: false,
            out: vec![],
        }
    }

    /// The diff mode the next line must be classified under.
    pub fn diff_mode(&self) -> DiffMode {
        self.diff
    }

    pub fn push(&mut self, c: &LineClass) {
        self.advance_diff_mode(c);

        if let Some(open) = self.open.as_mut().filter(|o| o.line_kind == c.kind) {
            open.extend(c);
            return;
        }

        self.flush();
        self.open = Some(self.open_chunk(c));
    }

    pub fn finish(mut self) -> Vec<Chunk> {
        // EOF flush
        self.flush();
        self.out
    }

    fn advance_diff_mode(&mut self, c: &LineClass) {
        self.diff = match self.diff {
            _ if c.kind == LineKind::Diff => DiffMode::Active,
            DiffMode::Off if c.is_cut_marker => {
                log::trace!("scissors line at {}", c.index);
                DiffMode::Armed
            }
            mode => mode,
        };
    }

    fn open_chunk(&mut self, c: &LineClass) -> OpenChunk {
        let mut kind = c.kind.chunk_kind();
        if kind == ChunkKind::Paragraph && !self.subject_assigned {
            kind = ChunkKind::Subject;
            self.subject_assigned = true;
        }

        OpenChunk {
            line_kind: c.kind,
            kind,
            lines: LineRange::single(c.index),
            span: c.line,
            content_end: c.content.end,
        }
    }

    fn flush(&mut self) {
        if let Some(open) = self.open.take() {
            let chunk = open.close();
            log::trace!(
                "chunk {:?} lines {}..={}",
                chunk.kind,
                chunk.lines.start,
                chunk.lines.end
            );
            self.out.push(chunk);
        }
    }
}

impl Default for ChunkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
