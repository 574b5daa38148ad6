//! Read-only views over a chunk list: subject selection, folding ranges and
//! outline entries. Nothing here keeps state; every call derives its answer
//! from the chunks it is handed.

use crate::parsing::chunks::{Chunk, ChunkKind, LineRange};

/// How a folding consumer should present a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldRegion {
    Plain,
    Comment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoldingRange {
    pub lines: LineRange,
    pub region: FoldRegion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutlineEntry {
    pub label: &'static str,
    pub kind: ChunkKind,
    pub lines: LineRange,
}

/// Lines of the subject, or the first line when there is no subject.
pub fn subject_range(chunks: &[Chunk]) -> LineRange {
    chunks
        .iter()
        .find(|c| c.kind == ChunkKind::Subject)
        .map_or(LineRange::single(0), |c| c.lines)
}

/// The chunk covering `line`, if any.
pub fn chunk_at_line(chunks: &[Chunk], line: usize) -> Option<&Chunk> {
    chunks.iter().find(|c| c.lines.contains(line))
}

fn fold_region(kind: ChunkKind) -> Option<FoldRegion> {
    match kind {
        ChunkKind::Subject | ChunkKind::Paragraph | ChunkKind::Trailers => Some(FoldRegion::Plain),
        ChunkKind::Comment => Some(FoldRegion::Comment),
        ChunkKind::Blank | ChunkKind::Diff => None,
    }
}

pub fn folding_ranges(chunks: &[Chunk]) -> Vec<FoldingRange> {
    chunks
        .iter()
        .filter_map(|c| {
            fold_region(c.kind).map(|region| FoldingRange {
                lines: c.lines,
                region,
            })
        })
        .collect()
}

/// Outline entries for every chunk except blank runs.
pub fn outline(chunks: &[Chunk]) -> Vec<OutlineEntry> {
    chunks
        .iter()
        .filter(|c| c.kind != ChunkKind::Blank)
        .map(|c| OutlineEntry {
            label: c.kind.label(),
            kind: c.kind,
            lines: c.lines,
        })
        .collect()
}
