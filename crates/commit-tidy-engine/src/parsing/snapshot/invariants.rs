use xi_rope::Rope;

use crate::parsing::{
    chunks::{Chunk, ChunkKind},
    rope::LineRef,
};

/// Validates chunk list invariants.
///
/// Asserts that:
/// - Chunks are contiguous and cover every line exactly once
/// - Byte spans tile the rope and content spans sit inside them
/// - At most one `Subject` and one `Trailers` chunk exist, the subject
///   preceding every paragraph
/// - Nothing but `Diff` follows the first `Diff` chunk
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(rope: &Rope, lines: &[LineRef], chunks: &[Chunk]) {
    if lines.is_empty() {
        assert!(chunks.is_empty(), "empty document produced chunks");
        return;
    }

    let mut next_line = 0;
    let mut next_byte = 0;
    for c in chunks {
        assert!(c.lines.start <= c.lines.end, "inverted chunk {c:?}");
        assert_eq!(c.lines.start, next_line, "gap or overlap before {c:?}");
        assert_eq!(c.span.start, next_byte, "byte gap or overlap before {c:?}");
        assert!(
            c.content_span.start == c.span.start && c.content_span.end <= c.span.end,
            "content span not contained in chunk span: {c:?}"
        );
        next_line = c.lines.end + 1;
        next_byte = c.span.end;
    }
    assert_eq!(next_line, lines.len(), "chunks stop before the last line");
    assert_eq!(next_byte, rope.len(), "chunk spans stop before end of rope");

    let count = |k: ChunkKind| chunks.iter().filter(|c| c.kind == k).count();
    assert!(count(ChunkKind::Subject) <= 1, "more than one subject");
    assert!(count(ChunkKind::Trailers) <= 1, "more than one trailers block");

    if let Some(first_para) = chunks
        .iter()
        .position(|c| matches!(c.kind, ChunkKind::Paragraph | ChunkKind::Trailers))
    {
        assert!(
            chunks[..first_para]
                .iter()
                .any(|c| c.kind == ChunkKind::Subject),
            "paragraph before the subject"
        );
    }

    if let Some(first_diff) = chunks.iter().position(|c| c.kind == ChunkKind::Diff) {
        assert!(
            chunks[first_diff..]
                .iter()
                .all(|c| c.kind == ChunkKind::Diff),
            "non-diff chunk after the diff started"
        );
    }
}
