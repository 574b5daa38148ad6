use xi_rope::Rope;

use crate::parsing::{chunks::Chunk, rope::slice::preview};

/// One line per chunk: `Kind start..=end  text preview`.
pub fn render(rope: &Rope, chunks: &[Chunk]) -> String {
    chunks
        .iter()
        .map(|c| {
            let line = format!(
                "{:<9} {}..={}  {}",
                c.kind.label(),
                c.lines.start,
                c.lines.end,
                preview(rope, c.content_span, 40)
            );
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
