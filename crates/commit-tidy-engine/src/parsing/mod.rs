pub mod chunks;
pub mod rope;
pub mod snapshot;
pub mod trailers;

#[cfg(test)]
mod tests;

use xi_rope::Rope;

use chunks::{Chunk, ChunkBuilder, CommitLineClassifier};
use rope::{LineRef, lines_with_spans};
use trailers::{TrailerRules, reclassify_trailers};

/// A commit message split into lines and chunks.
#[derive(Debug)]
pub struct ParsedMessage {
    /// Every line of the document, indexed by line number.
    pub lines: Vec<LineRef>,
    pub chunks: Vec<Chunk>,
}

impl ParsedMessage {
    /// The chunk's text: its lines' contents joined with `\n`.
    pub fn chunk_text(&self, chunk: &Chunk) -> String {
        self.lines
            .get(chunk.lines.start..=chunk.lines.end)
            .unwrap_or_default()
            .iter()
            .map(LineRef::content)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Runs classification and merging over `lines`, without trailer detection.
pub fn assemble_chunks(lines: &[LineRef]) -> Vec<Chunk> {
    let classifier = CommitLineClassifier;
    let mut builder = ChunkBuilder::new();

    for lr in lines {
        let lc = classifier.classify(lr, builder.diff_mode());
        builder.push(&lc);
    }

    builder.finish()
}

/// Parses with git's built-in trailer prefixes only.
pub fn parse_message(rope: &Rope) -> ParsedMessage {
    parse_message_with(rope, &TrailerRules::default())
}

pub fn parse_message_with(rope: &Rope, rules: &TrailerRules) -> ParsedMessage {
    let lines: Vec<LineRef> = lines_with_spans(rope).collect();
    let mut chunks = assemble_chunks(&lines);
    reclassify_trailers(&mut chunks, &lines, rules);

    log::debug!("{} lines -> {} chunks", lines.len(), chunks.len());
    ParsedMessage { lines, chunks }
}
