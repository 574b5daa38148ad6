//! # Trailer Detection
//!
//! Decides whether the last body paragraph of a message is really a block of
//! `Key: value` trailers, in which case it must be left exactly as written.
//!
//! A paragraph qualifies when either
//! - every scored line is a trailer (folded continuation lines allowed), or
//! - its first line starts with a prefix git itself generates and trailers
//!   make up at least a quarter of the scored lines.

use crate::parsing::{
    chunks::{Chunk, ChunkKind},
    rope::LineRef,
};

/// Line prefixes git writes on its own (`commit -s`, `cherry-pick -x`).
pub const GIT_GENERATED_PREFIXES: &[&str] = &["Signed-off-by: ", "(cherry picked from commit "];

/// Prefixes that mark a paragraph as a generated footer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrailerRules {
    extra_prefixes: Vec<String>,
}

impl TrailerRules {
    /// Rules recognizing git's own prefixes plus `extra_prefixes`.
    pub fn new(extra_prefixes: Vec<String>) -> Self {
        Self { extra_prefixes }
    }

    pub fn extra_prefixes(&self) -> &[String] {
        &self.extra_prefixes
    }

    pub fn has_recognized_prefix(&self, line: &str) -> bool {
        GIT_GENERATED_PREFIXES.iter().any(|p| line.starts_with(p))
            || self
                .extra_prefixes
                .iter()
                .any(|p| !p.is_empty() && line.starts_with(p.as_str()))
    }

    /// Scores the lines of one paragraph (terminators stripped).
    pub fn is_trailer_block(&self, lines: &[&str]) -> bool {
        let Some((first, rest)) = lines.split_first() else {
            return false;
        };

        let recognized = self.has_recognized_prefix(first);
        let (scored, mut trailers) = if recognized { (rest, 1) } else { (lines, 0) };
        let mut others = 0usize;
        // A continuation is only valid right after a trailer or another continuation.
        let mut in_trailer = recognized;

        for line in scored {
            if is_trailer_line(line) {
                trailers += 1;
                in_trailer = true;
            } else if in_trailer && is_continuation_line(line) {
                continue;
            } else if recognized {
                others += 1;
                in_trailer = false;
            } else {
                return false;
            }
        }

        log::trace!("trailer score: {trailers} trailers, {others} others, prefix {recognized}");

        (others == 0 && trailers > 0) || (recognized && 3 * trailers >= others)
    }
}

/// `token: value`, where the token is ASCII letters, digits and hyphens, an
/// optional single whitespace may precede the colon, and the value is
/// non-empty.
pub fn is_trailer_line(line: &str) -> bool {
    let token_len = line
        .bytes()
        .take_while(|b| b.is_ascii_alphanumeric() || *b == b'-')
        .count();
    if token_len == 0 {
        return false;
    }

    let rest = &line[token_len..];
    let rest = match rest.chars().next() {
        Some(c) if c.is_whitespace() => &rest[c.len_utf8()..],
        _ => rest,
    };

    rest.strip_prefix(": ").is_some_and(|value| !value.is_empty())
}

/// A folded trailer value: a line indented with whitespace.
pub fn is_continuation_line(line: &str) -> bool {
    line.starts_with(char::is_whitespace) && !line.trim().is_empty()
}

/// Turns the last `Paragraph` chunk into `Trailers` if it scores as one.
///
/// `lines` must be the document's lines indexed by line number.
pub fn reclassify_trailers(chunks: &mut [Chunk], lines: &[LineRef], rules: &TrailerRules) {
    let Some(chunk) = chunks
        .iter_mut()
        .rev()
        .find(|c| c.kind == ChunkKind::Paragraph)
    else {
        return;
    };
    let Some(chunk_lines) = lines.get(chunk.lines.start..=chunk.lines.end) else {
        return;
    };

    let texts: Vec<&str> = chunk_lines.iter().map(LineRef::content).collect();
    if rules.is_trailer_block(&texts) {
        log::debug!(
            "lines {}..={} reclassified as trailers",
            chunk.lines.start,
            chunk.lines.end
        );
        chunk.kind = ChunkKind::Trailers;
    }
}
