//! # commit-tidy-engine
//!
//! Formats git commit messages. A message is partitioned into typed chunks
//! (subject, paragraphs, comments, blank runs, the diff below a scissors
//! line, a trailer block) and each chunk kind gets its own treatment:
//! subjects collapse to one line, paragraphs rewrap at 72 columns, blank runs
//! shrink to one empty line, and comments, diff and trailers are left exactly
//! as written.
//!
//! ```
//! let out = commit_tidy_engine::format_message("Fix  the parser\n\n\n\nIt was\nbroken.\n");
//! assert_eq!(out, "Fix the parser\n\nIt was broken.\n");
//! ```

pub mod format;
pub mod outline;
pub mod parsing;

// Re-export key types for easier usage
pub use format::{DEFAULT_WRAP_WIDTH, Edit, FormatOptions, Formatter, format_message};
pub use outline::*;
pub use parsing::{
    ParsedMessage,
    chunks::{Chunk, ChunkKind, LineRange},
    parse_message, parse_message_with,
    rope::Span,
    trailers::TrailerRules,
};
pub use xi_rope::Rope;
