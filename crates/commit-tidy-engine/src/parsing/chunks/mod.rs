//! # Chunk Assembly
//!
//! Two-phase partitioning of a commit message into typed, non-overlapping
//! chunks.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a
//!    `LineClass` from its own text plus the running [`DiffMode`]
//!    (has a scissors line been seen, has the diff started).
//!
//! 2. **Chunk Construction** (`builder`): A `ChunkBuilder` merges runs of
//!    same-kind lines, promotes the first paragraph to the subject and
//!    advances the diff mode.
//!
//! Trailer detection runs afterwards over the finished list
//! (see [`crate::parsing::trailers`]).
//!
//! ## Key Invariants
//!
//! - Chunks are ordered, contiguous and cover every line exactly once
//! - At most one `Subject` chunk, and it is the first paragraph opened
//! - Once a `Diff` chunk opens, it runs to the end of the document

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::ChunkBuilder;
pub use classify::{CommitLineClassifier, DiffMode, LineClass, LineKind};
pub use types::{Chunk, ChunkKind, LineRange};
