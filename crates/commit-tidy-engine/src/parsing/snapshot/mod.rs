//! # Snapshot Testing Support
//!
//! Utilities for testing chunk assembly via snapshot assertions and invariant
//! checks.
//!
//! - **`render`**: Renders a chunk list as one stable, human-readable line per
//!   chunk for `insta` inline snapshots
//! - **`invariants`**: Runtime checks for partition correctness (contiguity,
//!   full coverage, subject uniqueness, diff suffix closure)

pub mod invariants;
pub mod render;

pub use invariants::check as invariants;
pub use render::render;
