pub mod comment;

pub use comment::{CUT_MARKER, Comment};
