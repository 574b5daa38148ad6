/// The scissors line git writes above the diff in `commit --verbose`.
///
/// Everything below it, starting at the first non-comment line, is the
/// attached diff rather than message text.
pub const CUT_MARKER: &str = "# ------------------------ >8 ------------------------";

/// Comment line rules (marker struct).
///
/// A comment is any line whose first non-whitespace character is `#`.
pub struct Comment;

impl Comment {
    /// Whether `text` (without its terminator) opens with a comment marker.
    pub fn opens(text: &str) -> bool {
        text.trim_start().starts_with('#')
    }

    /// Whether `text` is exactly the scissors line.
    pub fn is_cut_marker(text: &str) -> bool {
        text == CUT_MARKER
    }
}
