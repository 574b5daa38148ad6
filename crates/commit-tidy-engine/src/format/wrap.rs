//! Whitespace normalization and greedy word wrap.
//!
//! All functions are total: any input, including the empty string, yields a
//! result.

/// Column git and most tooling expect commit bodies to wrap at.
pub const DEFAULT_WRAP_WIDTH: usize = 72;

/// Collapses every whitespace run (newlines included) to one space and trims.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A subject is always a single line.
pub fn format_subject(text: &str) -> String {
    collapse_whitespace(text)
}

/// Collapses the paragraph to one line, then rewraps it at `width`.
pub fn format_paragraph(text: &str, width: usize) -> String {
    wrap(&collapse_whitespace(text), width)
}

/// Greedy wrap at `width` chars, breaking only at whitespace.
///
/// A word longer than `width` stays whole on its own line. A word starting
/// with `#` is kept on the same line as the word before it, so no output
/// line can start a comment.
pub fn wrap(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut line_len = 0usize;

    for unit in units(text) {
        let n = unit.chars().count();
        if line_len > 0 {
            if line_len + 1 + n <= width {
                out.push(' ');
                line_len += 1;
            } else {
                out.push('\n');
                line_len = 0;
            }
        }
        out.push_str(&unit);
        line_len += n;
    }

    out
}

/// Splits into unbreakable units: words, with `#` words glued to their predecessor.
fn units(text: &str) -> Vec<String> {
    let mut units: Vec<String> = Vec::new();
    for word in text.split_whitespace() {
        match units.last_mut() {
            Some(last) if word.starts_with('#') => {
                last.push(' ');
                last.push_str(word);
            }
            _ => units.push(word.to_string()),
        }
    }
    units
}
