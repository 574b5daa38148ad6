use xi_rope::Rope;

use super::span::Span;

/// A reference to a single line in the rope with its index and byte span.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Zero-based line number.
    pub index: usize,
    /// Byte span of this line in the rope (includes newline if present).
    pub span: Span,
    /// The raw line text, terminator included.
    pub text: String,
}

impl LineRef {
    /// The line text without its `\n` or `\r\n` terminator.
    pub fn content(&self) -> &str {
        self.text.trim_end_matches(['\r', '\n'])
    }

    /// Byte span of [`LineRef::content`], i.e. the line minus its terminator.
    pub fn content_span(&self) -> Span {
        Span {
            start: self.span.start,
            end: self.span.start + self.content().len(),
        }
    }
}

/// Returns an iterator over lines with their indices and byte spans.
///
/// Uses `lines_raw` to preserve newline characters so spans tile the rope
/// exactly. A final newline does not produce an extra empty line.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).enumerate().map(move |(index, line)| {
        let start = offset;
        offset += line.len();
        LineRef {
            index,
            span: Span { start, end: offset },
            text: line.into_owned(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_tile_the_rope() {
        let rope = Rope::from("Subject\n\nBody line\n");
        let lines: Vec<_> = lines_with_spans(&rope).collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].span, Span { start: 0, end: 8 });
        assert_eq!(lines[1].span, Span { start: 8, end: 9 });
        assert_eq!(lines[2].span, Span { start: 9, end: 19 });
        assert_eq!(lines[2].index, 2);
    }

    #[test]
    fn content_strips_terminators() {
        let rope = Rope::from("crlf line\r\nlast");
        let lines: Vec<_> = lines_with_spans(&rope).collect();

        assert_eq!(lines[0].content(), "crlf line");
        assert_eq!(lines[0].content_span(), Span { start: 0, end: 9 });
        assert_eq!(lines[1].content(), "last");
        assert_eq!(lines[1].content_span(), Span { start: 11, end: 15 });
    }

    #[test]
    fn empty_rope_has_no_lines() {
        let rope = Rope::from("");
        assert_eq!(lines_with_spans(&rope).count(), 0);
    }
}
