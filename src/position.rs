/// Position in a text file (line and column numbers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Position {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed, in bytes)
    pub column: usize,
}

/// Byte span in a text file
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Span {
    /// Starting byte offset
    pub byte_start: usize,
    /// Ending byte offset (exclusive)
    pub byte_end: usize,
}

impl Span {
    /// Slice `text` by this span.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.byte_start..self.byte_end]
    }
}

impl From<regex::Match<'_>> for Span {
    fn from(m: regex::Match<'_>) -> Self {
        Span {
            byte_start: m.start(),
            byte_end: m.end(),
        }
    }
}

/// Convert a byte offset to line and column position
///
/// Lines are split on `\n` only, so a `\r` before a newline counts as a column.
/// An offset past the end of `content` is clamped to the end.
pub fn byte_to_position(content: &str, byte_offset: usize) -> Position {
    let offset = byte_offset.min(content.len());
    let before = &content.as_bytes()[..offset];

    let line = before.iter().filter(|&&b| b == b'\n').count() + 1;
    let line_start = before
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |i| i + 1);

    Position {
        line,
        column: offset - line_start + 1,
    }
}

/// Convert a byte span to start and end positions
pub fn span_to_positions(content: &str, span: Span) -> (Position, Position) {
    let start = byte_to_position(content, span.byte_start);
    let end = byte_to_position(content, span.byte_end);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_to_position_start() {
        let pos = byte_to_position("12.5,\n3.25", 0);

        assert_eq!(pos, Position { line: 1, column: 1 });
    }

    #[test]
    fn test_byte_to_position_after_newline() {
        // '1'=0 '2'=1 '.'=2 '5'=3 ','=4 '\n'=5 '3'=6
        let pos = byte_to_position("12.5,\n3.25", 6);

        assert_eq!(pos, Position { line: 2, column: 1 });
    }

    #[test]
    fn test_byte_to_position_on_newline() {
        let pos = byte_to_position("12.5,\n3.25", 5);

        assert_eq!(pos, Position { line: 1, column: 6 });
    }

    #[test]
    fn test_byte_to_position_blank_lines() {
        let content = "a\n\n\nb";
        let pos = byte_to_position(content, 4);

        assert_eq!(pos, Position { line: 4, column: 1 });
    }

    #[test]
    fn test_span_to_positions() {
        let content = "[\n  12.5,\n  3.25\n]";
        let span = Span {
            byte_start: 4,
            byte_end: 16,
        };

        let (start, end) = span_to_positions(content, span);

        assert_eq!(start, Position { line: 2, column: 3 });
        assert_eq!(end, Position { line: 3, column: 7 });
        assert_eq!(span.slice(content), "12.5,\n  3.25");
    }

    #[test]
    fn test_byte_to_position_past_end_is_clamped() {
        let pos = byte_to_position("ab\ncd", 50);

        assert_eq!(pos, Position { line: 2, column: 3 });
    }
}
