use std::fmt;
use std::ops::Range;

//===========================================================================//

/// A span of byte offsets within a source file.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SrcSpan {
    start: usize,
    end: usize,
}

impl SrcSpan {
    /// Constructs a span from the given the byte range.
    pub fn from_byte_range(range: Range<usize>) -> SrcSpan {
        debug_assert!(range.start <= range.end);
        SrcSpan { start: range.start, end: range.end.max(range.start) }
    }

    /// Returns the byte range represented by this span.
    pub fn byte_range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Merges two spans, returning the smallest span that covers both.
    pub fn merged_with(&self, other: SrcSpan) -> SrcSpan {
        SrcSpan {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub(crate) fn end_span(&self) -> SrcSpan {
        SrcSpan { start: self.end, end: self.end }
    }

    /// Returns the 1-based line and column of the start of this span within
    /// `source`.
    pub fn line_and_column(&self, source: &str) -> (usize, usize) {
        let before = &source.as_bytes()[..self.start.min(source.len())];
        let line = 1 + before.iter().filter(|&&byte| byte == b'\n').count();
        let line_start = before
            .iter()
            .rposition(|&byte| byte == b'\n')
            .map_or(0, |index| index + 1);
        (line, 1 + self.start - line_start)
    }
}

//===========================================================================//

/// A specialized `Result` type for parsing operations.
pub type ParseResult<V> = Result<V, Vec<ParseError>>;

//===========================================================================//

/// An error encountered while parsing a source file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseError {
    /// The location in the file where the error occurred.
    pub span: SrcSpan,
    /// The error message to report to the user.
    pub message: String,
}

impl ParseError {
    /// Constructs a parse error with the given span and message.
    pub fn new(span: SrcSpan, message: String) -> ParseError {
        ParseError { span, message }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::SrcSpan;

    #[test]
    fn merge_spans() {
        let a = SrcSpan::from_byte_range(2..5);
        let b = SrcSpan::from_byte_range(8..9);
        assert_eq!(a.merged_with(b).byte_range(), 2..9);
        assert_eq!(b.merged_with(a).byte_range(), 2..9);
        assert_eq!(a.end_span().byte_range(), 5..5);
    }

    #[test]
    fn line_and_column() {
        let source = "ENTRY $F000\nGFX $FE00\n";
        assert_eq!(
            SrcSpan::from_byte_range(0..5).line_and_column(source),
            (1, 1)
        );
        assert_eq!(
            SrcSpan::from_byte_range(16..21).line_and_column(source),
            (2, 5)
        );
    }
}

//===========================================================================//
