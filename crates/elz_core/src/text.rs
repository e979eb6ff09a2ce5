//! Source spans.
//!
//! Declaration-level events carry the span of their declaration so that
//! semantic errors can point back at the unit's source.

use std::fmt;

/// Byte offset into the source text of a translation unit.
pub type TextPos = u32;

/// `length` bytes starting at `start`.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct TextSpan {
    pub start: TextPos,
    pub length: TextPos,
}

impl TextSpan {
    pub const fn new(start: TextPos, length: TextPos) -> Self {
        Self { start, length }
    }

    /// Exclusive end offset.
    pub fn end(self) -> TextPos {
        self.start.saturating_add(self.length)
    }
}

impl fmt::Debug for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end())
    }
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.start, self.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_end() {
        let span = TextSpan::new(18, 6);
        assert_eq!(span.end(), 24);
    }

    #[test]
    fn test_default_span() {
        let span = TextSpan::default();
        assert_eq!(span.length, 0);
        assert_eq!(format!("{:?}", span), "0..0");
        assert_eq!(format!("{}", TextSpan::new(4, 3)), "4+3");
    }

    #[test]
    fn test_end_saturates() {
        assert_eq!(TextSpan::new(TextPos::MAX, 4).end(), TextPos::MAX);
    }
}
