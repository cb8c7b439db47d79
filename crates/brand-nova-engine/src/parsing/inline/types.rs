use crate::models::Marks;
use crate::parsing::span::Span;

/// A candidate inline construct found while scanning a block's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineMatch {
    /// Full span including delimiters.
    pub full: Span,
    pub kind: InlineKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineKind {
    /// A delimited run whose inner text carries `marks`.
    Marked {
        /// Content between the delimiters.
        inner: Span,
        marks: Marks,
    },
    /// `[label](url)`.
    Link { label: Span, url: Span },
}

/// One delimiter family in the precedence table.
#[derive(Debug, Clone, Copy)]
pub struct DelimiterRule {
    pub delim: &'static [u8],
    pub marks: Marks,
    /// Opener and closer must not touch another copy of the delimiter byte.
    pub isolated: bool,
}
