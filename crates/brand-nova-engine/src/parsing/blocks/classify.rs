use super::kinds::{
    BlockQuote, CheckList, CodeFence, FenceSig, Heading, ListMarker, Table, ThematicBreak,
};

/// A single-line block marker, recognized without any surrounding context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineMarker<'a> {
    CheckListItem { checked: bool, text: &'a str },
    ThematicBreak,
    Heading { level: usize, text: &'a str },
    Quote { text: &'a str },
    ListItem { text: &'a str },
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. Whether a pipe line starts a
/// table, or a fence line opens or closes one, is decided by the builder.
#[derive(Debug, Clone)]
pub struct LineClass<'a> {
    /// Line text with any trailing `\r` removed.
    pub text: &'a str,
    /// Whether the line is blank (whitespace only).
    pub is_blank: bool,
    /// If the line starts with a code fence.
    pub fence_sig: Option<FenceSig>,
    pub has_pipe: bool,
    /// If the line has the shape of a table header separator.
    pub is_table_separator: bool,
    /// First matching single-line marker, in precedence order.
    pub marker: Option<LineMarker<'a>>,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Marker precedence: checklist item, thematic break, heading, quote,
    /// list item. A checklist item is therefore never a plain list item, and
    /// `***` is a break rather than a `* ` bullet.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let text = line.strip_suffix('\r').unwrap_or(line);

        LineClass {
            text,
            is_blank: text.trim().is_empty(),
            fence_sig: CodeFence::sig(text),
            has_pipe: Table::has_pipe(text),
            is_table_separator: Table::is_separator(text),
            marker: Self::marker(text),
        }
    }

    fn marker(text: &str) -> Option<LineMarker<'_>> {
        if let Some((checked, text)) = CheckList::strip_marker(text) {
            return Some(LineMarker::CheckListItem { checked, text });
        }
        if ThematicBreak::matches(text) {
            return Some(LineMarker::ThematicBreak);
        }
        if let Some((level, text)) = Heading::strip_marker(text) {
            return Some(LineMarker::Heading { level, text });
        }
        if let Some(text) = BlockQuote::strip_prefix(text) {
            return Some(LineMarker::Quote { text });
        }
        ListMarker::strip_marker(text).map(|text| LineMarker::ListItem { text })
    }
}
