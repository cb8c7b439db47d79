use log::debug;

use crate::parsing::blocks::kinds::ListMarker;
use crate::parsing::{ParseOptions, parse_with_options};

use super::NodeInserter;

/// Substrings that make a paste worth parsing.
const MARKUP_HINTS: [&str; 9] = ["#", "*", "`", "> ", "- ", "---", "___", "~~", "|"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasteOutcome {
    /// The text was parsed and this many blocks were inserted.
    Inserted(usize),
    /// Nothing was inserted; the host should run its default paste.
    PassThrough,
}

/// Cheap check for lightweight markup anywhere in `text`. False positives
/// are harmless since parsing degrades to paragraphs.
pub fn looks_like_markdown(text: &str) -> bool {
    MARKUP_HINTS.iter().any(|h| text.contains(h)) || ListMarker::any_ordered_line(text)
}

/// Parses pasted `text` into blocks and inserts them into `target` when it
/// looks like markup.
pub fn handle_paste<T: NodeInserter + ?Sized>(
    target: &mut T,
    text: &str,
    options: &ParseOptions,
) -> PasteOutcome {
    if !looks_like_markdown(text) {
        debug!("paste has no markup, passing through");
        return PasteOutcome::PassThrough;
    }
    let blocks = parse_with_options(text, options);
    let count = blocks.len();
    target.insert_nodes(blocks);
    PasteOutcome::Inserted(count)
}
