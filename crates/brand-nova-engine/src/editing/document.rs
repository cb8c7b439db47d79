use crate::models::Element;
use crate::parsing::{ParseOptions, parse_with_options};
use crate::serializing::serialize_elements;
use crate::stats::ContentStats;

use super::NodeInserter;

/// A flat sequence of top-level blocks with an insertion cursor.
///
/// The cursor is a block index in `0..=len`: inserted blocks land before the
/// block it points at, and the cursor then moves past them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    blocks: Vec<Element>,
    cursor: usize,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// A document holding `blocks`, cursor at the end.
    pub fn from_blocks(blocks: Vec<Element>) -> Self {
        let cursor = blocks.len();
        Self { blocks, cursor }
    }

    pub fn from_markdown(raw: &str, options: &ParseOptions) -> Self {
        Self::from_blocks(parse_with_options(raw, options))
    }

    pub fn blocks(&self) -> &[Element] {
        &self.blocks
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Moves the cursor, clamped to the end of the document.
    pub fn set_cursor(&mut self, index: usize) {
        self.cursor = index.min(self.blocks.len());
    }

    pub fn stats(&self) -> ContentStats {
        ContentStats::from_elements(&self.blocks)
    }

    pub fn to_html(&self) -> String {
        serialize_elements(&self.blocks)
    }
}

impl NodeInserter for Document {
    fn insert_nodes(&mut self, nodes: Vec<Element>) {
        let n = nodes.len();
        self.blocks.splice(self.cursor..self.cursor, nodes);
        self.cursor += n;
    }
}
