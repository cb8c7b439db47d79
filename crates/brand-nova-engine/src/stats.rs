//! Word and character counts shown under the editor.

use serde::Serialize;

use crate::models::{Element, Node};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ContentStats {
    pub words: usize,
    pub characters: usize,
}

impl ContentStats {
    /// Counts over the text of every node, blocks joined with one space.
    pub fn from_nodes(nodes: &[Node]) -> Self {
        Self::from_text(&join(nodes.iter().map(Node::plain_text)))
    }

    pub fn from_elements(blocks: &[Element]) -> Self {
        Self::from_text(&join(blocks.iter().map(Element::plain_text)))
    }

    fn from_text(text: &str) -> Self {
        Self {
            words: text.split_whitespace().count(),
            characters: text.chars().count(),
        }
    }
}

fn join(texts: impl Iterator<Item = String>) -> String {
    texts.collect::<Vec<_>>().join(" ")
}
