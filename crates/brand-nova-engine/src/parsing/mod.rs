//! # Markdown Paste Parsing
//!
//! Turns pasted plain text with lightweight markup into document elements.
//!
//! Parsing is line-oriented: the input is split on `\n`, every line is
//! classified on its own, and a [`BlockBuilder`] assembles blocks with one
//! line of lookahead. Inline formatting is resolved per block by
//! [`inline::parse_inline`].
//!
//! Parsing is total: anything unrecognized degrades to paragraphs of
//! literal text, and the result always holds at least one element.

pub mod blocks;
pub mod inline;
pub mod options;
pub mod span;

#[cfg(test)]
mod tests;

use log::debug;

use crate::models::Element;
use blocks::{BlockBuilder, LineClass, MarkdownLineClassifier};
pub use options::{ParseOptions, TableDetection, UnclosedFence};

/// Parses `raw` with default options.
pub fn parse(raw: &str) -> Vec<Element> {
    parse_with_options(raw, &ParseOptions::default())
}

pub fn parse_with_options(raw: &str, options: &ParseOptions) -> Vec<Element> {
    let classifier = MarkdownLineClassifier;
    let lines: Vec<LineClass<'_>> = raw.split('\n').map(|l| classifier.classify(l)).collect();

    let mut builder = BlockBuilder::new(*options);
    for (i, lc) in lines.iter().enumerate() {
        builder.push(lc, lines.get(i + 1));
    }

    let blocks = builder.finish();
    debug!("parsed {} lines into {} blocks", lines.len(), blocks.len());
    blocks
}
