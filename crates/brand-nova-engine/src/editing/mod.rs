//! # Paste Handling
//!
//! The editing surface itself belongs to the host framework. This module
//! models the one seam the engine needs from it, "insert these blocks at the
//! cursor", as the [`NodeInserter`] trait, and decides when a paste should be
//! parsed as markup at all.
//!
//! ## Modules
//!
//! - **`paste`**: Markup detection and [`handle_paste`]
//! - **`document`**: An in-memory [`NodeInserter`] used by the CLI and tests

pub mod document;
pub mod paste;

pub use document::Document;
pub use paste::{PasteOutcome, handle_paste, looks_like_markdown};

use crate::models::Element;

/// The host framework's node insertion API.
pub trait NodeInserter {
    /// Inserts `nodes` at the current cursor position, in order.
    fn insert_nodes(&mut self, nodes: Vec<Element>);
}
