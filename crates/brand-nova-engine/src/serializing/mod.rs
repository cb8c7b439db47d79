//! # HTML Export
//!
//! Renders a node tree to an HTML string for export and preview.
//!
//! Serialization only reads the tree. It is total: element types without a
//! dedicated rendering (including [`ElementType::Unknown`](crate::models::ElementType::Unknown))
//! are wrapped in a paragraph.
//!
//! ## Modules
//!
//! - **`html`**: Tag mapping, mark wrapping and table rendering

pub mod html;

pub use html::{serialize, serialize_elements};
