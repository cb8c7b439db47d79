pub mod marks;
pub mod node;

pub use marks::{Mark, Marks};
pub use node::{Align, Element, ElementType, Node, TextNode};
