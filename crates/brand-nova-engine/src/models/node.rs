//! The document node vocabulary shared by the parser, the serializer and the
//! host editing surface.
//!
//! Nodes serialize to the JSON shape the host framework stores:
//!
//! ```json
//! [{ "type": "paragraph", "children": [{ "text": "hi", "bold": true }] }]
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::marks::Marks;

/// The closed set of element types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementType {
    Paragraph,
    HeadingOne,
    HeadingTwo,
    HeadingThree,
    BlockQuote,
    BulletedList,
    NumberedList,
    ListItem,
    CodeBlock,
    HorizontalRule,
    Table,
    TableHeader,
    TableRow,
    TableCell,
    CheckListItem,
    Link,
    /// Any type name this crate does not know. Rendered as a paragraph.
    #[serde(other)]
    Unknown,
}

impl ElementType {
    pub fn as_str(self) -> &'static str {
        match self {
            ElementType::Paragraph => "paragraph",
            ElementType::HeadingOne => "heading-one",
            ElementType::HeadingTwo => "heading-two",
            ElementType::HeadingThree => "heading-three",
            ElementType::BlockQuote => "block-quote",
            ElementType::BulletedList => "bulleted-list",
            ElementType::NumberedList => "numbered-list",
            ElementType::ListItem => "list-item",
            ElementType::CodeBlock => "code-block",
            ElementType::HorizontalRule => "horizontal-rule",
            ElementType::Table => "table",
            ElementType::TableHeader => "table-header",
            ElementType::TableRow => "table-row",
            ElementType::TableCell => "table-cell",
            ElementType::CheckListItem => "check-list-item",
            ElementType::Link => "link",
            ElementType::Unknown => "unknown",
        }
    }

    /// Void elements hold a single raw placeholder leaf that is never
    /// inline-parsed.
    #[must_use]
    pub fn is_void(self) -> bool {
        matches!(self, ElementType::HorizontalRule | ElementType::CodeBlock)
    }

    /// Heading type for a `#` count, if that level exists.
    pub fn heading(level: usize) -> Option<Self> {
        match level {
            1 => Some(ElementType::HeadingOne),
            2 => Some(ElementType::HeadingTwo),
            3 => Some(ElementType::HeadingThree),
            _ => None,
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Block alignment set from the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
    Justify,
}

impl Align {
    pub fn as_str(self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
            Align::Justify => "justify",
        }
    }
}

/// A leaf text run with its marks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextNode {
    pub text: String,
    #[serde(flatten)]
    pub marks: Marks,
}

impl TextNode {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marks: Marks::default(),
        }
    }

    pub fn with_marks(text: impl Into<String>, marks: Marks) -> Self {
        Self {
            text: text.into(),
            marks,
        }
    }
}

/// A structural node with an ordered, non-empty list of children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    #[serde(rename = "type")]
    pub kind: ElementType,
    pub children: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
    /// Code blocks only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Links only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Checklist items only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
}

impl Element {
    pub fn new(kind: ElementType, children: Vec<Node>) -> Self {
        Self {
            kind,
            children,
            align: None,
            language: None,
            url: None,
            checked: None,
        }
    }

    pub fn paragraph(children: Vec<Node>) -> Self {
        Self::new(ElementType::Paragraph, children)
    }

    /// A paragraph holding one empty text run. Used for blank lines and
    /// empty documents so that `children` is never empty.
    pub fn empty_paragraph() -> Self {
        Self::paragraph(vec![Node::text("")])
    }

    pub fn code_block(language: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            language: Some(language.into()),
            ..Self::new(ElementType::CodeBlock, vec![Node::text(content)])
        }
    }

    pub fn horizontal_rule() -> Self {
        Self::new(ElementType::HorizontalRule, vec![Node::text("")])
    }

    pub fn link(url: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::new(ElementType::Link, children)
        }
    }

    pub fn check_list_item(checked: bool, children: Vec<Node>) -> Self {
        Self {
            checked: Some(checked),
            ..Self::new(ElementType::CheckListItem, children)
        }
    }

    #[must_use]
    pub fn with_align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    /// Concatenated text of every descendant leaf.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(t) => out.push_str(&t.text),
                Node::Element(e) => e.collect_text(out),
            }
        }
    }
}

/// Either kind of document node.
///
/// Untagged: an object with a `type` is an element, otherwise it is text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Element(Element),
    Text(TextNode),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(TextNode::plain(text))
    }

    pub fn marked(text: impl Into<String>, marks: Marks) -> Self {
        Node::Text(TextNode::with_marks(text, marks))
    }

    pub fn as_text(&self) -> Option<&TextNode> {
        match self {
            Node::Text(t) => Some(t),
            Node::Element(_) => None,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        }
    }

    pub fn plain_text(&self) -> String {
        match self {
            Node::Text(t) => t.text.clone(),
            Node::Element(e) => e.plain_text(),
        }
    }
}

impl From<Element> for Node {
    fn from(e: Element) -> Self {
        Node::Element(e)
    }
}

impl From<TextNode> for Node {
    fn from(t: TextNode) -> Self {
        Node::Text(t)
    }
}
