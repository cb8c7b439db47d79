use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::models::{Element, ElementType, Node, TextNode};
use crate::parsing::blocks::kinds::CodeFence;

/// Serializes a node sequence to HTML. Nodes are joined with no separator.
pub fn serialize(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(&mut out, node);
    }
    out
}

/// Serializes top-level blocks, such as the output of
/// [`parse`](crate::parsing::parse).
pub fn serialize_elements(blocks: &[Element]) -> String {
    let mut out = String::new();
    for block in blocks {
        write_element(&mut out, block);
    }
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Text(t) => write_text(out, t),
        Node::Element(e) => write_element(out, e),
    }
}

fn write_children(out: &mut String, children: &[Node]) {
    for child in children {
        write_node(out, child);
    }
}

/// Escaped text wrapped by its marks, the first mark in
/// [`Mark::ORDER`](crate::models::Mark::ORDER) innermost.
fn write_text(out: &mut String, t: &TextNode) {
    let marks: Vec<_> = t.marks.iter_active().collect();
    for mark in marks.iter().rev() {
        let _ = write!(out, "<{}>", mark.html_tag());
    }
    out.push_str(&encode_text(&t.text));
    for mark in &marks {
        let _ = write!(out, "</{}>", mark.html_tag());
    }
}

fn write_element(out: &mut String, el: &Element) {
    match el.kind {
        ElementType::HorizontalRule => out.push_str("<hr>"),
        ElementType::CodeBlock => {
            let language = el.language.as_deref().unwrap_or(CodeFence::DEFAULT_LANGUAGE);
            open_tag(out, "pre", el);
            let _ = write!(
                out,
                "<code class=\"language-{}\">",
                encode_double_quoted_attribute(language)
            );
            out.push_str(&encode_text(&el.plain_text()));
            out.push_str("</code></pre>");
        }
        ElementType::TableHeader => {
            out.push_str("<thead><tr>");
            write_cells(out, "th", &el.children);
            out.push_str("</tr></thead>");
        }
        ElementType::TableRow => {
            open_tag(out, "tr", el);
            write_cells(out, "td", &el.children);
            out.push_str("</tr>");
        }
        ElementType::Link => {
            let url = el.url.as_deref().unwrap_or_default();
            let _ = write!(out, "<a href=\"{}\">", encode_double_quoted_attribute(url));
            write_children(out, &el.children);
            out.push_str("</a>");
        }
        ElementType::CheckListItem => {
            open_tag_with(out, "li", el, " class=\"check-list-item\"");
            out.push_str("<input type=\"checkbox\" disabled");
            if el.checked.unwrap_or(false) {
                out.push_str(" checked");
            }
            out.push_str("> ");
            write_children(out, &el.children);
            out.push_str("</li>");
        }
        kind => {
            let tag = block_tag(kind);
            open_tag(out, tag, el);
            write_children(out, &el.children);
            let _ = write!(out, "</{tag}>");
        }
    }
}

/// Tag for element types rendered as one plain wrapping tag.
fn block_tag(kind: ElementType) -> &'static str {
    match kind {
        ElementType::HeadingOne => "h1",
        ElementType::HeadingTwo => "h2",
        ElementType::HeadingThree => "h3",
        ElementType::BlockQuote => "blockquote",
        ElementType::BulletedList => "ul",
        ElementType::NumberedList => "ol",
        ElementType::ListItem => "li",
        ElementType::Table => "table",
        ElementType::TableCell => "td",
        _ => "p",
    }
}

/// Header and row cells are written directly so that the cell tag depends
/// on the row kind, not on the cell node.
fn write_cells(out: &mut String, tag: &str, cells: &[Node]) {
    for cell in cells {
        let _ = write!(out, "<{tag}>");
        match cell {
            Node::Element(e) if e.kind == ElementType::TableCell => {
                write_children(out, &e.children);
            }
            other => write_node(out, other),
        }
        let _ = write!(out, "</{tag}>");
    }
}

fn open_tag(out: &mut String, tag: &str, el: &Element) {
    open_tag_with(out, tag, el, "");
}

fn open_tag_with(out: &mut String, tag: &str, el: &Element, attrs: &str) {
    let _ = write!(out, "<{tag}{attrs}");
    if let Some(align) = el.align {
        let _ = write!(out, " style=\"text-align:{}\"", align.as_str());
    }
    out.push('>');
}
