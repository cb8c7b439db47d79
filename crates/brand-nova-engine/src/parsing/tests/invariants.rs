use crate::models::{Element, ElementType, Node};

/// Validates parser output invariants.
///
/// Asserts that:
/// - The document has at least one element
/// - Top-level elements are blocks (never links, cells or rows)
/// - Every element has at least one child
/// - Void elements hold exactly one unmarked text leaf
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(blocks: &[Element]) {
    assert!(!blocks.is_empty(), "parser returned no elements");
    for b in blocks {
        assert!(
            !matches!(
                b.kind,
                ElementType::Link
                    | ElementType::TableCell
                    | ElementType::TableRow
                    | ElementType::TableHeader
            ),
            "inline or table-internal element at top level: {}",
            b.kind
        );
        check_element(b);
    }
}

fn check_element(el: &Element) {
    assert!(!el.children.is_empty(), "{} has no children", el.kind);
    if el.kind.is_void() {
        assert_eq!(el.children.len(), 1, "void {} must hold one leaf", el.kind);
        let leaf = el.children[0]
            .as_text()
            .unwrap_or_else(|| panic!("void {} child must be text", el.kind));
        assert!(leaf.marks.is_empty(), "void {} leaf carries marks", el.kind);
    }
    for child in &el.children {
        if let Node::Element(e) = child {
            check_element(e);
        }
    }
}
