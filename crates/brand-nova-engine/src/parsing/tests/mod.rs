//! Scenario tests for paste parsing.

mod invariants;

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::models::{Element, ElementType, Mark, Marks, Node};
use crate::parsing::{ParseOptions, TableDetection, UnclosedFence, parse, parse_with_options};

fn parse_checked(raw: &str) -> Vec<Element> {
    let blocks = parse(raw);
    invariants::check(&blocks);
    blocks
}

fn cell_texts(row: &Node) -> Vec<String> {
    row.as_element()
        .expect("row is an element")
        .children
        .iter()
        .map(Node::plain_text)
        .collect()
}

#[test]
fn empty_input_is_one_empty_paragraph() {
    assert_eq!(parse_checked(""), vec![Element::empty_paragraph()]);
}

#[test]
fn heading_one_has_plain_title() {
    let blocks = parse_checked("# Title");
    assert_eq!(
        blocks,
        vec![Element::new(ElementType::HeadingOne, vec![Node::text("Title")])]
    );
}

#[rstest]
#[case("# a", ElementType::HeadingOne)]
#[case("## a", ElementType::HeadingTwo)]
#[case("### a", ElementType::HeadingThree)]
#[case("#### a", ElementType::Paragraph)]
#[case("#a", ElementType::Paragraph)]
#[case("> a", ElementType::BlockQuote)]
#[case("- a", ElementType::ListItem)]
#[case("* a", ElementType::ListItem)]
#[case("12. a", ElementType::ListItem)]
#[case("- [ ] a", ElementType::CheckListItem)]
#[case("---", ElementType::HorizontalRule)]
#[case("***", ElementType::HorizontalRule)]
#[case("___", ElementType::HorizontalRule)]
#[case("just words", ElementType::Paragraph)]
fn single_line_block_kinds(#[case] raw: &str, #[case] kind: ElementType) {
    let blocks = parse_checked(raw);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].kind, kind);
}

#[test]
fn paragraph_with_bold_and_italic() {
    let blocks = parse_checked("**bold** and *italic*");
    assert_eq!(
        blocks[0].children,
        vec![
            Node::marked("bold", Marks::of(&[Mark::Bold])),
            Node::text(" and "),
            Node::marked("italic", Marks::of(&[Mark::Italic])),
        ]
    );
}

#[test]
fn triple_star_is_a_single_bold_italic_run() {
    let blocks = parse_checked("***both***");
    assert_eq!(
        blocks[0].children,
        vec![Node::marked("both", Marks::of(&[Mark::Bold, Mark::Italic]))]
    );
}

#[test]
fn unterminated_bold_stays_literal() {
    let blocks = parse_checked("**unclosed");
    assert_eq!(blocks[0].children, vec![Node::text("**unclosed")]);
}

#[test]
fn headings_and_list_items_are_inline_formatted() {
    let blocks = parse_checked("## A `b`\n1. *c*");
    assert_eq!(
        blocks[0].children,
        vec![Node::text("A "), Node::marked("b", Marks::of(&[Mark::Code]))]
    );
    assert_eq!(
        blocks[1].children,
        vec![Node::marked("c", Marks::of(&[Mark::Italic]))]
    );
}

#[test]
fn list_items_are_siblings_not_wrapped() {
    let blocks = parse_checked("- one\n- two\n1. three");
    let kinds: Vec<_> = blocks.iter().map(|b| b.kind).collect();
    assert_eq!(kinds, vec![ElementType::ListItem; 3]);
}

#[test]
fn checklist_items() {
    let blocks = parse_checked("- [x] Done\n- [ ] Todo");
    assert_eq!(
        blocks,
        vec![
            Element::check_list_item(true, vec![Node::text("Done")]),
            Element::check_list_item(false, vec![Node::text("Todo")]),
        ]
    );
}

#[test]
fn blank_lines_keep_vertical_spacing() {
    let blocks = parse_checked("a\n\nb\n");
    assert_eq!(
        blocks,
        vec![
            Element::paragraph(vec![Node::text("a")]),
            Element::empty_paragraph(),
            Element::paragraph(vec![Node::text("b")]),
            Element::empty_paragraph(),
        ]
    );
}

#[test]
fn crlf_input_is_handled_like_lf() {
    assert_eq!(parse_checked("# T\r\ntext\r"), parse_checked("# T\ntext"));
}

// Fenced code

#[test]
fn fenced_code_block_is_raw() {
    let blocks = parse_checked("```rust\nlet x = **y**;\n\n# not a heading\n```\nafter");
    assert_eq!(
        blocks,
        vec![
            Element::code_block("rust", "let x = **y**;\n\n# not a heading"),
            Element::paragraph(vec![Node::text("after")]),
        ]
    );
}

#[test]
fn fence_without_language_defaults_to_text() {
    let blocks = parse_checked("```\ncode\n```");
    assert_eq!(blocks, vec![Element::code_block("text", "code")]);
}

#[test]
fn empty_fence_has_empty_content() {
    let blocks = parse_checked("```\n```");
    assert_eq!(blocks, vec![Element::code_block("text", "")]);
}

#[test]
fn unclosed_fence_is_flushed_by_default() {
    let blocks = parse_checked("intro\n```py\nprint(1)");
    assert_eq!(
        blocks,
        vec![
            Element::paragraph(vec![Node::text("intro")]),
            Element::code_block("py", "print(1)"),
        ]
    );
}

#[test]
fn unclosed_fence_can_be_dropped() {
    let options = ParseOptions {
        unclosed_fence: UnclosedFence::Drop,
        ..ParseOptions::default()
    };
    let blocks = parse_with_options("intro\n```py\nprint(1)", &options);
    assert_eq!(blocks, vec![Element::paragraph(vec![Node::text("intro")])]);

    // Nothing left at all still yields one empty paragraph.
    let blocks = parse_with_options("```\nlost", &options);
    invariants::check(&blocks);
    assert_eq!(blocks, vec![Element::empty_paragraph()]);
}

// Block quotes

#[test]
fn consecutive_quote_lines_join_into_one_block() {
    let blocks = parse_checked("> first **line**\n> second\nafter");
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].kind, ElementType::BlockQuote);
    assert_eq!(
        blocks[0].children,
        vec![
            Node::text("first "),
            Node::marked("line", Marks::of(&[Mark::Bold])),
            Node::text("\nsecond"),
        ]
    );
    assert_eq!(blocks[1], Element::paragraph(vec![Node::text("after")]));
}

#[test]
fn bare_marker_continues_a_quote() {
    let blocks = parse_checked("> a\n>\n> b");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].plain_text(), "a\n\nb");
}

#[test]
fn quote_markers_do_not_span_lines() {
    let blocks = parse_checked("> **a\n> b**");
    assert_eq!(blocks[0].children, vec![Node::text("**a\nb**")]);
}

// Tables

#[test]
fn table_with_separator() {
    let blocks = parse_checked("| Col 1 | Col 2 |\n|-------|-------|\n| Data | More |");
    assert_eq!(blocks.len(), 1);
    let table = &blocks[0];
    assert_eq!(table.kind, ElementType::Table);
    assert_eq!(table.children.len(), 2);

    let header = table.children[0].as_element().unwrap();
    assert_eq!(header.kind, ElementType::TableHeader);
    assert_eq!(cell_texts(&table.children[0]), vec!["Col 1", "Col 2"]);

    let row = table.children[1].as_element().unwrap();
    assert_eq!(row.kind, ElementType::TableRow);
    assert_eq!(cell_texts(&table.children[1]), vec!["Data", "More"]);
}

#[test]
fn table_ends_at_first_line_without_pipe() {
    let blocks = parse_checked("a | b\n---|---\n1 | 2\n3 | 4\nafter");
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].children.len(), 3);
    assert_eq!(blocks[1], Element::paragraph(vec![Node::text("after")]));
}

#[test]
fn ragged_rows_are_preserved() {
    let blocks = parse_checked("| a | b |\n|---|---|\n| 1 |\n| 1 | 2 | 3 |");
    let table = &blocks[0];
    assert_eq!(cell_texts(&table.children[1]), vec!["1"]);
    assert_eq!(cell_texts(&table.children[2]), vec!["1", "2", "3"]);
}

#[test]
fn table_cells_are_inline_formatted() {
    let blocks = parse_checked("| **h** |\n|---|\n| `c` |");
    let header = blocks[0].children[0].as_element().unwrap();
    let cell = header.children[0].as_element().unwrap();
    assert_eq!(cell.kind, ElementType::TableCell);
    assert_eq!(cell.children, vec![Node::marked("h", Marks::of(&[Mark::Bold]))]);
}

#[test]
fn pipe_lines_without_separator_are_paragraphs() {
    let blocks = parse_checked("a | b\nc | d");
    let kinds: Vec<_> = blocks.iter().map(|b| b.kind).collect();
    assert_eq!(kinds, vec![ElementType::Paragraph, ElementType::Paragraph]);
    assert_eq!(blocks[0].plain_text(), "a | b");
}

#[test]
fn any_pipe_detection_accepts_tables_without_separator() {
    let options = ParseOptions {
        table_detection: TableDetection::AnyPipe,
        ..ParseOptions::default()
    };
    let blocks = parse_with_options("a | b\nc | d", &options);
    invariants::check(&blocks);
    assert_eq!(blocks.len(), 1);
    assert_eq!(cell_texts(&blocks[0].children[1]), vec!["c", "d"]);

    // A separator right after the header is still skipped.
    let blocks = parse_with_options("a | b\n|---|---|\nc | d", &options);
    assert_eq!(blocks[0].children.len(), 2);
}

#[test]
fn header_of_lone_pipe_gets_one_empty_cell() {
    let blocks = parse_checked("|\n|---|\n|\n| x |");
    let table = &blocks[0];
    assert_eq!(cell_texts(&table.children[0]), vec![""]);
    // The empty row is skipped.
    assert_eq!(table.children.len(), 2);
    assert_eq!(cell_texts(&table.children[1]), vec!["x"]);
}

#[test]
fn mixed_document() {
    let raw = "# Notes\n\nSee [the docs](https://docs.test).\n\n- [x] parse\n- write\n---\n> quote\n```sh\nls\n```";
    let blocks = parse_checked(raw);
    let kinds: Vec<_> = blocks.iter().map(|b| b.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ElementType::HeadingOne,
            ElementType::Paragraph,
            ElementType::Paragraph,
            ElementType::Paragraph,
            ElementType::CheckListItem,
            ElementType::ListItem,
            ElementType::HorizontalRule,
            ElementType::BlockQuote,
            ElementType::CodeBlock,
        ]
    );
    let link = blocks[2].children[1].as_element().unwrap();
    assert_eq!(link.kind, ElementType::Link);
    assert_eq!(link.url.as_deref(), Some("https://docs.test"));
}
