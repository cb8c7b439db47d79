use log::{debug, trace};

use crate::models::{Element, ElementType, Node};
use crate::parsing::inline::parse_inline;
use crate::parsing::options::{ParseOptions, TableDetection, UnclosedFence};

use super::{
    classify::{LineClass, LineMarker},
    kinds::{CodeFence, Table},
};

/// Multi-line construct currently being accumulated.
#[derive(Debug)]
enum LeafState<'a> {
    None,
    Fence {
        language: String,
        lines: Vec<&'a str>,
    },
    Quote {
        lines: Vec<&'a str>,
    },
    Table {
        header: Vec<&'a str>,
        rows: Vec<Vec<&'a str>>,
        /// The line right after the header may be a separator to skip.
        expect_separator: bool,
    },
}

pub struct BlockBuilder<'a> {
    options: ParseOptions,
    leaf: LeafState<'a>,
    out: Vec<Element>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new(options: ParseOptions) -> Self {
        Self {
            options,
            leaf: LeafState::None,
            out: vec![],
        }
    }

    /// Feeds one classified line. `next` is the following line, if any, and
    /// is only looked at to decide whether a pipe line opens a table.
    pub fn push(&mut self, c: &LineClass<'a>, next: Option<&LineClass<'a>>) {
        match self.leaf {
            LeafState::Fence { .. } => {
                self.consume_fence_line(c);
                return;
            }
            LeafState::Table { .. } => {
                if self.consume_table_line(c) {
                    return;
                }
            }
            LeafState::Quote { .. } => {
                if self.consume_quote_line(c) {
                    return;
                }
            }
            LeafState::None => {}
        }

        self.open_block(c, next);
    }

    pub fn finish(mut self) -> Vec<Element> {
        // EOF flush
        self.flush_quote();
        self.flush_table();
        self.finish_open_fence();
        if self.out.is_empty() {
            self.out.push(Element::empty_paragraph());
        }
        self.out
    }

    fn emit(&mut self, el: Element) {
        trace!("emit {}", el.kind);
        self.out.push(el);
    }

    fn open_block(&mut self, c: &LineClass<'a>, next: Option<&LineClass<'a>>) {
        // Precedence: fence beats everything else, then tables.
        if let Some(sig) = &c.fence_sig {
            self.leaf = LeafState::Fence {
                language: CodeFence::language(sig).to_string(),
                lines: vec![],
            };
            return;
        }

        if c.has_pipe && next.is_some_and(|n| self.continues_table(n)) {
            self.leaf = LeafState::Table {
                header: Table::split_cells(c.text),
                rows: vec![],
                expect_separator: true,
            };
            return;
        }

        let el = match &c.marker {
            Some(LineMarker::CheckListItem { checked, text }) => {
                Element::check_list_item(*checked, parse_inline(text))
            }
            Some(LineMarker::ThematicBreak) => Element::horizontal_rule(),
            Some(LineMarker::Heading { level, text }) => {
                let kind = ElementType::heading(*level).unwrap_or(ElementType::Paragraph);
                Element::new(kind, parse_inline(text))
            }
            Some(LineMarker::Quote { text }) => {
                self.leaf = LeafState::Quote { lines: vec![*text] };
                return;
            }
            Some(LineMarker::ListItem { text }) => {
                Element::new(ElementType::ListItem, parse_inline(text))
            }
            None if c.is_blank => Element::empty_paragraph(),
            None => Element::paragraph(parse_inline(c.text)),
        };
        self.emit(el);
    }

    fn continues_table(&self, next: &LineClass<'_>) -> bool {
        match self.options.table_detection {
            TableDetection::Separator => next.is_table_separator,
            TableDetection::AnyPipe => next.has_pipe,
        }
    }

    fn consume_fence_line(&mut self, c: &LineClass<'a>) {
        // Any backtick fence line closes, whatever follows the backticks.
        if c.fence_sig.is_some() {
            self.flush_fence();
            return;
        }
        if let LeafState::Fence { lines, .. } = &mut self.leaf {
            lines.push(c.text);
        }
    }

    /// Returns false, after closing the table, when `c` is not a table line.
    fn consume_table_line(&mut self, c: &LineClass<'a>) -> bool {
        let LeafState::Table {
            rows,
            expect_separator,
            ..
        } = &mut self.leaf
        else {
            return false;
        };

        if std::mem::take(expect_separator) && c.is_table_separator {
            debug!("skipping table separator row");
            return true;
        }
        if c.has_pipe {
            let cells = Table::split_cells(c.text);
            if !cells.is_empty() {
                rows.push(cells);
            }
            return true;
        }

        self.flush_table();
        false
    }

    /// Returns false, after closing the quote, when `c` is not a quote line.
    fn consume_quote_line(&mut self, c: &LineClass<'a>) -> bool {
        if let (LeafState::Quote { lines }, Some(LineMarker::Quote { text })) =
            (&mut self.leaf, &c.marker)
        {
            lines.push(*text);
            return true;
        }
        self.flush_quote();
        false
    }

    fn flush_quote(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Quote { lines } = prev {
            let text = lines.join("\n");
            self.emit(Element::new(ElementType::BlockQuote, parse_inline(&text)));
        } else {
            self.leaf = prev; // put back any other leaf
        }
    }

    fn flush_table(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Table { header, rows, .. } = prev {
            let mut children = Vec::with_capacity(rows.len() + 1);
            children.push(table_line(ElementType::TableHeader, &header));
            children.extend(rows.iter().map(|r| table_line(ElementType::TableRow, r)));
            debug!("table with {} data rows", rows.len());
            self.emit(Element::new(ElementType::Table, children));
        } else {
            self.leaf = prev;
        }
    }

    fn flush_fence(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        let LeafState::Fence { language, lines } = prev else {
            self.leaf = prev;
            return;
        };
        self.emit(Element::code_block(language, lines.join("\n")));
    }

    /// Flushes or drops a fence still open at EOF.
    fn finish_open_fence(&mut self) {
        if let LeafState::Fence { lines, .. } = &self.leaf
            && self.options.unclosed_fence == UnclosedFence::Drop
        {
            debug!("dropping unterminated code fence ({} lines)", lines.len());
            self.leaf = LeafState::None;
            return;
        }
        self.flush_fence();
    }
}

/// A header or data row of cells. A row never has zero children.
fn table_line(kind: ElementType, cells: &[&str]) -> Node {
    let mut children: Vec<Node> = cells
        .iter()
        .map(|cell| Element::new(ElementType::TableCell, parse_inline(cell)).into())
        .collect();
    if children.is_empty() {
        children.push(Element::new(ElementType::TableCell, vec![Node::text("")]).into());
    }
    Element::new(kind, children).into()
}

impl Default for BlockBuilder<'_> {
    fn default() -> Self {
        Self::new(ParseOptions::default())
    }
}
