use crate::models::{Element, Mark, Marks, Node};
use crate::parsing::span::Span;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Link, Strikethrough},
    types::{DelimiterRule, InlineKind, InlineMatch},
};

/// Delimiter families in precedence order. Ties at the same start position
/// go to the earlier row.
fn rules() -> [DelimiterRule; 5] {
    [
        DelimiterRule {
            delim: Emphasis::STRONG_EM,
            marks: Marks::of(&[Mark::Bold, Mark::Italic]),
            isolated: false,
        },
        DelimiterRule {
            delim: Emphasis::STRONG,
            marks: Marks::of(&[Mark::Bold]),
            isolated: false,
        },
        DelimiterRule {
            delim: Emphasis::EM,
            marks: Marks::of(&[Mark::Italic]),
            isolated: true,
        },
        DelimiterRule {
            delim: Strikethrough::TILDES,
            marks: Marks::of(&[Mark::Strikethrough]),
            isolated: false,
        },
        DelimiterRule {
            delim: CodeSpan::TICK,
            marks: Marks::of(&[Mark::Code]),
            isolated: false,
        },
    ]
}

/// Parses the text of one block into text runs and link elements.
///
/// Never fails and never returns an empty vector: text without any
/// construct (including the empty string) comes back as one plain run.
pub fn parse_inline(s: &str) -> Vec<Node> {
    let mut accepted = find_links(s);

    let mut candidates: Vec<InlineMatch> = rules()
        .iter()
        .flat_map(|rule| find_delimited(s, rule))
        .collect();
    // Stable: equal starts keep precedence order.
    candidates.sort_by_key(|m| m.full.start);

    for cand in candidates {
        if !accepted.iter().any(|a| a.full.overlaps(cand.full)) {
            accepted.push(cand);
        }
    }
    accepted.sort_by_key(|m| m.full.start);

    let mut out = Vec::with_capacity(accepted.len() * 2 + 1);
    let mut text_start = 0;

    // Helper to flush a literal gap as plain text
    fn flush_text(out: &mut Vec<Node>, s: &str, start: usize, end: usize) {
        if end > start {
            out.push(Node::text(&s[start..end]));
        }
    }

    for m in accepted {
        flush_text(&mut out, s, text_start, m.full.start);
        text_start = m.full.end;
        out.push(match m.kind {
            InlineKind::Marked { inner, marks } => Node::marked(inner.slice(s), marks),
            InlineKind::Link { label, url } => {
                Element::link(url.slice(s), parse_inline(label.slice(s))).into()
            }
        });
    }
    flush_text(&mut out, s, text_start, s.len());

    if out.is_empty() {
        out.push(Node::text(""));
    }
    out
}

/// Scans for non-overlapping `[label](url)` links, left to right.
fn find_links(s: &str) -> Vec<InlineMatch> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    while !cur.eof() {
        if let Some(m) = try_parse_link(&mut cur) {
            out.push(m);
            continue;
        }
        cur.bump();
    }
    out
}

/// Scans for balanced pairs of one delimiter family, left to right. A
/// matched pair resumes scanning after its closer, like a global regex.
fn find_delimited(s: &str, rule: &DelimiterRule) -> Vec<InlineMatch> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    while !cur.eof() {
        if let Some(m) = try_parse_delimited(&mut cur, rule) {
            out.push(m);
            continue;
        }
        cur.bump();
    }
    out
}

fn at_delimiter(cur: &Cursor<'_>, rule: &DelimiterRule) -> bool {
    if rule.isolated {
        cur.starts_with_isolated(rule.delim)
    } else {
        cur.starts_with(rule.delim)
    }
}

/// Attempts a delimited span at the current position.
///
/// The content must be non-empty and stay on one line. On failure the
/// cursor is restored.
fn try_parse_delimited(cur: &mut Cursor<'_>, rule: &DelimiterRule) -> Option<InlineMatch> {
    if !at_delimiter(cur, rule) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(rule.delim.len());
    let inner_start = cur.pos();

    // At least one byte of content before a closer can match.
    match cur.bump() {
        None | Some(b'\n') => {
            *cur = saved;
            return None;
        }
        Some(_) => {}
    }

    while !cur.eof() {
        if cur.peek() == Some(b'\n') {
            break;
        }
        if at_delimiter(cur, rule) {
            let inner_end = cur.pos();
            cur.bump_n(rule.delim.len());
            return Some(InlineMatch {
                full: Span::new(start, cur.pos()),
                kind: InlineKind::Marked {
                    inner: Span::new(inner_start, inner_end),
                    marks: rule.marks,
                },
            });
        }
        cur.bump();
    }

    // Not closed, restore cursor
    *cur = saved;
    None
}

/// Attempts `[label](url)` at the current position.
///
/// The label may not contain `[`, `]` or a newline; the url may not contain
/// whitespace or `)`. Both must be non-empty. On failure the cursor is
/// restored.
fn try_parse_link(cur: &mut Cursor<'_>) -> Option<InlineMatch> {
    if cur.peek() != Some(Link::LABEL_OPEN) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump();
    let label_start = cur.pos();

    while let Some(b) = cur.peek() {
        if b == Link::LABEL_CLOSE || b == Link::LABEL_OPEN || b == b'\n' {
            break;
        }
        cur.bump();
    }
    let label = Span::new(label_start, cur.pos());

    if cur.peek() != Some(Link::LABEL_CLOSE) || label.is_empty() {
        *cur = saved;
        return None;
    }
    cur.bump();

    if cur.peek() != Some(Link::URL_OPEN) {
        *cur = saved;
        return None;
    }
    cur.bump();
    let url_start = cur.pos();

    while let Some(b) = cur.peek() {
        if b == Link::URL_CLOSE || b.is_ascii_whitespace() {
            break;
        }
        cur.bump();
    }
    let url = Span::new(url_start, cur.pos());

    if cur.peek() != Some(Link::URL_CLOSE) || url.is_empty() {
        *cur = saved;
        return None;
    }
    cur.bump();

    Some(InlineMatch {
        full: Span::new(start, cur.pos()),
        kind: InlineKind::Link { label, url },
    })
}
