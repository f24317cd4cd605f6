//! Tree walker: markup tree to a flat stream of [`Piece`]s.
//!
//! The stream interleaves render fragments with line breaks. Breaks are
//! always lifted to the top level of the stream: an element whose
//! descendants contain `lb` is emitted as one span per line, with the breaks
//! between them, so no span ever straddles a line boundary.

use crate::markup::{MarkupNode, Tag};

use super::classify::classify;
use super::fragment::{EditorialMark, RenderFragment, TaggedSpan};

/// What a line marker says about its own number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineLabel {
    /// A positive integer `n`.
    Numbered(u32),
    /// `n="undefined"`: a positional anchor, not a numbered line.
    Undefined,
    /// `n` absent or not a positive integer.
    Missing,
}

impl LineLabel {
    pub fn parse(n: Option<&str>) -> Self {
        match n.map(str::trim) {
            None => LineLabel::Missing,
            Some("undefined") => LineLabel::Undefined,
            Some(raw) => match raw.parse::<u32>() {
                Ok(n) if n > 0 => LineLabel::Numbered(n),
                _ => LineLabel::Missing,
            },
        }
    }
}

/// An `lb` element as seen by the segmenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineBreak {
    pub label: LineLabel,
    /// `break="no"`: the new line continues a word from the previous one.
    pub continued: bool,
}

impl LineBreak {
    fn from_node(node: &MarkupNode) -> Self {
        Self {
            label: LineLabel::parse(node.attribute("n")),
            continued: node.attribute("break") == Some("no"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece {
    Fragment(RenderFragment),
    Break(LineBreak),
}

/// Walks the children of the document root. The root element itself is not styled.
pub fn walk_document(root: &MarkupNode) -> Vec<Piece> {
    let mut out = Vec::new();
    match root {
        MarkupNode::Text(_) => walk_node(root, &mut out),
        MarkupNode::Element { children, .. } => {
            for child in children {
                walk_node(child, &mut out);
            }
        }
    }
    out
}

fn walk_node(node: &MarkupNode, out: &mut Vec<Piece>) {
    let tag_name = match node {
        MarkupNode::Text(t) => {
            if !t.is_empty() {
                out.push(Piece::Fragment(RenderFragment::Text(t.clone())));
            }
            return;
        }
        MarkupNode::Element { tag_name, .. } => tag_name,
    };

    match tag_name.to_ascii_lowercase().as_str() {
        "milestone" => out.push(mark(EditorialMark::Milestone)),
        "lb" => out.push(Piece::Break(LineBreak::from_node(node))),
        "gap" => out.push(mark(gap_mark(node))),
        "supplied" => {
            let lost = node.attribute("reason") == Some("lost");
            if lost {
                out.push(mark(EditorialMark::SuppliedOpen));
            }
            for child in node.children() {
                walk_node(child, out);
            }
            if lost {
                out.push(mark(EditorialMark::SuppliedClose));
            }
        }
        _ => walk_semantic(node, out),
    }
}

fn mark(m: EditorialMark) -> Piece {
    Piece::Fragment(RenderFragment::Mark(m))
}

fn gap_mark(node: &MarkupNode) -> EditorialMark {
    let lost_characters = node.attribute("reason") == Some("lost")
        && node.attribute("unit") == Some("character");
    match node.attribute("quantity").map(|q| q.trim().parse::<usize>()) {
        Some(Ok(quantity)) if lost_characters => EditorialMark::lost_characters(quantity),
        _ => EditorialMark::Gap,
    }
}

/// Emits one span per physical line the element's content occupies.
fn walk_semantic(node: &MarkupNode, out: &mut Vec<Piece>) {
    let Some(tag) = Tag::from_node(node) else {
        return;
    };
    let style = classify(&tag.tag_name, tag.type_(), tag.subtype());

    let mut inner = Vec::new();
    for child in node.children() {
        walk_node(child, &mut inner);
    }

    let span = |children: Vec<RenderFragment>| {
        Piece::Fragment(RenderFragment::Span(TaggedSpan {
            tag: tag.clone(),
            style,
            children,
        }))
    };

    if !inner.iter().any(|p| matches!(p, Piece::Break(_))) {
        let children = inner
            .into_iter()
            .filter_map(|p| match p {
                Piece::Fragment(f) => Some(f),
                Piece::Break(_) => None,
            })
            .collect();
        out.push(span(children));
        return;
    }

    let mut run = Vec::new();
    for piece in inner {
        match piece {
            Piece::Fragment(f) => run.push(f),
            Piece::Break(b) => {
                if !run.is_empty() {
                    out.push(span(std::mem::take(&mut run)));
                }
                out.push(Piece::Break(b));
            }
        }
    }
    if !run.is_empty() {
        out.push(span(run));
    }
}
