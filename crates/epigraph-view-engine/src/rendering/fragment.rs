use crate::markup::Tag;

use super::classify::StyleId;

/// Most dots a character gap renders, whatever its recorded quantity.
pub const MAX_GAP_DOTS: usize = 5;

/// Glyph shown at the start of a line that continues a word from the previous one.
pub const CONTINUATION_GLYPH: &str = "—";

/// Editorial marks the renderer synthesizes; none of them is source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorialMark {
    /// `milestone`, shown as a separator.
    Milestone,
    /// Opening bracket of text supplied for a lost passage.
    SuppliedOpen,
    /// Closing bracket of text supplied for a lost passage.
    SuppliedClose,
    /// A gap of a known number of lost characters, already capped at [`MAX_GAP_DOTS`].
    LostCharacters(usize),
    /// A gap of unknown extent.
    Gap,
}

impl EditorialMark {
    pub fn lost_characters(quantity: usize) -> Self {
        EditorialMark::LostCharacters(quantity.min(MAX_GAP_DOTS))
    }

    pub fn display(self) -> String {
        match self {
            EditorialMark::Milestone => "-".to_string(),
            EditorialMark::SuppliedOpen => "[".to_string(),
            EditorialMark::SuppliedClose => "]".to_string(),
            EditorialMark::LostCharacters(n) => format!("[{}]", ".".repeat(n)),
            EditorialMark::Gap => "[...]".to_string(),
        }
    }
}

/// A styled span for one semantic element, confined to a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedSpan {
    pub tag: Tag,
    pub style: StyleId,
    pub children: Vec<RenderFragment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderFragment {
    /// A run of source text.
    Text(String),
    Mark(EditorialMark),
    /// The line-number glyph at the start of a marked line; `None` renders blank.
    LineNumber(Option<u32>),
    /// The `break="no"` glyph.
    Continuation,
    Span(TaggedSpan),
}

impl RenderFragment {
    /// Appends the source text under this fragment; synthesized glyphs add nothing.
    pub fn push_text(&self, out: &mut String) {
        match self {
            RenderFragment::Text(t) => out.push_str(t),
            RenderFragment::Span(span) => {
                for c in &span.children {
                    c.push_text(out);
                }
            }
            RenderFragment::Mark(_) | RenderFragment::LineNumber(_) | RenderFragment::Continuation => {}
        }
    }

    /// Appends what a reader sees, editorial marks included.
    ///
    /// Line numbers are left out; panels draw them in their own gutter.
    pub fn push_display(&self, out: &mut String) {
        match self {
            RenderFragment::Text(t) => out.push_str(t),
            RenderFragment::Mark(m) => out.push_str(&m.display()),
            RenderFragment::Continuation => out.push_str(CONTINUATION_GLYPH),
            RenderFragment::LineNumber(_) => {}
            RenderFragment::Span(span) => {
                for c in &span.children {
                    c.push_display(out);
                }
            }
        }
    }

    /// True if this fragment carries nothing but whitespace source text.
    pub fn is_blank(&self) -> bool {
        match self {
            RenderFragment::Text(t) => t.trim().is_empty(),
            _ => false,
        }
    }
}
