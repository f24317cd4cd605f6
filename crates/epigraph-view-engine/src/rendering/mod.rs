//! # Transcription Rendering
//!
//! Turns annotated transcription markup into a line-indexed render model.
//!
//! ## Pipeline
//!
//! ```text
//! markup text → parse_markup → MarkupNode → walk_document → [Piece] → segment → LineModel
//!               (markup)                    (walker)                  (segmenter)
//! ```
//!
//! ## Modules
//!
//! - **`walker`**: special-cased elements (`lb`, `gap`, `supplied`, `milestone`)
//!   and per-line splitting of semantic spans
//! - **`segmenter`**: [`LineSegmenter`] state machine, numbering and display offset
//! - **`classify`**: `(tag, type, subtype)` → [`StyleId`]
//! - **`fragment`**: [`RenderFragment`] and editorial marks
//! - **`snapshot`**: plain-text outline and invariant checks for tests and dumps
//!
//! ## Key Invariants
//!
//! - No [`TaggedSpan`] crosses a line boundary
//! - Line numbers, when present, are positive
//! - Concatenating every line's [`Line::text`] reproduces the source text runs

pub mod classify;
pub mod fragment;
pub mod segmenter;
pub mod snapshot;
pub mod walker;

#[cfg(test)]
mod tests;

pub use classify::{StyleId, StyleLevel, classify};
pub use fragment::{EditorialMark, RenderFragment, TaggedSpan};
pub use segmenter::{Line, LineMarker, LineModel, LineSegmenter, segment};
pub use walker::{LineBreak, LineLabel, Piece, walk_document};

use crate::markup::{MarkupParser, parse_markup, parse_markup_with};

/// Renders transcription markup with the default XML parser.
pub fn render_transcription(markup: &str) -> LineModel {
    segment(walk_document(&parse_markup(markup)))
}

/// Renders transcription markup with a caller-supplied parser.
pub fn render_transcription_with<P: MarkupParser + ?Sized>(parser: &P, markup: &str) -> LineModel {
    segment(walk_document(&parse_markup_with(parser, markup)))
}
