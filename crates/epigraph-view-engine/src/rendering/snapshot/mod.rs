//! # Snapshot Support
//!
//! Utilities for inspecting a [`LineModel`](super::LineModel) in tests and
//! command-line dumps.
//!
//! ## Modules
//!
//! - **`outline`**: renders a model as stable plain text, one row per line,
//!   suitable for `insta` inline snapshots
//! - **`invariants`**: runtime checks for segmenter correctness (positive
//!   numbers, no span holding a line glyph, glyph placement)

pub mod invariants;
pub mod outline;

pub use invariants::check as invariants;
pub use outline::{outline, outline_line};
