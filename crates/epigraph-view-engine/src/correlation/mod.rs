//! # Line Correlation
//!
//! The positional link between transcription lines, translation lines and
//! notes. Everything here works on plain line numbers; matching is membership
//! only.
//!
//! - **`range`**: the `"7"` / `"3-5"` line-range grammar
//! - **`notes`**: [`NoteRef`], a note with its parsed range
//! - **`translation`**: translation text split into numbered lines

pub mod notes;
pub mod range;
pub mod translation;

pub use notes::NoteRef;
pub use range::{LineRange, LineRangeError, MAX_RANGE_LINES, parse_line_range};
pub use translation::{TranslationLine, TranslationLines};
