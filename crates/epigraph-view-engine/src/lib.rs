pub mod correlation;
pub mod highlight;
pub mod io;
pub mod markup;
pub mod models;
pub mod rendering;
pub mod view;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use correlation::*;
pub use highlight::*;
pub use io::*;
pub use markup::{MarkupError, MarkupNode, MarkupParser, Tag, XmlMarkupParser, parse_markup};
pub use models::*;
pub use rendering::{Line, LineModel, RenderFragment, StyleId, TaggedSpan, render_transcription};
pub use view::{EpigraphView, TranslationView};
