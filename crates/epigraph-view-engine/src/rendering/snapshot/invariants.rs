use crate::rendering::{LineModel, RenderFragment};

/// Validates segmenter output invariants.
///
/// Asserts that:
/// - Line numbers, when present, are positive
/// - Only the first line may lack a marker
/// - Marked lines open with a line-number glyph matching their number
/// - No span contains a line-number or continuation glyph
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(model: &LineModel) {
    for (i, line) in model.lines().iter().enumerate() {
        assert!(
            line.number != Some(0),
            "line {i} has number 0; numbers must be positive"
        );
        if line.is_leading() {
            assert_eq!(i, 0, "leading line found at index {i}");
        } else {
            assert_eq!(
                line.segments.first(),
                Some(&RenderFragment::LineNumber(line.number)),
                "line {i} does not open with its number glyph"
            );
        }
        for s in &line.segments {
            assert_span_free_of_glyphs(s, i);
        }
    }
}

fn assert_span_free_of_glyphs(f: &RenderFragment, line: usize) {
    if let RenderFragment::Span(span) = f {
        for c in &span.children {
            assert!(
                !matches!(c, RenderFragment::LineNumber(_) | RenderFragment::Continuation),
                "span <{}> on line {line} contains a line glyph",
                span.tag.tag_name
            );
            assert_span_free_of_glyphs(c, line);
        }
    }
}
