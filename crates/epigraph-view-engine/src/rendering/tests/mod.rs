//! End-to-end tests for the rendering pipeline: markup in, line model out.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::markup::parse_markup;
use crate::rendering::{RenderFragment, StyleId, TaggedSpan, render_transcription, snapshot};

fn spans_on(line: &crate::rendering::Line) -> Vec<&TaggedSpan> {
    line.segments
        .iter()
        .filter_map(|s| match s {
            RenderFragment::Span(span) => Some(span),
            _ => None,
        })
        .collect()
}

/// N markers give N lines, or N + 1 when content precedes the first one.
#[rstest]
#[case(r#"<ab><lb n="1"/>a<lb n="2"/>b<lb n="3"/>c</ab>"#, 3)]
#[case(r#"<ab>lead<lb n="1"/>a<lb n="2"/>b</ab>"#, 3)]
#[case("<ab>\n  <lb n=\"1\"/>a\n  <lb n=\"2\"/>b\n</ab>", 2)]
#[case(r#"<ab><gap/><lb n="1"/>a</ab>"#, 2)]
#[case("<ab>no markers</ab>", 1)]
fn line_count_follows_markers(#[case] markup: &str, #[case] expected: usize) {
    let model = render_transcription(markup);
    snapshot::invariants(&model);
    assert_eq!(model.len(), expected);
}

/// Concatenated line text reproduces every source text run, in order.
#[rstest]
#[case(r#"<ab><lb n="1"/>a <persName>b<lb n="2" break="no"/>c</persName> d</ab>"#)]
#[case("<ab>\n  <lb n=\"1\"/>w1 <supplied reason=\"lost\">w2</supplied>\n  <lb n=\"2\"/><gap/> w3\n</ab>")]
#[case(r#"<ab>pre<lb n="undefined"/>x<lb n="1"/><placeName type="place">Mryb</placeName></ab>"#)]
#[case(r#"<ab><rs type="divine"><persName>a<lb n="1"/>b</persName><lb n="2"/>c</rs></ab>"#)]
#[case("<ab>\n  \n</ab>")]
fn content_round_trips(#[case] markup: &str) {
    let model = render_transcription(markup);
    assert_eq!(model.text(), parse_markup(markup).text_content());
}

#[test]
fn element_with_nested_break_becomes_one_span_per_line() {
    let model = render_transcription(
        r#"<ab><lb n="1"/>x <persName type="royal">Ydʿʾl<lb n="2"/>Byn</persName> y</ab>"#,
    );
    snapshot::invariants(&model);

    let first = spans_on(&model.lines()[0]);
    let second = spans_on(&model.lines()[1]);
    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
    assert_eq!(first[0].children, vec![RenderFragment::Text("Ydʿʾl".into())]);
    assert_eq!(second[0].children, vec![RenderFragment::Text("Byn".into())]);
    assert_eq!(first[0].style, StyleId::Royal);
    assert_eq!(second[0].style, StyleId::Royal);
}

#[test]
fn spans_nested_two_deep_split_at_every_level() {
    let model = render_transcription(
        r#"<ab><lb n="1"/><rs type="divine"><persName>a<lb n="2"/>b</persName></rs></ab>"#,
    );
    snapshot::invariants(&model);

    let outer_first = spans_on(&model.lines()[0]);
    assert_eq!(outer_first[0].style, StyleId::Divine);
    let RenderFragment::Span(inner) = &outer_first[0].children[0] else {
        panic!("expected nested span");
    };
    assert_eq!(inner.style, StyleId::PersName);
    assert_eq!(model.lines()[0].text(), "a");
    assert_eq!(model.lines()[1].text(), "b");
}

#[test]
fn undefined_anchor_leaves_explicit_numbers_alone() {
    let model = render_transcription(
        r#"<ab><lb n="undefined"/>x<lb n="1"/>a<lb n="2"/>b</ab>"#,
    );
    assert_eq!(model.display_offset(), 1);
    let numbers: Vec<_> = model.lines().iter().map(|l| l.number).collect();
    assert_eq!(numbers, vec![None, Some(1), Some(2)]);
    assert_eq!(
        model.lines()[0].segments[0],
        RenderFragment::LineNumber(None)
    );
}

#[test]
fn gap_quantities_are_capped() {
    let model = render_transcription(
        r#"<ab><lb n="1"/><gap unit="character" reason="lost" quantity="12"/><lb n="2"/><gap unit="character" reason="lost" quantity="2"/></ab>"#,
    );
    assert_eq!(model.lines()[0].display_text(), "[.....]");
    assert_eq!(model.lines()[1].display_text(), "[..]");
}

#[test]
fn malformed_markup_renders_as_one_opaque_line() {
    let markup = r#"<ab><lb n="1"/>a<persName>b</ab>"#;
    let model = render_transcription(markup);
    assert_eq!(model.len(), 1);
    assert!(model.lines()[0].is_leading());
    assert_eq!(model.lines()[0].text(), markup);
}

#[test]
fn empty_input_renders_nothing() {
    assert!(render_transcription("").is_empty());
    assert!(render_transcription("<ab/>").is_empty());
}

#[rstest]
#[case(r#"<ab><lb n="5"/>a<lb n="6"/>b<lb/>c</ab>"#, &[Some(5), Some(6), Some(7)])]
#[case(r#"<ab><lb n="12"/>a<lb n="x"/>b<lb/>c</ab>"#, &[Some(12), Some(13), Some(14)])]
#[case(r#"<ab><lb/>a<lb/>b<lb n="9"/>c<lb/>d</ab>"#, &[Some(1), Some(2), Some(9), Some(10)])]
fn unnumbered_markers_continue_the_count(#[case] markup: &str, #[case] expected: &[Option<u32>]) {
    let model = render_transcription(markup);
    snapshot::invariants(&model);
    let numbers: Vec<_> = model.lines().iter().map(|l| l.number).collect();
    assert_eq!(numbers, expected);
}
