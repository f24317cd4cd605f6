use epigraph_view_engine::markup::parse_markup;
use epigraph_view_engine::rendering::{LineModel, render_transcription, snapshot};
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn load(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/transcriptions/{name}.xml",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

fn render_fixture(name: &str) -> LineModel {
    let model = render_transcription(&load(name));
    snapshot::invariants(&model);
    model
}

#[test]
fn fixture_royal_dedication() {
    let model = render_fixture("royal_dedication");
    assert_snapshot!(snapshot::outline(&model), @r"
    1   | {persName/royal/withTitle: Krb[ʾl] Wtr} {w: mlk}
    2   | {persName: Sbʾ} [...] {placeName/sanctuary: Mr}
    3   | —{placeName/sanctuary: yb}
    4   | {rs/divine: ʿṯtr}-
    ");
}

#[test]
fn fixture_undefined_anchor() {
    let model = render_fixture("undefined_anchor");
    assert_eq!(model.display_offset(), 1);
    assert_snapshot!(snapshot::outline(&model), @r"
    -   | [...]
    1   | first
    2   | second
    7   | seventh
    ");
}

#[test]
fn fixture_leading_content() {
    let model = render_fixture("leading_content");
    assert!(model.lines()[0].is_leading());
    assert_snapshot!(snapshot::outline(&model), @r"
    -   | - overflow
    1   | {orgName/tribe: Ḥšdm}
    2   | end
    ");
}

/// Concatenated line text equals the document's text runs, in order.
#[rstest]
#[case("royal_dedication")]
#[case("undefined_anchor")]
#[case("leading_content")]
fn fixture_content_is_lossless(#[case] name: &str) {
    let markup = load(name);
    let model = render_transcription(&markup);
    assert_eq!(model.text(), parse_markup(&markup).text_content());
}

#[rstest]
#[case("royal_dedication", 4)]
#[case("undefined_anchor", 3)]
#[case("leading_content", 2)]
fn fixture_numbered_lines(#[case] name: &str, #[case] numbered: usize) {
    assert_eq!(render_fixture(name).numbers().len(), numbered);
}
