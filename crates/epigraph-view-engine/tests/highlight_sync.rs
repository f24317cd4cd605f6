use std::collections::BTreeSet;
use std::path::PathBuf;

use epigraph_view_engine::highlight::{HighlightCoordinator, HighlightSource, PanelId};
use epigraph_view_engine::io::{read_record, scan_records};
use epigraph_view_engine::view::EpigraphView;
use pretty_assertions::assert_eq;
use relative_path::RelativePath;

fn records_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/records")
}

fn dedication() -> EpigraphView {
    let record = read_record(RelativePath::new("dedication.json"), &records_root()).unwrap();
    EpigraphView::from_record(&record)
}

#[test]
fn fixture_records_are_listed() {
    let files = scan_records(&records_root()).unwrap();
    let names: Vec<_> = files.iter().map(|f| f.as_str()).collect();
    assert_eq!(names, vec!["dedication.json"]);
}

#[test]
fn record_loads_into_panels() {
    let view = dedication();
    assert_eq!(view.title.as_deref(), Some("Dedication to ʿṯtr"));
    assert_eq!(view.transcription.numbers(), BTreeSet::from([1, 2, 3, 4]));
    assert_eq!(view.translations.len(), 2);
    assert_eq!(view.translations[0].lines.len(), 4);
    assert_eq!(view.apparatus_notes.len(), 1);
}

#[test]
fn transcription_hover_reaches_every_panel_and_covering_notes() {
    let view = dedication();
    let mut coordinator = HighlightCoordinator::new();

    coordinator.on_line_hover(HighlightSource::Transcription, Some(3));

    assert!(coordinator.is_line_highlighted(PanelId::Transcription, 3));
    assert!(coordinator.is_line_highlighted(PanelId::Translation(0), 3));
    assert!(coordinator.is_line_highlighted(PanelId::Translation(1), 3));

    let notes = &view.translations[0].notes;
    let lit: Vec<bool> = notes
        .iter()
        .map(|n| coordinator.is_note_highlighted(PanelId::Translation(0), n))
        .collect();
    assert_eq!(lit, vec![false, true, false]);
    assert!(coordinator.is_note_highlighted(PanelId::Transcription, &view.apparatus_notes[0]));

    coordinator.on_line_hover(HighlightSource::Transcription, None);
    assert!(coordinator.state().is_idle());
    assert!(!coordinator.is_line_highlighted(PanelId::Translation(0), 3));
}

#[test]
fn translation_hover_stays_in_its_own_pairing() {
    let mut coordinator = HighlightCoordinator::new();

    coordinator.on_line_hover(HighlightSource::Translation(1), Some(2));

    assert!(coordinator.is_line_highlighted(PanelId::Transcription, 2));
    assert!(coordinator.is_line_highlighted(PanelId::Translation(1), 2));
    assert!(!coordinator.is_line_highlighted(PanelId::Translation(0), 2));
}

#[test]
fn note_hover_highlights_its_range_and_points_at_its_line() {
    let view = dedication();
    let translation = &view.translations[0];
    let mut coordinator = HighlightCoordinator::new();

    coordinator.enter_note(
        HighlightSource::TranslationNote {
            translation: 0,
            note: 1,
        },
        &translation.notes[1],
    );

    assert_eq!(coordinator.state().active_lines(), &BTreeSet::from([2, 3]));
    assert!(coordinator.is_line_highlighted(PanelId::Transcription, 2));
    assert_eq!(
        translation.note_target(1).map(|l| l.text.as_str()),
        Some("... of Maryab dedicated")
    );
}

#[test]
fn unparsable_note_range_never_highlights() {
    let view = dedication();
    let unplaced = &view.translations[0].notes[2];
    let mut coordinator = HighlightCoordinator::new();

    coordinator.enter_note(
        HighlightSource::TranslationNote {
            translation: 0,
            note: 2,
        },
        unplaced,
    );
    assert!(coordinator.state().is_idle());

    for line in 1..=4 {
        coordinator.on_line_hover(HighlightSource::Transcription, Some(line));
        assert!(!coordinator.is_note_highlighted(PanelId::Translation(0), unplaced));
    }
}
