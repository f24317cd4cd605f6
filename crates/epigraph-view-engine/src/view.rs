//! Derived, render-ready artifacts of one record.
//!
//! Built once when a record is loaded. Hover and focus only touch the
//! [`HighlightCoordinator`](crate::highlight::HighlightCoordinator), never this.

use crate::correlation::{NoteRef, TranslationLine, TranslationLines};
use crate::models::{EpigraphRecord, TranslationRecord};
use crate::rendering::{LineModel, render_transcription};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationView {
    pub language: Option<String>,
    pub label: Option<String>,
    pub lines: TranslationLines,
    pub notes: Vec<NoteRef>,
}

impl TranslationView {
    pub fn from_record(record: &TranslationRecord) -> Self {
        Self {
            language: record.language.clone(),
            label: record.label.clone(),
            lines: TranslationLines::from_text(&record.text),
            notes: record.notes.iter().map(NoteRef::from_record).collect(),
        }
    }

    /// Heading for the panel: label, else language, else `Translation {n}`.
    pub fn heading(&self, index: usize) -> String {
        self.label
            .clone()
            .or_else(|| self.language.clone())
            .unwrap_or_else(|| format!("Translation {}", index + 1))
    }

    /// First note whose range covers `line`, with its index.
    pub fn note_for_line(&self, line: u32) -> Option<(usize, &NoteRef)> {
        self.notes.iter().enumerate().find(|(_, n)| n.contains(line))
    }

    /// The translation line a note points at: the first line of its range.
    pub fn note_target(&self, note: usize) -> Option<&TranslationLine> {
        let range = self.notes.get(note)?.range?;
        self.lines.line(range.start())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpigraphView {
    pub title: Option<String>,
    pub transcription: LineModel,
    pub translations: Vec<TranslationView>,
    pub apparatus_notes: Vec<NoteRef>,
}

impl EpigraphView {
    pub fn from_record(record: &EpigraphRecord) -> Self {
        Self {
            title: record.title.clone(),
            transcription: render_transcription(&record.text),
            translations: record
                .translations
                .iter()
                .map(TranslationView::from_record)
                .collect(),
            apparatus_notes: record.apparatus_notes.iter().map(NoteRef::from_record).collect(),
        }
    }
}
