use std::collections::BTreeSet;

use crate::correlation::NoteRef;

static NO_LINES: BTreeSet<u32> = BTreeSet::new();

/// Where a highlight was triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightSource {
    Transcription,
    /// Line of the translation at this index.
    Translation(usize),
    /// Note `note` of translation `translation`.
    TranslationNote { translation: usize, note: usize },
    /// Apparatus note at this index.
    ApparatusNote(usize),
}

impl HighlightSource {
    /// The translation this source is scoped to, if any.
    pub fn translation(self) -> Option<usize> {
        match self {
            HighlightSource::Translation(k) | HighlightSource::TranslationNote { translation: k, .. } => {
                Some(k)
            }
            HighlightSource::Transcription | HighlightSource::ApparatusNote(_) => None,
        }
    }

    pub fn applies_to(self, panel: PanelId) -> bool {
        match (self.translation(), panel) {
            (None, _) => true,
            (Some(_), PanelId::Transcription) => true,
            (Some(k), PanelId::Translation(j)) => k == j,
        }
    }
}

/// A line-bearing panel. Notes are queried through the panel they sit in:
/// apparatus notes with the transcription, translation notes with their
/// translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelId {
    Transcription,
    Translation(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HighlightEvent {
    /// Pointer enter or focus on something carrying `lines`.
    Enter {
        source: HighlightSource,
        lines: BTreeSet<u32>,
    },
    /// Pointer leave or blur.
    Leave,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum HighlightState {
    #[default]
    Idle,
    /// `lines` is never empty.
    Highlighted {
        source: HighlightSource,
        lines: BTreeSet<u32>,
    },
}

impl HighlightState {
    /// The state an event leads to, whatever the current one is.
    pub fn after(event: HighlightEvent) -> Self {
        match event {
            HighlightEvent::Enter { source, lines } if !lines.is_empty() => {
                HighlightState::Highlighted { source, lines }
            }
            HighlightEvent::Enter { .. } | HighlightEvent::Leave => HighlightState::Idle,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, HighlightState::Idle)
    }

    pub fn source(&self) -> Option<HighlightSource> {
        match self {
            HighlightState::Idle => None,
            HighlightState::Highlighted { source, .. } => Some(*source),
        }
    }

    /// Highlighted lines regardless of panel; empty when idle.
    pub fn active_lines(&self) -> &BTreeSet<u32> {
        match self {
            HighlightState::Idle => &NO_LINES,
            HighlightState::Highlighted { lines, .. } => lines,
        }
    }

    pub fn applies_to(&self, panel: PanelId) -> bool {
        self.source().is_some_and(|s| s.applies_to(panel))
    }

    pub fn is_line_highlighted(&self, panel: PanelId, line: u32) -> bool {
        self.applies_to(panel) && self.active_lines().contains(&line)
    }

    pub fn is_note_highlighted(&self, panel: PanelId, note: &NoteRef) -> bool {
        self.applies_to(panel) && note.intersects(self.active_lines())
    }
}
