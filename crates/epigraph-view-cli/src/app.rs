use anyhow::Result;
use epigraph_view_engine::highlight::{HighlightCoordinator, HighlightSource};
use epigraph_view_engine::{EpigraphView, NoteRef, RecordFile, io};
use ratatui::layout::{Position, Rect};
use ratatui::widgets::ListState;
use std::path::PathBuf;

/// The pane keyboard input goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Records,
    Transcription,
    Translation(usize),
    Notes,
}

/// One row of the notes pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteItem {
    Apparatus(usize),
    Translation { translation: usize, note: usize },
}

impl NoteItem {
    pub fn source(self) -> HighlightSource {
        match self {
            NoteItem::Apparatus(i) => HighlightSource::ApparatusNote(i),
            NoteItem::Translation { translation, note } => {
                HighlightSource::TranslationNote { translation, note }
            }
        }
    }
}

enum Jump {
    Note(usize),
    TranslationLine { translation: usize, row: usize },
    TranscriptionLine(usize),
}

/// Screen areas from the last draw, for mouse hit-testing. Inner areas, borders excluded.
#[derive(Debug, Clone, Default)]
pub struct PanelAreas {
    pub transcription: Rect,
    pub translations: Vec<Rect>,
    pub notes: Rect,
}

/// First visible row of each scrollable panel.
#[derive(Debug, Clone, Default)]
pub struct PanelScroll {
    pub transcription: usize,
    pub translations: Vec<usize>,
    pub notes: usize,
}

/// Moves `offset` just enough for `cursor` to be one of the `height` visible rows.
fn follow(offset: &mut usize, cursor: usize, height: u16) {
    let height = usize::from(height);
    if height == 0 {
        return;
    }
    if cursor < *offset {
        *offset = cursor;
    } else if cursor >= *offset + height {
        *offset = cursor + 1 - height;
    }
}

pub struct App {
    records_path: PathBuf,
    pub records: Vec<RecordFile>,
    pub record_list_state: ListState,
    pub view: Option<EpigraphView>,
    pub load_error: Option<String>,
    pub focus: Focus,
    pub transcription_cursor: usize,
    pub translation_cursors: Vec<usize>,
    pub notes_cursor: usize,
    pub highlights: HighlightCoordinator,
    pub show_markers: bool,
    pub panels: PanelAreas,
    pub scroll: PanelScroll,
}

impl App {
    pub fn new(records_path: PathBuf, show_markers: bool) -> Result<Self> {
        let records = io::scan_records(&records_path)?
            .into_iter()
            .map(RecordFile::new)
            .collect();

        let mut app = Self::empty(records_path, show_markers);
        app.records = records;

        // Select first record if available
        if !app.records.is_empty() {
            app.record_list_state.select(Some(0));
            app.load_selected_record();
        }

        Ok(app)
    }

    fn empty(records_path: PathBuf, show_markers: bool) -> Self {
        Self {
            records_path,
            records: Vec::new(),
            record_list_state: ListState::default(),
            view: None,
            load_error: None,
            focus: Focus::Records,
            transcription_cursor: 0,
            translation_cursors: Vec::new(),
            notes_cursor: 0,
            highlights: HighlightCoordinator::new(),
            show_markers,
            panels: PanelAreas::default(),
            scroll: PanelScroll::default(),
        }
    }

    pub fn next_record(&mut self) {
        if self.records.is_empty() {
            return;
        }
        let i = match self.record_list_state.selected() {
            Some(i) => (i + 1) % self.records.len(),
            None => 0,
        };
        self.record_list_state.select(Some(i));
        self.load_selected_record();
    }

    pub fn previous_record(&mut self) {
        if self.records.is_empty() {
            return;
        }
        let i = match self.record_list_state.selected() {
            Some(0) | None => self.records.len() - 1,
            Some(i) => i - 1,
        };
        self.record_list_state.select(Some(i));
        self.load_selected_record();
    }

    fn load_selected_record(&mut self) {
        let Some(file) = self
            .record_list_state
            .selected()
            .and_then(|i| self.records.get(i))
        else {
            return;
        };
        match io::read_record(file.relative_path(), &self.records_path) {
            Ok(record) => {
                self.load_error = None;
                self.open_view(EpigraphView::from_record(&record));
            }
            Err(e) => {
                log::warn!("Failed to load {}: {e}", file.display_name());
                self.load_error = Some(format!("Error reading record: {e}"));
                self.view = None;
                self.highlights.leave();
            }
        }
    }

    /// Shows a freshly loaded record with all cursors at the top.
    pub fn open_view(&mut self, view: EpigraphView) {
        self.transcription_cursor = 0;
        self.translation_cursors = vec![0; view.translations.len()];
        self.notes_cursor = 0;
        self.scroll = PanelScroll {
            translations: vec![0; view.translations.len()],
            ..Default::default()
        };
        self.view = Some(view);
        if !self.focus_available(self.focus) {
            self.focus = Focus::Records;
        }
        self.sync_highlight();
    }

    pub fn toggle_markers(&mut self) {
        self.show_markers = !self.show_markers;
    }

    /// Apparatus notes first, then each translation's notes in order.
    pub fn note_items(&self) -> Vec<NoteItem> {
        let Some(view) = &self.view else {
            return Vec::new();
        };
        let apparatus = (0..view.apparatus_notes.len()).map(NoteItem::Apparatus);
        let translated = view.translations.iter().enumerate().flat_map(|(k, t)| {
            (0..t.notes.len()).map(move |i| NoteItem::Translation {
                translation: k,
                note: i,
            })
        });
        apparatus.chain(translated).collect()
    }

    pub fn note(&self, item: NoteItem) -> Option<&NoteRef> {
        let view = self.view.as_ref()?;
        match item {
            NoteItem::Apparatus(i) => view.apparatus_notes.get(i),
            NoteItem::Translation { translation, note } => {
                view.translations.get(translation)?.notes.get(note)
            }
        }
    }

    fn focus_order(&self) -> Vec<Focus> {
        let mut order = vec![Focus::Records];
        if let Some(view) = &self.view {
            order.push(Focus::Transcription);
            order.extend((0..view.translations.len()).map(Focus::Translation));
            if !self.note_items().is_empty() {
                order.push(Focus::Notes);
            }
        }
        order
    }

    fn focus_available(&self, focus: Focus) -> bool {
        self.focus_order().contains(&focus)
    }

    pub fn cycle_focus(&mut self, forward: bool) {
        let order = self.focus_order();
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (current + 1) % order.len()
        } else {
            (current + order.len() - 1) % order.len()
        };
        self.focus = order[next];
        self.sync_highlight();
    }

    pub fn move_cursor(&mut self, down: bool) {
        let len = self.focused_len();
        let step = |cursor: &mut usize| {
            if len == 0 {
                *cursor = 0;
            } else if down {
                *cursor = (*cursor + 1).min(len - 1);
            } else {
                *cursor = cursor.saturating_sub(1);
            }
        };
        match self.focus {
            Focus::Records if down => return self.next_record(),
            Focus::Records => return self.previous_record(),
            Focus::Transcription => step(&mut self.transcription_cursor),
            Focus::Translation(k) => {
                if let Some(cursor) = self.translation_cursors.get_mut(k) {
                    step(cursor);
                }
            }
            Focus::Notes => step(&mut self.notes_cursor),
        }
        self.sync_highlight();
    }

    fn focused_len(&self) -> usize {
        let Some(view) = &self.view else {
            return 0;
        };
        match self.focus {
            Focus::Records => self.records.len(),
            Focus::Transcription => view.transcription.len(),
            Focus::Translation(k) => view.translations.get(k).map_or(0, |t| t.lines.len()),
            Focus::Notes => self.note_items().len(),
        }
    }

    /// Follows a line to its note, or a note to its line.
    pub fn activate(&mut self) {
        match self.jump_target() {
            Some(Jump::Note(row)) => {
                self.focus = Focus::Notes;
                self.notes_cursor = row;
            }
            Some(Jump::TranslationLine { translation, row }) => {
                if let Some(cursor) = self.translation_cursors.get_mut(translation) {
                    *cursor = row;
                    self.focus = Focus::Translation(translation);
                }
            }
            Some(Jump::TranscriptionLine(row)) => {
                self.transcription_cursor = row;
                self.focus = Focus::Transcription;
            }
            None => return,
        }
        self.sync_highlight();
    }

    fn jump_target(&self) -> Option<Jump> {
        let view = self.view.as_ref()?;
        match self.focus {
            Focus::Translation(k) => {
                let translation = view.translations.get(k)?;
                let cursor = self.translation_cursors.get(k).copied().unwrap_or(0);
                let line = translation.lines.lines().get(cursor)?;
                let (note, _) = translation.note_for_line(line.number)?;
                let target = NoteItem::Translation {
                    translation: k,
                    note,
                };
                self.note_items()
                    .iter()
                    .position(|i| *i == target)
                    .map(Jump::Note)
            }
            Focus::Notes => match self.note_items().get(self.notes_cursor).copied()? {
                NoteItem::Translation { translation, note } => {
                    let line = view.translations.get(translation)?.note_target(note)?;
                    Some(Jump::TranslationLine {
                        translation,
                        row: usize::try_from(line.number).ok()?.checked_sub(1)?,
                    })
                }
                NoteItem::Apparatus(i) => {
                    let start = view.apparatus_notes.get(i)?.range?.start();
                    view.transcription
                        .lines()
                        .iter()
                        .position(|l| l.number == Some(start))
                        .map(Jump::TranscriptionLine)
                }
            },
            Focus::Records | Focus::Transcription => None,
        }
    }

    /// Re-derives the highlight from keyboard focus.
    pub fn sync_highlight(&mut self) {
        let Some(view) = &self.view else {
            self.highlights.leave();
            return;
        };
        match self.focus {
            Focus::Records => {
                self.highlights.leave();
            }
            Focus::Transcription => {
                let number = view
                    .transcription
                    .lines()
                    .get(self.transcription_cursor)
                    .and_then(|l| l.number);
                self.highlights
                    .on_line_hover(HighlightSource::Transcription, number);
            }
            Focus::Translation(k) => {
                let number = view.translations.get(k).and_then(|t| {
                    let cursor = self.translation_cursors.get(k).copied().unwrap_or(0);
                    t.lines.lines().get(cursor).map(|l| l.number)
                });
                self.highlights
                    .on_line_hover(HighlightSource::Translation(k), number);
            }
            Focus::Notes => self.enter_note_row(self.notes_cursor),
        }
    }

    fn enter_note_row(&mut self, row: usize) {
        let item = self.note_items().get(row).copied();
        match item.and_then(|i| Some((i, self.note(i)?.clone()))) {
            Some((item, note)) => {
                self.highlights.enter_note(item.source(), &note);
            }
            None => {
                self.highlights.leave();
            }
        }
    }

    /// Scrolls every panel so its cursor row is on screen. Needs `panels` from the current draw.
    pub fn scroll_to_cursors(&mut self) {
        follow(
            &mut self.scroll.transcription,
            self.transcription_cursor,
            self.panels.transcription.height,
        );
        for (k, area) in self.panels.translations.iter().enumerate() {
            if let (Some(offset), Some(cursor)) = (
                self.scroll.translations.get_mut(k),
                self.translation_cursors.get(k),
            ) {
                follow(offset, *cursor, area.height);
            }
        }
        follow(&mut self.scroll.notes, self.notes_cursor, self.panels.notes.height);
    }

    /// Pointer moved to a screen cell: hover whatever line or note is under it.
    pub fn hover(&mut self, column: u16, row: u16) {
        let Some(view) = &self.view else {
            return;
        };
        let at = Position::new(column, row);
        let row_in = |area: Rect| (area.contains(at)).then(|| usize::from(row - area.y));

        if let Some(r) = row_in(self.panels.transcription) {
            let r = r + self.scroll.transcription;
            let number = view.transcription.lines().get(r).and_then(|l| l.number);
            self.highlights
                .on_line_hover(HighlightSource::Transcription, number);
            return;
        }
        for (k, area) in self.panels.translations.iter().enumerate() {
            if let Some(r) = row_in(*area) {
                let r = r + self.scroll.translations.get(k).copied().unwrap_or(0);
                let number = view
                    .translations
                    .get(k)
                    .and_then(|t| t.lines.lines().get(r))
                    .map(|l| l.number);
                self.highlights
                    .on_line_hover(HighlightSource::Translation(k), number);
                return;
            }
        }
        if let Some(r) = row_in(self.panels.notes) {
            self.enter_note_row(r + self.scroll.notes);
            return;
        }
        self.highlights.leave();
    }
}
