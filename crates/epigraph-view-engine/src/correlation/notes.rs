use std::collections::BTreeSet;

use crate::models::NoteRecord;

use super::range::LineRange;

/// A note and the lines it annotates.
///
/// A note whose `line` is absent or does not parse has no range and never
/// takes part in highlighting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRef {
    pub text: String,
    pub range: Option<LineRange>,
}

impl NoteRef {
    pub fn new(text: impl Into<String>, range: Option<LineRange>) -> Self {
        Self {
            text: text.into(),
            range,
        }
    }

    pub fn from_record(note: &NoteRecord) -> Self {
        let range = note.line.as_deref().and_then(|raw| match raw.parse() {
            Ok(range) => Some(range),
            Err(e) => {
                log::debug!("Note range ignored: {e}");
                None
            }
        });
        Self::new(note.note.clone(), range)
    }

    pub fn lines(&self) -> BTreeSet<u32> {
        self.range.map(|r| r.lines()).unwrap_or_default()
    }

    pub fn contains(&self, line: u32) -> bool {
        self.range.is_some_and(|r| r.contains(line))
    }

    /// True if any of `lines` falls inside this note's range.
    pub fn intersects(&self, lines: &BTreeSet<u32>) -> bool {
        match self.range {
            Some(r) => lines.range(r.start()..=r.end()).next().is_some(),
            None => false,
        }
    }
}
