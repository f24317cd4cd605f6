//! Line segmenter: flat [`Piece`] stream to a line-indexed [`LineModel`].
//!
//! A single pass keeps the line being filled and flushes it at every break.
//! Flushed lines are never touched again.
//!
//! ## Numbering
//!
//! - `n` a positive integer: that number
//! - `n="undefined"`: no number, rendered blank
//! - `n` absent or malformed: one past the last number handed out, or
//!   `ordinal + 1 - display_offset` before any number has been handed out,
//!   where `ordinal` is the marker's 0-based position in the document
//!
//! `display_offset` is 1 when the document's first marker is
//! `n="undefined"` (a positional anchor some sources put before line 1), 0
//! otherwise. It is decided by a pre-scan before segmentation starts.
//!
//! ## Content
//!
//! Concatenating [`Line::text`] over the model gives back every source text
//! run. Whitespace ahead of the first marker is carried into that marker's
//! line; in a document with no markers it becomes the leading line.

use std::collections::BTreeSet;

use super::fragment::RenderFragment;
use super::walker::{LineBreak, LineLabel, Piece};

/// The line marker a [`Line`] was opened by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMarker {
    /// 0-based position of the marker among all markers of the document.
    pub ordinal: usize,
    pub label: LineLabel,
    pub continued: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Positive when present. `None` for leading content and blank markers.
    pub number: Option<u32>,
    /// `None` only for content preceding the first marker.
    pub marker: Option<LineMarker>,
    pub segments: Vec<RenderFragment>,
}

impl Line {
    /// True for the implicit line holding content before the first marker.
    pub fn is_leading(&self) -> bool {
        self.marker.is_none()
    }

    pub fn is_continued(&self) -> bool {
        self.marker.is_some_and(|m| m.continued)
    }

    /// Source text of the line, without any synthesized glyphs.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for s in &self.segments {
            s.push_text(&mut out);
        }
        out
    }

    /// What a reader sees on the line, minus the line number.
    pub fn display_text(&self) -> String {
        let mut out = String::new();
        for s in &self.segments {
            s.push_display(&mut out);
        }
        out
    }
}

/// The line-indexed render model of one transcription.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineModel {
    lines: Vec<Line>,
    display_offset: u32,
}

impl LineModel {
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn display_offset(&self) -> u32 {
        self.display_offset
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// First line carrying `number`.
    pub fn line(&self, number: u32) -> Option<&Line> {
        self.lines.iter().find(|l| l.number == Some(number))
    }

    /// Every line number present in the model.
    pub fn numbers(&self) -> BTreeSet<u32> {
        self.lines.iter().filter_map(|l| l.number).collect()
    }

    /// Source text of all lines concatenated.
    pub fn text(&self) -> String {
        self.lines.iter().map(Line::text).collect()
    }
}

/// 1 if the first line break is an `n="undefined"` anchor, else 0.
pub fn display_offset(pieces: &[Piece]) -> u32 {
    let first_break = pieces.iter().find_map(|p| match p {
        Piece::Break(b) => Some(b),
        Piece::Fragment(_) => None,
    });
    match first_break {
        Some(LineBreak {
            label: LineLabel::Undefined,
            ..
        }) => 1,
        _ => 0,
    }
}

#[derive(Debug)]
enum PendingLine {
    /// Content before the first marker.
    Prelude(Vec<RenderFragment>),
    Marked {
        marker: LineMarker,
        number: Option<u32>,
        segments: Vec<RenderFragment>,
    },
}

pub struct LineSegmenter {
    display_offset: u32,
    next_ordinal: usize,
    last_number: Option<u32>,
    current: PendingLine,
    out: Vec<Line>,
}

impl LineSegmenter {
    pub fn new(display_offset: u32) -> Self {
        Self {
            display_offset,
            next_ordinal: 0,
            last_number: None,
            current: PendingLine::Prelude(vec![]),
            out: vec![],
        }
    }

    pub fn push(&mut self, piece: Piece) {
        match piece {
            Piece::Fragment(f) => match &mut self.current {
                PendingLine::Prelude(segments) | PendingLine::Marked { segments, .. } => {
                    segments.push(f)
                }
            },
            Piece::Break(b) => self.start_line(b),
        }
    }

    pub fn finish(mut self) -> LineModel {
        // EOF flush
        let last = std::mem::replace(&mut self.current, PendingLine::Prelude(vec![]));
        if let Some(carried) = self.flush(last)
            && !Self::source_text(&carried).is_empty()
        {
            log::debug!("Keeping whitespace-only document as a leading line");
            self.out.push(Line {
                number: None,
                marker: None,
                segments: carried,
            });
        }
        log::debug!(
            "Segmented {} line(s) with display offset {}",
            self.out.len(),
            self.display_offset
        );
        LineModel {
            lines: self.out,
            display_offset: self.display_offset,
        }
    }

    fn start_line(&mut self, b: LineBreak) {
        let marker = LineMarker {
            ordinal: self.next_ordinal,
            label: b.label,
            continued: b.continued,
        };
        self.next_ordinal += 1;
        let number = self.number_for(marker);
        if number.is_some() {
            self.last_number = number;
        }

        let mut segments = vec![RenderFragment::LineNumber(number)];
        if marker.continued {
            segments.push(RenderFragment::Continuation);
        }

        let prev = std::mem::replace(&mut self.current, PendingLine::Prelude(vec![]));
        if let Some(carried) = self.flush(prev) {
            segments.extend(carried);
        }
        self.current = PendingLine::Marked {
            marker,
            number,
            segments,
        };
    }

    /// Emits `pending` as a line. A whitespace-only prelude is not a line of
    /// its own and is handed back to be carried into the next one.
    fn flush(&mut self, pending: PendingLine) -> Option<Vec<RenderFragment>> {
        match pending {
            PendingLine::Prelude(segments) if segments.iter().all(RenderFragment::is_blank) => {
                Some(segments)
            }
            PendingLine::Prelude(segments) => {
                self.out.push(Line {
                    number: None,
                    marker: None,
                    segments,
                });
                None
            }
            PendingLine::Marked {
                marker,
                number,
                segments,
            } => {
                self.out.push(Line {
                    number,
                    marker: Some(marker),
                    segments,
                });
                None
            }
        }
    }

    fn source_text(segments: &[RenderFragment]) -> String {
        let mut out = String::new();
        for s in segments {
            s.push_text(&mut out);
        }
        out
    }

    fn number_for(&self, marker: LineMarker) -> Option<u32> {
        match marker.label {
            LineLabel::Numbered(n) => Some(n),
            LineLabel::Undefined => None,
            LineLabel::Missing => match self.last_number {
                Some(last) => last.checked_add(1),
                None => u32::try_from(marker.ordinal)
                    .ok()?
                    .checked_add(1)?
                    .checked_sub(self.display_offset)
                    .filter(|n| *n > 0),
            },
        }
    }
}

/// Segments a whole piece stream, computing the display offset first.
pub fn segment(pieces: Vec<Piece>) -> LineModel {
    let mut segmenter = LineSegmenter::new(display_offset(&pieces));
    for piece in pieces {
        segmenter.push(piece);
    }
    segmenter.finish()
}
