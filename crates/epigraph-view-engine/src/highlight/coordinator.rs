use std::collections::BTreeSet;
use std::fmt;

use crate::correlation::NoteRef;

use super::state::{HighlightEvent, HighlightSource, HighlightState, PanelId};

/// Handle returned by [`HighlightCoordinator::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&HighlightState)>;

/// Single-writer store for the highlight state of one open record.
///
/// Listeners run synchronously inside [`dispatch`](Self::dispatch), and only
/// when the state actually changes. A multi-threaded host must funnel events
/// through one owner so the last event still wins.
#[derive(Default)]
pub struct HighlightCoordinator {
    state: HighlightState,
    /// Incremented on each state change.
    version: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl fmt::Debug for HighlightCoordinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HighlightCoordinator")
            .field("state", &self.state)
            .field("version", &self.version)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl HighlightCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &HighlightState {
        &self.state
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Applies an event. Returns true if the state changed.
    pub fn dispatch(&mut self, event: HighlightEvent) -> bool {
        let next = HighlightState::after(event);
        if next == self.state {
            return false;
        }
        log::trace!("Highlight {:?} -> {:?}", self.state, next);
        self.state = next;
        self.version += 1;
        for (_, listener) in &mut self.listeners {
            listener(&self.state);
        }
        true
    }

    pub fn enter(&mut self, source: HighlightSource, lines: BTreeSet<u32>) -> bool {
        self.dispatch(HighlightEvent::Enter { source, lines })
    }

    pub fn leave(&mut self) -> bool {
        self.dispatch(HighlightEvent::Leave)
    }

    /// Hover over a numbered line, or off any line with `None`.
    pub fn on_line_hover(&mut self, source: HighlightSource, line: Option<u32>) -> bool {
        match line {
            Some(n) => self.enter(source, BTreeSet::from([n])),
            None => self.leave(),
        }
    }

    /// Hover over a note. A note without a range leaves the highlight.
    pub fn enter_note(&mut self, source: HighlightSource, note: &NoteRef) -> bool {
        self.enter(source, note.lines())
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&HighlightState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn is_line_highlighted(&self, panel: PanelId, line: u32) -> bool {
        self.state.is_line_highlighted(panel, line)
    }

    pub fn is_note_highlighted(&self, panel: PanelId, note: &NoteRef) -> bool {
        self.state.is_note_highlighted(panel, note)
    }
}
