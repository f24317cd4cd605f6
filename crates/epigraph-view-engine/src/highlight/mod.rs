//! # Highlight Coordination
//!
//! One [`HighlightCoordinator`] per open record holds the single piece of
//! shared mutable state in the viewer: which lines are highlighted, and from
//! where. Panels write to it through [`HighlightEvent`]s and read it back
//! through [`HighlightState`] queries.
//!
//! ## States
//!
//! ```text
//!            Enter(source, S ≠ ∅)
//!   Idle ───────────────────────────▶ Highlighted { source, S }
//!    ▲                                      │
//!    └──────── Leave / Enter(_, ∅) ─────────┘
//! ```
//!
//! The most recent event always wins. Every leave returns to `Idle`.
//!
//! ## Scope
//!
//! A highlight started from the transcription or an apparatus note shows in
//! every panel. One started from translation `k` (or one of its notes) shows
//! in the transcription and translation `k` only.

pub mod coordinator;
pub mod state;

pub use coordinator::{HighlightCoordinator, SubscriptionId};
pub use state::{HighlightEvent, HighlightSource, HighlightState, PanelId};
