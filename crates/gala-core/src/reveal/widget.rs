//! Reveal widget state machine.
//!
//! Generalizes the progressively-unlocked interactions: the scratch card and
//! the envelope/letter share the same life cycle.
//!
//! ## State Transitions
//!
//! ```text
//! Locked -> InProgress -> Unlocked -> Locked (explicit reset only)
//! ```
//!
//! `trigger()` is a no-op outside Locked, `reset()` is a no-op outside
//! Unlocked. Progress is bounded to 0..=100 and never restarts mid-cycle.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::events::Event;

/// Which interaction the widget renders as. Presentation hint only; the
/// life cycle is identical for every kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    ScratchCard,
    Envelope,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetState {
    Locked,
    InProgress,
    Unlocked,
}

/// A single reveal widget instance.
///
/// Each instance owns its state independently; nothing is shared between
/// widgets and nothing here can fail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevealWidget {
    kind: WidgetKind,
    state: WidgetState,
    /// 0..=100. Reaches exactly 100 on the unlocking step.
    progress: u8,
    /// Progress added per driver step, clamped to 1..=100 at construction.
    increment: u8,
}

impl RevealWidget {
    pub fn new(kind: WidgetKind, increment: u8) -> Self {
        Self {
            kind,
            state: WidgetState::Locked,
            progress: 0,
            increment: increment.clamp(1, 100),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn kind(&self) -> WidgetKind {
        self.kind
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn increment(&self) -> u8 {
        self.increment
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start the reveal. Valid only from Locked; re-triggering while
    /// InProgress or Unlocked is a no-op and never restarts progress.
    pub fn trigger(&mut self) -> Option<Event> {
        match self.state {
            WidgetState::Locked => {
                self.state = WidgetState::InProgress;
                Some(Event::WidgetTriggered {
                    kind: self.kind,
                    at: Utc::now(),
                })
            }
            _ => None,
        }
    }

    /// Advance progress by one increment. Valid only while InProgress.
    ///
    /// Returns `Event::WidgetUnlocked` (the ornamental event) on the step
    /// that reaches 100, exactly once per Locked -> Unlocked cycle, and
    /// `Event::WidgetProgress` on every earlier step.
    pub fn step(&mut self) -> Option<Event> {
        if self.state != WidgetState::InProgress {
            return None;
        }
        self.progress = self.progress.saturating_add(self.increment).min(100);
        if self.progress == 100 {
            self.state = WidgetState::Unlocked;
            Some(Event::WidgetUnlocked {
                kind: self.kind,
                at: Utc::now(),
            })
        } else {
            Some(Event::WidgetProgress {
                kind: self.kind,
                progress: self.progress,
                at: Utc::now(),
            })
        }
    }

    /// Return to Locked with zeroed progress. Valid only from Unlocked;
    /// a no-op from Locked or InProgress.
    pub fn reset(&mut self) -> Option<Event> {
        match self.state {
            WidgetState::Unlocked => {
                self.state = WidgetState::Locked;
                self.progress = 0;
                Some(Event::WidgetReset {
                    kind: self.kind,
                    at: Utc::now(),
                })
            }
            _ => None,
        }
    }
}
