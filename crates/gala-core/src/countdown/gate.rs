//! Countdown gate implementation.
//!
//! The gate is a wall-clock-based state machine. It does not use internal
//! threads - the caller is responsible for calling `tick()` periodically
//! (see [`CountdownRunner`](super::CountdownRunner) for the driven version).
//!
//! ## State Transitions
//!
//! ```text
//! Waiting -> Revealed    (exactly once, never back)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut gate = CountdownGate::new(target);
//! // In a loop, once per second:
//! gate.tick(now); // Returns Some(Event::GateOpened) on the opening tick
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::remaining::Remaining;
use crate::events::Event;

/// Whether the gated content is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GateState {
    Waiting,
    Revealed,
}

/// Core countdown state machine.
///
/// Operates on wall-clock instants supplied by the caller -- no internal
/// timer. If the current time already exceeds the target, the very first
/// `tick()` opens the gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownGate {
    target: DateTime<Utc>,
    state: GateState,
    remaining: Remaining,
    /// Completion signal emitted at most once.
    fired: bool,
}

impl CountdownGate {
    /// Starts in `Waiting`. The remaining breakdown is a placeholder until
    /// the first `tick()`; callers that publish snapshots should tick once
    /// at construction time.
    pub fn new(target: DateTime<Utc>) -> Self {
        Self {
            target,
            state: GateState::Waiting,
            remaining: Remaining::zero(),
            fired: false,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn target(&self) -> DateTime<Utc> {
        self.target
    }

    pub fn remaining(&self) -> Remaining {
        self.remaining
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::CountdownSnapshot {
            state: self.state,
            remaining: self.remaining,
            target: self.target,
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Recompute the remaining breakdown for `now`.
    ///
    /// Returns `Some(Event::GateOpened)` on the first tick where the
    /// remaining total reaches zero, `None` on every other tick. A caller
    /// that failed to read the clock simply skips the tick and retries.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Option<Event> {
        if self.fired {
            // Once open, remaining stays clamped to zero even if the
            // clock jumps backwards.
            self.remaining = Remaining::zero();
            return None;
        }
        self.remaining = Remaining::until(self.target, now);
        if self.remaining.is_zero() {
            self.fired = true;
            self.state = GateState::Revealed;
            return Some(Event::GateOpened {
                target: self.target,
                at: now,
            });
        }
        None
    }
}
