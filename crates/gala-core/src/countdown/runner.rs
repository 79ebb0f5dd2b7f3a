//! Tokio driver for the countdown gate.
//!
//! Owns the repeating one-second timer the gate itself does not have.
//! The spawned task is aborted on `stop()` and again on drop, so a torn-down
//! runner never leaves an orphaned tick firing against a disposed gate.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use super::gate::{CountdownGate, GateState};
use crate::clock::Clock;
use crate::events::Event;

/// Drives a [`CountdownGate`] on a fixed interval.
///
/// Snapshots are published on a `watch` channel (latest value wins); the
/// one-shot `GateOpened` event is delivered on a bounded channel. The task
/// stops itself once the gate has opened.
pub struct CountdownRunner {
    handle: JoinHandle<()>,
    snapshot_rx: watch::Receiver<Event>,
    opened_rx: mpsc::Receiver<Event>,
}

impl CountdownRunner {
    /// Spawn the tick task. The published snapshot is seeded from an
    /// immediate first tick, so a gate whose target is already past opens
    /// without waiting a full interval and an early subscriber never
    /// observes a pre-tick placeholder countdown.
    pub fn spawn<C: Clock>(mut gate: CountdownGate, clock: C, period: Duration) -> Self {
        let seed_open = clock.now().and_then(|now| gate.tick(now));
        let (snapshot_tx, snapshot_rx) = watch::channel(gate.snapshot());
        let (opened_tx, opened_rx) = mpsc::channel(1);

        let handle = tokio::spawn(async move {
            if let Some(event) = seed_open {
                let _ = opened_tx.send(event).await;
                return;
            }
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                // Clock read failed: skip this tick, retry on the next.
                let Some(now) = clock.now() else { continue };
                let opened = gate.tick(now);
                let _ = snapshot_tx.send(gate.snapshot());
                if let Some(event) = opened {
                    let _ = opened_tx.send(event).await;
                    break;
                }
            }
        });

        Self {
            handle,
            snapshot_rx,
            opened_rx,
        }
    }

    /// Receiver for the latest countdown snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Event> {
        self.snapshot_rx.clone()
    }

    /// Wait for the gate to open. Returns `None` if the runner was stopped
    /// before the gate opened, and after the event has been consumed.
    pub async fn opened(&mut self) -> Option<Event> {
        self.opened_rx.recv().await
    }

    /// Whether the latest published snapshot shows an open gate.
    pub fn is_open(&self) -> bool {
        matches!(
            *self.snapshot_rx.borrow(),
            Event::CountdownSnapshot {
                state: GateState::Revealed,
                ..
            }
        )
    }

    /// Cancel the tick task. Idempotent: stopping an already-finished or
    /// already-stopped runner is a no-op.
    pub fn stop(&self) {
        self.handle.abort();
    }
}

impl Drop for CountdownRunner {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
