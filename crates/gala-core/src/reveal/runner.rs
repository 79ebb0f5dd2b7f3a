//! Tokio driver for a reveal widget.
//!
//! Triggers the widget, then steps it on a fixed interval until it unlocks.
//! Same cancellation discipline as the countdown runner: the task is aborted
//! on `stop()` and on drop, so no step fires against a torn-down widget.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::widget::{RevealWidget, WidgetState};
use crate::events::Event;

/// Drives one widget through a full Locked -> Unlocked cycle.
pub struct WidgetRunner {
    handle: JoinHandle<()>,
    events_rx: Option<mpsc::Receiver<Event>>,
}

impl WidgetRunner {
    /// Spawn the step task. The first step lands one full interval after the
    /// trigger, matching the interaction's animation cadence.
    pub fn spawn(mut widget: RevealWidget, period: Duration) -> Self {
        let (events_tx, events_rx) = mpsc::channel(16);

        let handle = tokio::spawn(async move {
            if let Some(event) = widget.trigger() {
                if events_tx.send(event).await.is_err() {
                    return;
                }
            }
            let mut ticker = tokio::time::interval(period);
            // Interval fires immediately once; the trigger already happened.
            ticker.tick().await;
            while widget.state() == WidgetState::InProgress {
                ticker.tick().await;
                if let Some(event) = widget.step() {
                    if events_tx.send(event).await.is_err() {
                        return;
                    }
                }
            }
        });

        Self {
            handle,
            events_rx: Some(events_rx),
        }
    }

    /// Next event from the cycle. `None` once the widget has unlocked and
    /// every event has been consumed, after `stop()`, or after the stream
    /// has been detached.
    pub async fn next_event(&mut self) -> Option<Event> {
        match self.events_rx.as_mut() {
            Some(events_rx) => events_rx.recv().await,
            None => None,
        }
    }

    /// Detach the event stream so it can outlive the runner; the stream
    /// ends when the cycle completes or the runner is torn down.
    pub fn detach_events(&mut self) -> Option<mpsc::Receiver<Event>> {
        self.events_rx.take()
    }

    /// Cancel the step task. Idempotent.
    pub fn stop(&self) {
        self.handle.abort();
    }
}

impl Drop for WidgetRunner {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::WidgetKind;

    #[tokio::test(start_paused = true)]
    async fn runs_a_full_cycle() {
        let widget = RevealWidget::new(WidgetKind::ScratchCard, 20);
        let mut runner = WidgetRunner::spawn(widget, Duration::from_millis(100));

        let mut events = Vec::new();
        while let Some(event) = runner.next_event().await {
            events.push(event);
        }

        // Trigger, four progress steps, one unlock.
        assert_eq!(events.len(), 6);
        assert!(matches!(events.first(), Some(Event::WidgetTriggered { .. })));
        assert!(matches!(events.last(), Some(Event::WidgetUnlocked { .. })));
        let unlocks = events
            .iter()
            .filter(|e| matches!(e, Event::WidgetUnlocked { .. }))
            .count();
        assert_eq!(unlocks, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_cancels_mid_cycle() {
        let widget = RevealWidget::new(WidgetKind::Envelope, 10);
        let mut runner = WidgetRunner::spawn(widget, Duration::from_millis(100));

        assert!(matches!(
            runner.next_event().await,
            Some(Event::WidgetTriggered { .. })
        ));
        runner.stop();
        runner.stop();

        // Drain whatever was already queued; no unlock can arrive.
        while let Some(event) = runner.next_event().await {
            assert!(!matches!(event, Event::WidgetUnlocked { .. }));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_runner_stops_the_cycle() {
        let widget = RevealWidget::new(WidgetKind::Envelope, 10);
        let mut runner = WidgetRunner::spawn(widget, Duration::from_millis(100));
        let mut events = runner.detach_events().expect("stream not yet detached");

        assert!(matches!(
            events.recv().await,
            Some(Event::WidgetTriggered { .. })
        ));
        drop(runner);

        // The aborted task drops its sender; the detached stream ends
        // without ever reaching an unlock.
        while let Some(event) = events.recv().await {
            assert!(!matches!(event, Event::WidgetUnlocked { .. }));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn detaching_leaves_the_runner_eventless() {
        let widget = RevealWidget::new(WidgetKind::ScratchCard, 100);
        let mut runner = WidgetRunner::spawn(widget, Duration::from_millis(100));
        let mut events = runner.detach_events().expect("stream not yet detached");

        assert!(runner.detach_events().is_none());
        assert!(runner.next_event().await.is_none());
        assert!(matches!(
            events.recv().await,
            Some(Event::WidgetTriggered { .. })
        ));
    }
}
