//! Wall-clock abstraction.
//!
//! The countdown runner reads time through [`Clock`] rather than calling
//! `Utc::now()` directly, so a failed clock read can be modeled and so tests
//! can substitute a controlled time source.

use chrono::{DateTime, Utc};

/// Supplies the current wall-clock time on demand.
///
/// `None` models a failed clock read. Consumers must not treat this as an
/// error: skip the tick and retry on the next interval.
pub trait Clock: Send + 'static {
    fn now(&self) -> Option<DateTime<Utc>>;
}

/// The system clock. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Option<DateTime<Utc>> {
        Some(Utc::now())
    }
}
