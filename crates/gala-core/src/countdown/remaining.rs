use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Time left until the target, broken down for display.
///
/// Decomposition of `max(target - now, 0)` truncated to whole seconds:
/// `days*86400 + hours*3600 + minutes*60 + seconds` reconstructs the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Remaining {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Remaining {
    /// All-zero breakdown, the state at and after the target.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Compute the breakdown between `now` and `target`.
    ///
    /// Returns [`Remaining::zero`] when `now >= target`; this is the sole
    /// signal the gate uses to fire completion.
    pub fn until(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let total = (target - now).num_seconds().max(0) as u64;
        Self::from_total_seconds(total)
    }

    pub fn from_total_seconds(total: u64) -> Self {
        Self {
            days: total / 86_400,
            hours: (total / 3_600) % 24,
            minutes: (total / 60) % 60,
            seconds: total % 60,
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.days * 86_400 + self.hours * 3_600 + self.minutes * 60 + self.seconds
    }

    pub fn is_zero(&self) -> bool {
        self.total_seconds() == 0
    }
}
