use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::countdown::{GateState, Remaining};
use crate::reveal::WidgetKind;

/// Every state change in the system produces an Event.
/// The rendering layer polls for events; the CLI prints them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// Latest countdown state, published on every tick.
    CountdownSnapshot {
        state: GateState,
        remaining: Remaining,
        target: DateTime<Utc>,
        at: DateTime<Utc>,
    },
    /// The gate transitioned Waiting -> Revealed. Fires exactly once per
    /// gate lifetime.
    GateOpened {
        target: DateTime<Utc>,
        at: DateTime<Utc>,
    },
    WidgetTriggered {
        kind: WidgetKind,
        at: DateTime<Utc>,
    },
    WidgetProgress {
        kind: WidgetKind,
        progress: u8,
        at: DateTime<Utc>,
    },
    /// Ornamental event: fires exactly once per Locked -> Unlocked
    /// transition. Consumed only for the decorative burst.
    WidgetUnlocked {
        kind: WidgetKind,
        at: DateTime<Utc>,
    },
    WidgetReset {
        kind: WidgetKind,
        at: DateTime<Utc>,
    },
    GallerySelected {
        id: String,
        at: DateTime<Utc>,
    },
    GalleryDismissed {
        id: String,
        at: DateTime<Utc>,
    },
    ContractAccepted {
        at: DateTime<Utc>,
    },
    /// Rejecting the contract is not a valid choice; the attempt is denied.
    ContractRejectionDenied {
        at: DateTime<Utc>,
    },
}
