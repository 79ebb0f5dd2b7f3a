//! The novelty accept/reject contract.
//!
//! Accepting signs the contract once. Rejecting is never a valid choice:
//! the attempt is denied and the contract stays unsigned.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractState {
    Unsigned,
    Accepted,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contract {
    state: ContractState,
}

impl Default for Contract {
    fn default() -> Self {
        Self::new()
    }
}

impl Contract {
    pub fn new() -> Self {
        Self {
            state: ContractState::Unsigned,
        }
    }

    pub fn state(&self) -> ContractState {
        self.state
    }

    /// Sign the contract. Fires once; accepting again is a no-op.
    pub fn accept(&mut self) -> Option<Event> {
        match self.state {
            ContractState::Unsigned => {
                self.state = ContractState::Accepted;
                Some(Event::ContractAccepted { at: Utc::now() })
            }
            ContractState::Accepted => None,
        }
    }

    /// Attempt to reject. Denied while unsigned; a no-op after acceptance.
    pub fn reject(&mut self) -> Option<Event> {
        match self.state {
            ContractState::Unsigned => Some(Event::ContractRejectionDenied { at: Utc::now() }),
            ContractState::Accepted => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_fires_once() {
        let mut contract = Contract::new();
        assert!(matches!(
            contract.accept(),
            Some(Event::ContractAccepted { .. })
        ));
        assert_eq!(contract.state(), ContractState::Accepted);
        assert!(contract.accept().is_none());
    }

    #[test]
    fn rejection_is_denied() {
        let mut contract = Contract::new();
        assert!(matches!(
            contract.reject(),
            Some(Event::ContractRejectionDenied { .. })
        ));
        // Still unsigned; the denial changes nothing.
        assert_eq!(contract.state(), ContractState::Unsigned);
        assert!(contract.reject().is_some());
    }

    #[test]
    fn reject_after_accept_is_a_noop() {
        let mut contract = Contract::new();
        contract.accept();
        assert!(contract.reject().is_none());
        assert_eq!(contract.state(), ContractState::Accepted);
    }
}
