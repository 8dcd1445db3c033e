use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
pub enum Operation {
    Add,
    Remove,
}

/// A registry mutation waiting for the user to confirm it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    pub operation: Operation,
    pub url: String,
}

impl Intent {
    pub fn add(url: impl Into<String>) -> Self {
        Self {
            operation: Operation::Add,
            url: url.into(),
        }
    }

    pub fn remove(url: impl Into<String>) -> Self {
        Self {
            operation: Operation::Remove,
            url: url.into(),
        }
    }

    /// Prompt shown to the user while this intent is pending.
    pub fn prompt(&self) -> String {
        format!("Confirm {} this relay: {}", self.operation, self.url)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GateState {
    #[default]
    Idle,
    PendingConfirmation(Intent),
}

/// Holds at most one pending intent until it is confirmed or cancelled.
///
/// `Committed` and `Cancelled` are not resting states: both transitions
/// return the gate to `Idle` immediately. A confirmed intent is handed to
/// `RelayStore::apply`, which either commits it whole or changes nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfirmationGate {
    state: GateState,
}

impl ConfirmationGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GateState {
        &self.state
    }

    pub fn pending(&self) -> Option<&Intent> {
        match &self.state {
            GateState::Idle => None,
            GateState::PendingConfirmation(intent) => Some(intent),
        }
    }

    pub fn is_idle(&self) -> bool {
        self.state == GateState::Idle
    }

    /// Ask for confirmation of `intent`.
    ///
    /// A request made while another one is pending replaces it; the
    /// discarded intent is returned.
    pub fn request(&mut self, intent: Intent) -> Option<Intent> {
        match std::mem::replace(&mut self.state, GateState::PendingConfirmation(intent)) {
            GateState::Idle => None,
            GateState::PendingConfirmation(stale) => {
                log::debug!("Replacing pending intent: {stale:?}");
                Some(stale)
            }
        }
    }

    /// Affirm the pending intent and hand it over for commit.
    ///
    /// Returns `None` if nothing was pending.
    pub fn confirm(&mut self) -> Option<Intent> {
        self.take()
    }

    /// Decline the pending intent. Never touches the store.
    pub fn cancel(&mut self) -> Option<Intent> {
        self.take()
    }

    fn take(&mut self) -> Option<Intent> {
        match std::mem::take(&mut self.state) {
            GateState::Idle => None,
            GateState::PendingConfirmation(intent) => Some(intent),
        }
    }
}
