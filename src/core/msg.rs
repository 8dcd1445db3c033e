use serde::{Deserialize, Serialize};

pub mod relay;
pub mod suggestion;
pub mod system;

use relay::RelayMsg;
use suggestion::SuggestionMsg;
use system::SystemMsg;

/// Domain messages representing user intent and completed side effects
/// These are processed by the update function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // Registry operations (through the confirmation gate)
    Relay(RelayMsg),

    // Suggested relays (delegated to SuggestionState)
    Suggestion(SuggestionMsg),

    // System operations (delegated to SystemState)
    System(SystemMsg),
}

impl From<RelayMsg> for Msg {
    fn from(msg: RelayMsg) -> Self {
        Msg::Relay(msg)
    }
}

impl From<SuggestionMsg> for Msg {
    fn from(msg: SuggestionMsg) -> Self {
        Msg::Suggestion(msg)
    }
}

impl From<SystemMsg> for Msg {
    fn from(msg: SystemMsg) -> Self {
        Msg::System(msg)
    }
}
