pub mod suggestions;
pub mod system;

pub use suggestions::SuggestionState;
pub use system::{Notice, NoticeKind, SystemState};

use crate::domain::gate::ConfirmationGate;

/// Interaction state of the relay manager
///
/// The relay list itself is owned by the `RelayStore`; this holds everything
/// a view needs around it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub gate: ConfirmationGate,
    pub suggestions: SuggestionState,
    pub system: SystemState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
