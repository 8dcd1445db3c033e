use serde::{Deserialize, Serialize};

/// Messages specific to SystemState
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemMsg {
    // Notice management
    ShowInfo(String),
    ShowError(String),
    DismissNotice,
}
