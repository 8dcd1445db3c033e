use serde::{Deserialize, Serialize};

use crate::domain::{error::RelayError, gate::Intent};

/// Messages driving the relay registry through the confirmation gate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RelayMsg {
    // User intents
    RequestAdd(String),
    RequestAddCustom(String),
    RequestRemove(String),
    Confirm,
    Cancel,

    // Results of a commit, fed back by the executor
    Committed(Intent),
    CommitFailed(Intent, RelayError),
}
