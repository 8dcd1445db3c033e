use serde::{Deserialize, Serialize};

/// Messages for the suggested relay list
///
/// Fetch results carry the generation of the mount that requested them, so
/// a result from an earlier mount can be told apart after a remount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuggestionMsg {
    // Screen lifecycle
    Mount,
    Unmount,

    // Fetching
    Refresh,
    Loaded { generation: u64, urls: Vec<String> },
    Failed { generation: u64, error: String },
}
