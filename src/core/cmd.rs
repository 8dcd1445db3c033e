use serde::{Deserialize, Serialize};

use crate::domain::gate::Intent;

/// Elm-like command definitions
/// Represents side effects (registry writes, network requests, logging)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    // Registry-related commands
    Commit(Intent),

    // Directory-related commands
    /// Fetch suggestions on behalf of mount `generation`
    FetchSuggestions {
        generation: u64,
    },
    /// Drop the results of fetches still in flight
    DiscardFetches,

    // UI-related commands
    RequestRender,

    // Logging related
    LogError {
        message: String,
    },
    LogInfo {
        message: String,
    },
}

impl Cmd {
    /// Get command priority (smaller numbers = higher priority)
    pub fn priority(&self) -> u8 {
        match self {
            // Registry writes come first so a render sees the new list
            Cmd::Commit(..) => 0,

            Cmd::RequestRender => 1,

            Cmd::FetchSuggestions { .. } | Cmd::DiscardFetches => 2,

            // Logging have lowest priority
            Cmd::LogError { .. } | Cmd::LogInfo { .. } => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_cmd_priority() {
        assert_eq!(Cmd::Commit(Intent::remove("wss://a")).priority(), 0);
        assert_eq!(Cmd::RequestRender.priority(), 1);
        assert_eq!(Cmd::FetchSuggestions { generation: 1 }.priority(), 2);
        assert_eq!(Cmd::DiscardFetches.priority(), 2);
        assert_eq!(
            Cmd::LogInfo {
                message: "test".to_string()
            }
            .priority(),
            4
        );
    }

    #[test]
    fn test_cmd_sort_by_priority() {
        let mut cmds = vec![
            Cmd::LogInfo {
                message: "test".to_string(),
            },
            Cmd::FetchSuggestions { generation: 1 },
            Cmd::RequestRender,
            Cmd::Commit(Intent::add("wss://a")),
        ];
        cmds.sort_by_key(Cmd::priority);

        assert_eq!(cmds[0], Cmd::Commit(Intent::add("wss://a")));
        assert_eq!(cmds[1], Cmd::RequestRender);
        assert_eq!(cmds[2], Cmd::FetchSuggestions { generation: 1 });
    }
}
