use crate::core::{cmd::Cmd, msg::suggestion::SuggestionMsg};
use crate::domain::{
    relay::Relay,
    suggestion::{self, Suggestion},
};

/// Suggested relays fetched from the directory
///
/// The list is kept when a fetch fails and replaced when one succeeds. When
/// fetches overlap, whichever result arrives last wins. Every mount and
/// unmount starts a new generation; results tagged with an older one are
/// dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionState {
    items: Vec<String>,
    mounted: bool,
    generation: u64,
    in_flight: usize,
    last_error: Option<String>,
}

impl SuggestionState {
    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Whether a fetch result from `generation` would still be applied
    pub fn accepts(&self, generation: u64) -> bool {
        self.mounted && generation == self.generation
    }

    /// Suggestions paired with whether they are already in `relays`
    pub fn annotated(&self, relays: &[Relay]) -> Vec<Suggestion> {
        suggestion::annotate(&self.items, relays)
    }

    /// Suggestion-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SuggestionMsg) -> Vec<Cmd> {
        match msg {
            SuggestionMsg::Mount => {
                self.generation += 1;
                self.mounted = true;
                self.in_flight = 0;
                self.start_fetch()
            }

            SuggestionMsg::Refresh => {
                if !self.mounted {
                    log::debug!("Ignoring refresh while unmounted");
                    return vec![];
                }
                self.start_fetch()
            }

            SuggestionMsg::Loaded { generation, .. } | SuggestionMsg::Failed { generation, .. }
                if !self.accepts(generation) =>
            {
                log::debug!(
                    "Discarding suggestion result from generation {generation} (current {})",
                    self.generation
                );
                vec![]
            }

            SuggestionMsg::Loaded { urls, .. } => {
                self.in_flight = self.in_flight.saturating_sub(1);
                self.items = suggestion::dedup(urls);
                self.last_error = None;
                vec![Cmd::RequestRender]
            }

            SuggestionMsg::Failed { error, .. } => {
                self.in_flight = self.in_flight.saturating_sub(1);
                self.last_error = Some(error.clone());
                vec![
                    Cmd::LogError {
                        message: format!("Failed to fetch suggestions: {error}"),
                    },
                    Cmd::RequestRender,
                ]
            }

            SuggestionMsg::Unmount => {
                self.generation += 1;
                self.mounted = false;
                self.in_flight = 0;
                vec![Cmd::DiscardFetches]
            }
        }
    }

    fn start_fetch(&mut self) -> Vec<Cmd> {
        self.in_flight += 1;
        vec![
            Cmd::FetchSuggestions {
                generation: self.generation,
            },
            Cmd::RequestRender,
        ]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn urls(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn mounted() -> SuggestionState {
        let mut state = SuggestionState::default();
        state.update(SuggestionMsg::Mount);
        state
    }

    fn loaded(generation: u64, items: &[&str]) -> SuggestionMsg {
        SuggestionMsg::Loaded {
            generation,
            urls: urls(items),
        }
    }

    fn failed(generation: u64, error: &str) -> SuggestionMsg {
        SuggestionMsg::Failed {
            generation,
            error: error.to_string(),
        }
    }

    #[test]
    fn test_mount_starts_fetch() {
        let mut state = SuggestionState::default();
        let cmds = state.update(SuggestionMsg::Mount);

        assert_eq!(
            cmds,
            vec![Cmd::FetchSuggestions { generation: 1 }, Cmd::RequestRender]
        );
        assert!(state.is_mounted());
        assert!(state.is_loading());
    }

    #[test]
    fn test_loaded_replaces_list() {
        let mut state = mounted();
        state.update(loaded(1, &["wss://s1", "wss://s2", "wss://s1"]));

        assert_eq!(state.items(), urls(&["wss://s1", "wss://s2"]));
        assert!(!state.is_loading());
        assert_eq!(state.last_error(), None);
    }

    #[test]
    fn test_failure_keeps_stale_list() {
        let mut state = mounted();
        state.update(loaded(1, &["wss://s1"]));
        state.update(SuggestionMsg::Refresh);

        let cmds = state.update(failed(1, "connection refused"));

        assert_eq!(state.items(), urls(&["wss://s1"]));
        assert_eq!(state.last_error(), Some("connection refused"));
        assert!(!state.is_loading());
        assert!(cmds.contains(&Cmd::RequestRender));
    }

    #[test]
    fn test_last_response_wins() {
        let mut state = mounted();
        state.update(SuggestionMsg::Refresh);
        assert!(state.is_loading());

        state.update(loaded(1, &["wss://second"]));
        assert!(state.is_loading());
        state.update(loaded(1, &["wss://first"]));

        assert_eq!(state.items(), urls(&["wss://first"]));
        assert!(!state.is_loading());
    }

    #[test]
    fn test_refresh_ignored_when_unmounted() {
        let mut state = SuggestionState::default();
        assert!(state.update(SuggestionMsg::Refresh).is_empty());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_results_after_unmount_are_discarded() {
        let mut state = mounted();
        state.update(loaded(1, &["wss://s1"]));
        state.update(SuggestionMsg::Refresh);

        let cmds = state.update(SuggestionMsg::Unmount);
        assert_eq!(cmds, vec![Cmd::DiscardFetches]);

        assert!(state.update(loaded(1, &["wss://late"])).is_empty());
        assert!(state.update(failed(1, "late")).is_empty());
        assert_eq!(state.items(), urls(&["wss://s1"]));
        assert_eq!(state.last_error(), None);
    }

    #[test]
    fn test_result_from_previous_mount_is_discarded_after_remount() {
        let mut state = mounted();
        state.update(SuggestionMsg::Unmount);
        let cmds = state.update(SuggestionMsg::Mount);
        assert_eq!(
            cmds[0],
            Cmd::FetchSuggestions { generation: 3 }
        );

        assert!(!state.accepts(1));
        assert!(state.update(loaded(1, &["wss://old-mount"])).is_empty());
        assert!(state.items().is_empty());
        assert!(state.is_loading());

        state.update(loaded(3, &["wss://new-mount"]));
        assert_eq!(state.items(), urls(&["wss://new-mount"]));
        assert!(!state.is_loading());
    }

    #[test]
    fn test_annotated() -> color_eyre::Result<()> {
        let mut state = mounted();
        state.update(loaded(1, &["wss://a", "wss://b"]));
        let relays = vec![Relay::parse("wss://b")?];

        let flags: Vec<bool> = state
            .annotated(&relays)
            .iter()
            .map(|s| s.already_added)
            .collect();
        assert_eq!(flags, vec![false, true]);
        Ok(())
    }
}
