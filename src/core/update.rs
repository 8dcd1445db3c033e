use crate::{
    core::cmd::Cmd,
    core::msg::{relay::RelayMsg, suggestion::SuggestionMsg, system::SystemMsg, Msg},
    core::state::AppState,
    domain::{
        error::RelayError,
        gate::{Intent, Operation},
        relay,
    },
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        // A failed fetch also raises a notice, unless the result is stale
        Msg::Suggestion(SuggestionMsg::Failed { generation, error }) => {
            let current = state.suggestions.accepts(generation);
            let mut commands = state.suggestions.update(SuggestionMsg::Failed {
                generation,
                error: error.clone(),
            });
            if current {
                let notice = RelayError::Fetch(error).to_string();
                commands.extend(state.system.update(SystemMsg::ShowError(notice)));
            }
            (state, commands)
        }

        // Suggestion messages (delegated to SuggestionState)
        Msg::Suggestion(suggestion_msg) => {
            let commands = state.suggestions.update(suggestion_msg);
            (state, commands)
        }

        Msg::Relay(relay_msg) => update_relay(relay_msg, state),
    }
}

fn update_relay(msg: RelayMsg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        RelayMsg::RequestAdd(url) => request(Intent::add(url), state),

        // Custom entries are checked before the user is even asked
        RelayMsg::RequestAddCustom(url) => {
            if relay::validate(&url) {
                request(Intent::add(url), state)
            } else {
                let error = RelayError::Validation(url);
                let mut commands = state.system.update(SystemMsg::ShowError(error.to_string()));
                commands.push(Cmd::LogError {
                    message: error.to_string(),
                });
                (state, commands)
            }
        }

        RelayMsg::RequestRemove(url) => request(Intent::remove(url), state),

        RelayMsg::Confirm => match state.gate.confirm() {
            Some(intent) => (state, vec![Cmd::Commit(intent)]),
            None => (
                state,
                vec![Cmd::LogInfo {
                    message: String::from("Nothing to confirm"),
                }],
            ),
        },

        RelayMsg::Cancel => match state.gate.cancel() {
            Some(intent) => (
                state,
                vec![
                    Cmd::LogInfo {
                        message: format!("Cancelled: {}", intent.prompt()),
                    },
                    Cmd::RequestRender,
                ],
            ),
            None => (state, vec![]),
        },

        RelayMsg::Committed(intent) => {
            let text = match intent.operation {
                Operation::Add => format!("Added relay: {}", intent.url),
                Operation::Remove => format!("Removed relay: {}", intent.url),
            };
            let mut commands = state.system.update(SystemMsg::ShowInfo(text.clone()));
            commands.push(Cmd::LogInfo { message: text });
            (state, commands)
        }

        RelayMsg::CommitFailed(intent, error) => {
            let mut commands = state.system.update(SystemMsg::ShowError(error.to_string()));
            commands.push(Cmd::LogError {
                message: format!("Failed to {} {}: {error}", intent.operation, intent.url),
            });
            (state, commands)
        }
    }
}

fn request(intent: Intent, mut state: AppState) -> (AppState, Vec<Cmd>) {
    let mut commands = vec![];
    if let Some(stale) = state.gate.request(intent) {
        commands.push(Cmd::LogInfo {
            message: format!("Discarded stale request: {}", stale.prompt()),
        });
    }
    commands.push(Cmd::RequestRender);
    (state, commands)
}
