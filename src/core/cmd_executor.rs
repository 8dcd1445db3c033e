use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::{
    core::{
        cmd::Cmd,
        msg::{relay::RelayMsg, suggestion::SuggestionMsg, Msg},
    },
    domain::{
        error::RelayError,
        store::{RelayBackend, RelayStore},
        suggestion::SuggestionFetcher,
    },
};

/// Command executor that carries out side effects and reports back as messages
pub struct CmdExecutor {
    fetcher: Arc<dyn SuggestionFetcher>,
    msg_sender: mpsc::UnboundedSender<Msg>,
    render_req_sender: Option<mpsc::UnboundedSender<()>>,
    // Cancelled on unmount; fetches holding an old token drop their result
    fetch_token: CancellationToken,
}

impl CmdExecutor {
    pub fn new(fetcher: Arc<dyn SuggestionFetcher>, msg_sender: mpsc::UnboundedSender<Msg>) -> Self {
        Self {
            fetcher,
            msg_sender,
            render_req_sender: None,
            fetch_token: CancellationToken::new(),
        }
    }

    /// Inject render request sender for view-orchestrated rendering.
    pub fn set_render_request_sender(&mut self, sender: mpsc::UnboundedSender<()>) {
        self.render_req_sender = Some(sender);
    }

    /// Execute a single command
    pub fn execute_command<B: RelayBackend>(
        &mut self,
        cmd: &Cmd,
        store: &mut RelayStore<B>,
    ) -> Result<()> {
        match cmd {
            Cmd::Commit(intent) => {
                let msg = match store.apply(intent) {
                    Ok(()) => RelayMsg::Committed(intent.clone()),
                    Err(e) => RelayMsg::CommitFailed(intent.clone(), e),
                };
                self.msg_sender.send(Msg::Relay(msg))?;
            }

            Cmd::FetchSuggestions { generation } => self.spawn_fetch(*generation),

            Cmd::DiscardFetches => {
                self.fetch_token.cancel();
                self.fetch_token = CancellationToken::new();
            }

            Cmd::RequestRender => {
                if let Some(sender) = &self.render_req_sender {
                    // The view may already be gone
                    let _ = sender.send(());
                }
            }

            Cmd::LogError { message } => {
                log::error!("{message}");
            }

            Cmd::LogInfo { message } => {
                log::info!("{message}");
            }
        }

        Ok(())
    }

    /// Execute multiple commands, stopping at the first failure
    pub fn execute_commands<B: RelayBackend>(
        &mut self,
        cmds: &[Cmd],
        store: &mut RelayStore<B>,
    ) -> Result<()> {
        for cmd in cmds {
            self.execute_command(cmd, store)?;
        }
        Ok(())
    }

    // The fetch runs in its own task so that a panic or abort still
    // produces a `Failed` result and the in-flight count goes down.
    fn spawn_fetch(&self, generation: u64) {
        let fetcher = Arc::clone(&self.fetcher);
        let sender = self.msg_sender.clone();
        let token = self.fetch_token.clone();

        let fetch = tokio::spawn(async move { fetcher.fetch_suggestions().await });
        tokio::spawn(async move {
            let result = match fetch.await {
                Ok(result) => result,
                Err(e) => {
                    log::error!("Suggestion fetch task ended abnormally: {e}");
                    Err(RelayError::Fetch(String::from("fetch task ended unexpectedly")))
                }
            };
            if token.is_cancelled() {
                log::debug!("Discarding suggestions fetched after unmount");
                return;
            }

            let msg = match result {
                Ok(urls) => {
                    log::info!("Fetched {} suggested relays", urls.len());
                    SuggestionMsg::Loaded { generation, urls }
                }
                Err(RelayError::Fetch(error)) => SuggestionMsg::Failed { generation, error },
                Err(e) => SuggestionMsg::Failed {
                    generation,
                    error: e.to_string(),
                },
            };
            if sender.send(Msg::Suggestion(msg)).is_err() {
                log::debug!("Runtime dropped before suggestions arrived");
            }
        });
    }
}
