use std::collections::VecDeque;
use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::{cmd::Cmd, cmd_executor::CmdExecutor, msg::Msg, state::AppState, update::update},
    domain::{
        relay::Relay,
        store::{RelayBackend, RelayStore},
        suggestion::{Suggestion, SuggestionFetcher},
    },
};

/// Drives the relay manager: messages in, state and side effects out
///
/// The runtime is the only owner of the `RelayStore`, so every registry
/// mutation goes through `update` and the confirmation gate.
pub struct Runtime<B: RelayBackend> {
    state: AppState,
    store: RelayStore<B>,
    msg_queue: VecDeque<Msg>,
    msg_tx: mpsc::UnboundedSender<Msg>,
    msg_rx: mpsc::UnboundedReceiver<Msg>,
    cmd_executor: CmdExecutor,
}

impl<B: RelayBackend> Runtime<B> {
    /// Create a new Runtime
    pub fn new(store: RelayStore<B>, fetcher: Arc<dyn SuggestionFetcher>) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let cmd_executor = CmdExecutor::new(fetcher, msg_tx.clone());

        Self {
            state: AppState::new(),
            store,
            msg_queue: VecDeque::new(),
            msg_tx,
            msg_rx,
            cmd_executor,
        }
    }

    /// Add render request sender for orchestrated rendering
    pub fn add_render_request_sender(&mut self, render_sender: mpsc::UnboundedSender<()>) {
        self.cmd_executor.set_render_request_sender(render_sender);
    }

    /// Get sender for message transmission
    pub fn get_sender(&self) -> mpsc::UnboundedSender<Msg> {
        self.msg_tx.clone()
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn store(&self) -> &RelayStore<B> {
        &self.store
    }

    pub fn relays(&self) -> &[Relay] {
        self.store.list()
    }

    /// Current suggestions, marked against the registry
    pub fn suggestions(&self) -> Vec<Suggestion> {
        self.state.suggestions.annotated(self.store.list())
    }

    /// Queue a message; nothing happens until it is processed
    pub fn send_msg(&mut self, msg: impl Into<Msg>) {
        self.msg_queue.push_back(msg.into());
    }

    /// Queue a message and process everything that is ready
    pub fn dispatch(&mut self, msg: impl Into<Msg>) -> Result<usize> {
        self.send_msg(msg);
        self.process_all_messages()
    }

    /// Process a single message and execute the commands it yields
    pub fn process_message(&mut self, msg: Msg) -> Result<()> {
        let (new_state, mut commands) = update(msg, std::mem::take(&mut self.state));
        self.state = new_state;

        commands.sort_by_key(Cmd::priority);
        self.cmd_executor
            .execute_commands(&commands, &mut self.store)
    }

    /// Process queued messages and anything already sent through the channel,
    /// including results produced while processing
    pub fn process_all_messages(&mut self) -> Result<usize> {
        let mut processed = 0;
        loop {
            while let Ok(msg) = self.msg_rx.try_recv() {
                self.msg_queue.push_back(msg);
            }

            let Some(msg) = self.msg_queue.pop_front() else {
                break;
            };
            self.process_message(msg)?;
            processed += 1;
        }
        Ok(processed)
    }

    /// Process messages until no suggestion fetch is in flight
    pub async fn settle(&mut self) -> Result<()> {
        self.process_all_messages()?;
        while self.state.suggestions.is_loading() {
            match self.msg_rx.recv().await {
                Some(msg) => {
                    self.msg_queue.push_back(msg);
                    self.process_all_messages()?;
                }
                None => break,
            }
        }
        Ok(())
    }
}
