//! # Relayman - Relay registry for Nostr clients
//!
//! Keeps the ordered list of relays a client connects to, validates custom
//! relay URLs, suggests relays from a public directory, and puts every change
//! behind an explicit confirmation step.
//!
//! ## Architecture Overview
//!
//! This crate is organized around the Elm architecture pattern:
//!
//! - **Model** (`state`): Interaction state (confirmation gate, suggestions, notices)
//! - **Message** (`msg`): User intents and side-effect results
//! - **Update** (`update`): Pure functions that transform state
//! - **Command** (`cmd`): Side effects (registry writes, directory requests)
//!
//! The relay list itself lives in a [`RelayStore`], owned by the [`Runtime`].
//!
//! ## Example Usage
//!
//! ```rust
//! use relayman::core::{cmd::Cmd, msg::relay::RelayMsg, msg::Msg, state::AppState, update::update};
//! use relayman::domain::gate::Intent;
//!
//! let state = AppState::new();
//! let url = String::from("wss://relay.damus.io");
//!
//! // Nothing changes until the request is confirmed
//! let (state, _) = update(Msg::Relay(RelayMsg::RequestRemove(url)), state);
//! let (state, commands) = update(Msg::Relay(RelayMsg::Confirm), state);
//!
//! assert!(state.gate.is_idle());
//! assert_eq!(commands, vec![Cmd::Commit(Intent::remove("wss://relay.damus.io"))]);
//! ```
//!
//! ## Modules
//!
//! - [`core`] - Elm core: state, messages, commands, update
//! - [`domain`] - Relay validation, store, confirmation gate, suggestions
//! - [`infrastructure`] - CLI, configuration, directory client, file persistence
//! - [`integration`] - Runtime loop and command-line runner
//! - [`utils`] - Logging, panic handling, paths

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod utils;

// Re-exports for convenience
pub use crate::core::{cmd::Cmd, msg::Msg, state::AppState, update::update};
pub use domain::{error::RelayError, relay::Relay, store::RelayStore};
pub use integration::runtime::Runtime;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
