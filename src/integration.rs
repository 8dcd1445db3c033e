//! Integration layer
//!
//! This module wires the Elm core to the outside world:
//! - The runtime loop owning the relay store
//! - The command-line front end

pub mod app_runner;
pub mod runtime;
