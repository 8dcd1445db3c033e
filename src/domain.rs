//! Domain logic
//!
//! This module contains the relay registry itself:
//! - Relay URL validation
//! - The ordered relay store and its persistence seam
//! - The confirmation gate in front of every mutation
//! - Suggested relays

pub mod error;
pub mod gate;
pub mod relay;
pub mod store;
pub mod suggestion;
