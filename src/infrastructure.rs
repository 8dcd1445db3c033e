//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - CLI argument processing
//! - Configuration loading
//! - The relay directory HTTP client
//! - File-backed relay persistence

pub mod cli;
pub mod config;
pub mod directory;
pub mod file_backend;
