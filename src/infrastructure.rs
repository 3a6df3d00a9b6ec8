//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - TUI foundation
//! - CLI argument processing
//! - Configuration loading
//! - The role label timer

pub mod cli;
pub mod config;
pub mod role_ticker;
pub mod tui;
