//! Core Elm Architecture implementation
//!
//! This module contains the core components of the Elm architecture:
//! - Messages
//! - Application state management
//! - Update logic and commands
//! - Terminal event translation

pub mod cmd;
pub mod msg;
pub mod state;
pub mod translator;
pub mod update;
