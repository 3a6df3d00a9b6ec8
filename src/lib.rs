//! # folio - terminal portfolio
//!
//! A hero banner with a rotating role label and a filterable skills
//! showcase, with a theatrical/tech theme toggle. Built with Ratatui on an
//! Elm-like architecture.
//!
//! ## Architecture Overview
//!
//! - **Model** (`core::state`): application state
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): pure functions that transform state
//! - **Command** (`core::cmd`): side effects (timers, theme changes)
//! - **View** (`presentation`): pure view derivation and rendering
//!
//! ## Example Usage
//!
//! ```rust
//! use folio::core::{
//!     msg::{skills::SkillsMsg, Msg},
//!     state::{AppState, Section},
//!     update::update,
//! };
//!
//! let state = AppState::default().with_section(Section::Skills);
//! let (state, commands) = update(Msg::Skills(SkillsMsg::HoverCleared), state);
//!
//! assert!(commands.is_empty());
//! assert_eq!(state.skills.hover.hovered(), None);
//! ```
//!
//! ## Modules
//!
//! - [`core`] - Elm architecture: state, messages, update, commands
//! - [`domain`] - Skill catalog and theme
//! - [`model`] - Small self-contained state machines (filter, hover, roles)
//! - [`presentation`] - Labels, layout, view derivation, widgets
//! - [`infrastructure`] - Terminal, configuration, CLI, timers
//! - [`integration`] - Runtime and main loop

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod model;
pub mod presentation;
pub mod utils;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
