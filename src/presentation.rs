//! Presentation layer
//!
//! Pure view derivation (labels, layout, grid) plus the widgets and
//! components that draw it.

pub mod components;
pub mod config;
pub mod labels;
pub mod layout;
pub mod palette;
pub mod skill_grid;
pub mod view;
pub mod widgets;
