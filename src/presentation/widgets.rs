//! Reusable UI widgets
//!
//! Widgets draw already-derived data and hold no state of their own.

pub mod filter_bar;
pub mod hero;
pub mod section_tabs;
pub mod skill_card;
pub mod status_bar;
pub mod summary;
