//! Self-contained state machines
//!
//! Each model owns its state and changes only through `update(Message)`.

pub mod filter;
pub mod hover;
pub mod role_rotation;
pub mod status_bar;
