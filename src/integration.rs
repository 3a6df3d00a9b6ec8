//! Application runtime wiring
//!
//! - Runtime: state plus message queue around `update`
//! - CmdExecutor: side effects requested by `update`
//! - Renderer and AppRunner: drawing and the main event loop

pub mod app_runner;
pub mod cmd_executor;
pub mod renderer;
pub mod runtime;
