use ratatui::layout::Rect;

use crate::{
    core::{cmd::Cmd, msg::system::SystemMsg},
    domain::MismatchPolicy,
};

/// System-related state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemState {
    pub should_quit: bool,
    /// Last known terminal size; used for pointer hit-testing
    pub viewport: Rect,
    pub policy: MismatchPolicy,
}

impl Default for SystemState {
    fn default() -> Self {
        Self {
            should_quit: false,
            viewport: Rect {
                x: 0,
                y: 0,
                width: 80,
                height: 24,
            },
            policy: MismatchPolicy::default(),
        }
    }
}

impl SystemState {
    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }
            SystemMsg::Resize(width, height) => {
                self.viewport = Rect {
                    x: 0,
                    y: 0,
                    width,
                    height,
                };
                vec![]
            }
            // Tick and ShowError are routed to other sub-states by update()
            SystemMsg::Tick(_) | SystemMsg::ShowError { .. } => vec![],
        }
    }
}
