use std::time::Duration;

/// Messages specific to SystemState
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemMsg {
    Quit,
    Resize(u16, u16),
    /// Time passed since the previous tick; drives reveal animations
    Tick(Duration),
    ShowError { label: String, text: String },
}

impl SystemMsg {
    pub fn is_frequent(&self) -> bool {
        matches!(self, SystemMsg::Tick(_))
    }
}
