use strum::Display;

pub mod hero;
pub mod skills;
pub mod system;

use crate::core::state::Section;
use crate::domain::Theme;
use hero::HeroMsg;
use skills::SkillsMsg;
use system::SystemMsg;

/// Domain messages representing user intent and timer events.
/// These are processed by the update function.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Section navigation
    Navigation(NavigationMsg),

    // Skills section operations (delegated to SkillsState)
    Skills(SkillsMsg),

    // Hero banner operations (delegated to HeroState)
    Hero(HeroMsg),

    // Theme operations
    Theme(ThemeMsg),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum NavigationMsg {
    SectionSelected(Section),
    NextSection,
    PreviousSection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeMsg {
    /// The user asked for the other mode; the runner's ThemeContext applies it
    ToggleRequested,
    /// ThemeContext published a new theme
    Changed(Theme),
}

impl Msg {
    /// Helper to exclude frequent messages from debug logs
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::System(system) => system.is_frequent(),
            Msg::Skills(skills) => skills.is_frequent(),
            _ => false,
        }
    }
}
