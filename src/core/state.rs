use std::sync::Arc;

use strum::{Display, EnumIter, EnumString};

pub mod hero;
pub mod skills;
pub mod system;

use crate::{
    domain::{MismatchPolicy, SkillCatalog, Theme},
    model::status_bar::StatusBar,
};
use hero::HeroState;
use skills::SkillsState;
use system::SystemState;

/// Page sections, in navigation order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Section {
    #[default]
    Hero,
    Skills,
}

impl Section {
    pub fn title(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::Skills => "Skills",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Section::Hero => Section::Skills,
            Section::Skills => Section::Hero,
        }
    }

    pub fn previous(self) -> Self {
        // Two sections: previous and next coincide
        self.next()
    }
}

/// Unified application state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub section: Section,
    pub hero: HeroState,
    pub skills: SkillsState,
    pub system: SystemState,
    pub status_bar: StatusBar,
    /// Latest theme published by the ThemeContext
    pub theme: Theme,
}

impl AppState {
    pub fn new(catalog: Arc<SkillCatalog>, theme: Theme) -> Self {
        Self {
            section: Section::default(),
            hero: HeroState::default(),
            skills: SkillsState::new(catalog),
            system: SystemState::default(),
            status_bar: StatusBar::default(),
            theme,
        }
    }

    pub fn with_hero(mut self, hero: HeroState) -> Self {
        self.hero = hero;
        self
    }

    pub fn with_policy(mut self, policy: MismatchPolicy) -> Self {
        self.system.policy = policy;
        self
    }

    pub fn with_section(mut self, section: Section) -> Self {
        self.section = section;
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(SkillCatalog::default()), Theme::default())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_section_navigation() {
        assert_eq!(Section::Hero.next(), Section::Skills);
        assert_eq!(Section::Skills.next(), Section::Hero);
        assert_eq!(Section::Skills.previous(), Section::Hero);
    }

    #[test]
    fn test_section_from_str() {
        assert_eq!(Section::from_str("skills"), Ok(Section::Skills));
        assert!(Section::from_str("projects").is_err());
    }

    #[test]
    fn test_default_state() {
        let state = AppState::default();
        assert_eq!(state.section, Section::Hero);
        assert!(!state.system.should_quit);
        assert!(state.status_bar.text().is_none());
    }
}
