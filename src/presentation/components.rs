//! Component collection and management
//!
//! Components are stateless renderers that receive state as parameters.

use ratatui::prelude::*;

use crate::{
    core::state::{AppState, Section},
    presentation::{
        labels::PresentError,
        layout,
        palette::Palette,
        widgets::{section_tabs::SectionTabsWidget, status_bar::StatusBarWidget},
    },
};

pub mod hero;
pub mod skills;

pub use hero::HeroComponent;
pub use skills::SkillsComponent;

/// Collection of all components
pub struct Components {
    pub hero: HeroComponent,
    pub skills: SkillsComponent,
}

impl Components {
    pub fn new() -> Self {
        Self {
            hero: HeroComponent::new(),
            skills: SkillsComponent::new(),
        }
    }

    /// Main rendering entry point.
    ///
    /// Colors always come from `state.theme`, the latest value published by
    /// the theme context.
    pub fn render(&self, frame: &mut Frame, state: &AppState) -> Result<(), PresentError> {
        let page = layout::page_layout(frame.area());
        let palette = Palette::from_theme(&state.theme);

        frame.render_widget(SectionTabsWidget::new(state.section, palette), page.tabs);

        match state.section {
            Section::Hero => self.hero.view(state, palette, frame, page.main),
            Section::Skills => self.skills.view(state, palette, frame, page.main)?,
        }

        frame.render_widget(StatusBarWidget::new(&state.status_bar), page.status);
        Ok(())
    }
}

impl Default for Components {
    fn default() -> Self {
        Self::new()
    }
}
