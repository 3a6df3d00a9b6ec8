use ratatui::prelude::*;

use crate::{
    core::state::AppState,
    presentation::{palette::Palette, widgets::hero::HeroWidget},
};

/// Hero banner section
#[derive(Debug)]
pub struct HeroComponent;

impl HeroComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, palette: Palette, frame: &mut Frame, area: Rect) {
        frame.render_widget(HeroWidget::new(&state.hero, palette), area);
    }
}

impl Default for HeroComponent {
    fn default() -> Self {
        Self::new()
    }
}
