use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::layout::Rect;
use tokio::sync::Mutex;

use crate::{
    core::state::AppState, infrastructure::tui, presentation::components::Components,
};

#[derive(Default)]
pub struct Renderer {
    components: Components,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            components: Components::new(),
        }
    }

    /// Draw `state` and return the area that was drawn into
    pub async fn render(
        &self,
        tui: &Arc<Mutex<dyn tui::TuiLike + Send>>,
        state: &AppState,
    ) -> Result<Rect> {
        let mut guard = tui.lock().await;
        let mut area = Rect::default();
        let mut outcome = Ok(());
        let mut draw = |f: &mut ratatui::Frame<'_>| {
            area = f.area();
            outcome = self.components.render(f, state);
        };
        guard.draw(&mut draw)?;
        outcome?;
        Ok(area)
    }
}
