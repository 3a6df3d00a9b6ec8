use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::{
    core::state::AppState,
    presentation::{
        labels::PresentError,
        layout,
        palette::Palette,
        view,
        widgets::{filter_bar::FilterBarWidget, skill_card::SkillCardWidget, summary::SummaryWidget},
    },
};

pub const TITLE: &str = "Skills & Expertise";
pub const SUBTITLE: &str = "A comprehensive toolkit spanning artificial intelligence, full-stack development, and the soft skills gained from years of theatrical performance.";

/// Skills showcase section: header, filter bar, card grid and summary
#[derive(Debug)]
pub struct SkillsComponent;

impl SkillsComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(
        &self,
        state: &AppState,
        palette: Palette,
        frame: &mut Frame,
        area: Rect,
    ) -> Result<(), PresentError> {
        let skills_view = view::derive_view(&state.skills, &state.theme, state.system.policy)?;
        let areas = layout::skills_layout(area);

        let header = vec![
            Line::styled(TITLE, Style::default().fg(palette.primary).bold()),
            Line::styled(SUBTITLE, Style::default().fg(palette.muted)),
        ];
        frame.render_widget(
            Paragraph::new(header)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            areas.header,
        );

        frame.render_widget(
            FilterBarWidget::new(&skills_view.filters, palette),
            areas.filters,
        );

        let window =
            layout::grid_window(areas.grid, skills_view.cards.len(), state.skills.scroll());
        for (index, card_area) in &window.cards {
            frame.render_widget(
                SkillCardWidget::new(&skills_view.cards[*index], palette),
                *card_area,
            );
        }
        if let Some(label) = window.overflow_label() {
            frame.render_widget(
                Paragraph::new(label)
                    .style(Style::default().fg(palette.muted))
                    .alignment(Alignment::Center),
                areas.overflow,
            );
        }

        frame.render_widget(
            SummaryWidget::new(&skills_view.summary, palette),
            areas.summary,
        );
        Ok(())
    }
}

impl Default for SkillsComponent {
    fn default() -> Self {
        Self::new()
    }
}
