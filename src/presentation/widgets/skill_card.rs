use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, LineGauge, Paragraph},
};

use crate::presentation::{palette::Palette, skill_grid::SkillCard};

pub struct SkillCardWidget<'a> {
    card: &'a SkillCard,
    palette: Palette,
}

impl<'a> SkillCardWidget<'a> {
    pub fn new(card: &'a SkillCard, palette: Palette) -> Self {
        Self { card, palette }
    }

    fn title(&self) -> String {
        if self.card.icon.is_empty() {
            self.card.name.clone()
        } else {
            format!("{} {}", self.card.icon, self.card.name)
        }
    }
}

impl<'a> Widget for SkillCardWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let border_style = if self.card.hovered {
            Style::default().fg(self.palette.primary)
        } else {
            Style::default().fg(self.palette.muted).dim()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let [name_area, gauge_area, popover_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let mut name_style = Style::default().fg(self.palette.primary);
        if self.card.hovered {
            name_style = name_style.bold();
        }
        Paragraph::new(Span::styled(self.title(), name_style))
            .alignment(Alignment::Center)
            .render(name_area, buf);

        LineGauge::default()
            .ratio(self.card.fill.clamp(0.0, 1.0))
            .label(self.card.percent_label())
            .filled_style(Style::default().fg(self.palette.secondary))
            .unfilled_style(Style::default().fg(self.palette.muted).dim())
            .render(gauge_area, buf);

        if let Some(popover) = &self.card.popover {
            Paragraph::new(Span::styled(
                format!(" {popover} "),
                Style::default().fg(Color::Black).bg(self.palette.primary),
            ))
            .alignment(Alignment::Center)
            .render(popover_area, buf);
        }
    }
}
