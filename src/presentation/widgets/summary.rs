use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::presentation::{layout, palette::Palette, view::SummaryStat};

pub struct SummaryWidget<'a> {
    stats: &'a [SummaryStat],
    palette: Palette,
}

impl<'a> SummaryWidget<'a> {
    pub fn new(stats: &'a [SummaryStat], palette: Palette) -> Self {
        Self { stats, palette }
    }
}

impl<'a> Widget for SummaryWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let columns = layout::summary_columns(area, self.stats.len());
        for (stat, column) in self.stats.iter().zip(columns) {
            let lines = vec![
                Line::styled(
                    stat.count_label(),
                    Style::default().fg(self.palette.primary).bold(),
                ),
                Line::styled(stat.title, Style::default().bold()),
                Line::styled(stat.description, Style::default().fg(self.palette.muted)),
            ];
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .render(column, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Theme;

    #[test]
    fn test_render() {
        let stats = vec![
            SummaryStat {
                title: "Technical Mastery",
                count: 12,
                description: "Programming languages, frameworks, and development tools",
            },
            SummaryStat {
                title: "Soft Skills",
                count: 3,
                description: "Leadership, communication, and collaborative abilities",
            },
        ];
        let widget = SummaryWidget::new(&stats, Palette::from_theme(&Theme::default()));
        let area = Rect::new(0, 0, 80, 4);
        let mut buffer = Buffer::empty(area);

        widget.render(area, &mut buffer);
        let content: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("12+"));
        assert!(content.contains("3+"));
        assert!(content.contains("Technical Mastery"));
    }
}
