use ratatui::{prelude::*, widgets::Tabs};
use strum::IntoEnumIterator;

use crate::{core::state::Section, presentation::palette::Palette};

pub struct SectionTabsWidget {
    current: Section,
    palette: Palette,
}

impl SectionTabsWidget {
    pub fn new(current: Section, palette: Palette) -> Self {
        Self { current, palette }
    }

    pub fn titles(&self) -> Vec<&'static str> {
        Section::iter().map(Section::title).collect()
    }

    fn selected_index(&self) -> usize {
        Section::iter()
            .position(|section| section == self.current)
            .unwrap_or_default()
    }
}

impl Widget for SectionTabsWidget {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Tabs::new(self.titles())
            .select(self.selected_index())
            .style(Style::default().fg(self.palette.muted).bg(Color::Black))
            .highlight_style(Style::default().fg(self.palette.primary).reversed())
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::Theme;

    #[test]
    fn test_titles() {
        let widget = SectionTabsWidget::new(Section::Hero, Palette::from_theme(&Theme::default()));
        assert_eq!(widget.titles(), vec!["Home", "Skills"]);
        assert_eq!(widget.selected_index(), 0);
    }

    #[test]
    fn test_render() {
        let widget =
            SectionTabsWidget::new(Section::Skills, Palette::from_theme(&Theme::default()));
        let area = Rect::new(0, 0, 40, 1);
        let mut buffer = Buffer::empty(area);

        widget.render(area, &mut buffer);
        let content: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("Home"));
        assert!(content.contains("Skills"));
    }
}
