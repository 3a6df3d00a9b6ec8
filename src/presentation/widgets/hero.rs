use ratatui::{prelude::*, widgets::Paragraph};

use crate::{core::state::hero::HeroState, presentation::palette::Palette};

/// Brain, code and sparkles
const ROLE_ICONS: [&str; 3] = ["◉", "</>", "✦"];

pub const CALL_TO_ACTIONS: [&str; 2] = ["View Projects", "Contact Me"];

pub struct HeroWidget<'a> {
    hero: &'a HeroState,
    palette: Palette,
}

impl<'a> HeroWidget<'a> {
    pub fn new(hero: &'a HeroState, palette: Palette) -> Self {
        Self { hero, palette }
    }

    pub fn greeting(&self) -> String {
        format!("Hi, I'm {}", self.hero.profile.name)
    }

    fn role_line(&self) -> Line<'a> {
        let rotation = &self.hero.rotation;
        let mut style = Style::default().fg(self.palette.secondary).bold();
        if rotation.is_fading() {
            style = style.dim();
        }
        Line::styled(rotation.current_role().unwrap_or_default().to_owned(), style)
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let icon_style = Style::default().fg(self.palette.highlight);
        let icons: Vec<Span> = ROLE_ICONS
            .iter()
            .enumerate()
            .flat_map(|(index, icon)| {
                let separator = if index == 0 { "" } else { "   " };
                [Span::raw(separator), Span::styled(*icon, icon_style)]
            })
            .collect();

        let button_style = Style::default().fg(Color::Black).bg(self.palette.primary);
        let outline_style = Style::default().fg(self.palette.primary);
        let buttons = Line::from(vec![
            Span::styled(format!(" {} ", CALL_TO_ACTIONS[0]), button_style),
            Span::raw("   "),
            Span::styled(format!("[ {} ]", CALL_TO_ACTIONS[1]), outline_style),
        ]);

        vec![
            Line::styled(
                self.greeting(),
                Style::default().fg(self.palette.primary).bold(),
            ),
            Line::default(),
            Line::from(icons),
            Line::default(),
            self.role_line(),
            Line::default(),
            Line::styled(
                self.hero.profile.tagline.clone(),
                Style::default().fg(self.palette.muted),
            ),
            Line::default(),
            buttons,
        ]
    }
}

impl<'a> Widget for HeroWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let lines = self.lines();
        let height = lines.len() as u16;
        let [_, body, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .areas(area);

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(body, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::Theme,
        model::role_rotation::Message,
    };

    fn render_to_string(hero: &HeroState) -> String {
        let widget = HeroWidget::new(hero, Palette::from_theme(&Theme::default()));
        let area = Rect::new(0, 0, 80, 20);
        let mut buffer = Buffer::empty(area);
        widget.render(area, &mut buffer);
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_render_banner() {
        let mut hero = HeroState::default();
        hero.mount();

        let content = render_to_string(&hero);
        assert!(content.contains("Hi, I'm MANOJ MS"));
        assert!(content.contains("AI Engineer"));
        assert!(content.contains("View Projects"));
        assert!(content.contains("Contact Me"));
        assert!(content.contains("Bridging the gap"));
    }

    #[test]
    fn test_render_follows_rotation() {
        let mut hero = HeroState::default();
        hero.mount();
        let generation = hero.rotation.generation().unwrap();
        for _ in 0..3 {
            hero.rotation.update(Message::PhaseElapsed { generation });
        }

        let content = render_to_string(&hero);
        assert!(content.contains("DevOps Engineer"));
        assert!(!content.contains("AI Engineer"));
    }
}
