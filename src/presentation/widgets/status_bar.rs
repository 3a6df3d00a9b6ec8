use ratatui::{prelude::*, widgets::Paragraph};

use crate::model::status_bar::StatusBar;

pub struct StatusBarWidget<'a> {
    status_bar: &'a StatusBar,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(status_bar: &'a StatusBar) -> Self {
        Self { status_bar }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let Some(notice) = self.status_bar.notice() else {
            return;
        };
        let style = if notice.is_error {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Gray).italic()
        };
        Paragraph::new(Span::styled(notice.render(), style)).render(area, buf);
    }
}
