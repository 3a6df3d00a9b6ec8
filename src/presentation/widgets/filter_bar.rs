use ratatui::{prelude::*, widgets::Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::presentation::{palette::Palette, view::FilterButton};

pub struct FilterBarWidget<'a> {
    buttons: &'a [FilterButton],
    palette: Palette,
}

impl<'a> FilterBarWidget<'a> {
    pub fn new(buttons: &'a [FilterButton], palette: Palette) -> Self {
        Self { buttons, palette }
    }

    fn button_text(button: &FilterButton) -> String {
        match button.icon {
            Some(icon) => format!(" {icon} {} ", button.title),
            None => format!(" {} ", button.title),
        }
    }

    /// Icon only, for terminals too narrow for the full titles
    fn compact_text(button: &FilterButton) -> String {
        match button.icon {
            Some(icon) => format!(" {icon} "),
            None => " All ".to_owned(),
        }
    }

    fn texts(&self, width: u16) -> Vec<String> {
        let full: Vec<String> = self.buttons.iter().map(Self::button_text).collect();
        let separators = self.buttons.len().saturating_sub(1);
        let needed = full.iter().map(|text| text.width()).sum::<usize>() + separators;
        if needed <= usize::from(width) {
            full
        } else {
            self.buttons.iter().map(Self::compact_text).collect()
        }
    }
}

impl<'a> Widget for FilterBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let selected = Style::default().fg(Color::Black).bg(self.palette.primary).bold();
        let unselected = Style::default().fg(self.palette.muted);

        let mut spans = Vec::with_capacity(self.buttons.len() * 2);
        let texts = self.texts(area.width);
        for (index, (button, text)) in self.buttons.iter().zip(texts).enumerate() {
            if index > 0 {
                spans.push(Span::raw(" "));
            }
            let style = if button.selected { selected } else { unselected };
            spans.push(Span::styled(text, style));
        }

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
