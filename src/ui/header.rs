use crate::ui::theme::{ACCENT_AMBER, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const TITLE: &str = "Favorite Movies & TV Shows";

pub struct Header<'a> {
    base_url: &'a str,
    loaded: usize,
}

impl<'a> Header<'a> {
    pub fn new(base_url: &'a str, loaded: usize) -> Self {
        Self { base_url, loaded }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                TITLE,
                Style::default()
                    .fg(ACCENT_AMBER)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(self.base_url.to_string(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} loaded", self.loaded), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
