use crate::ui::app::{Notice, NoticeKind};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str = " a: Add │ e: Edit │ d: Delete │ l: Load more │ r: Reload │ q: Quit";

pub struct Footer<'a> {
    notice: Option<&'a Notice>,
}

impl<'a> Footer<'a> {
    pub fn new(notice: Option<&'a Notice>) -> Self {
        Self { notice }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let (text, text_style) = match self.notice {
            Some(notice) => {
                let color = match notice.kind {
                    NoticeKind::Success => STATUS_OK,
                    NoticeKind::Error => STATUS_ERROR,
                };
                (format!(" {}", notice.text), Style::default().fg(color))
            }
            None => (
                HINTS.to_string(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
            ),
        };
        let version = format!("v{} ", VERSION);

        // Padding by char count, not byte count
        let text_width = text.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(text_width)
            .saturating_sub(version_width);

        let dim = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let line = Line::from(vec![
            Span::styled(text, text_style),
            Span::styled(" ".repeat(padding), dim),
            Span::styled(version, dim),
        ]);

        Paragraph::new(line).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
