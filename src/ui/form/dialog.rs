use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::catalog::{DraftField, EntryType};
use crate::ui::form::state::FormState;
use crate::ui::layout::centered_rect;
use crate::ui::theme::{
    ACCENT_AMBER, ACCENT_YELLOW, ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER,
    STATUS_ERROR,
};

const LABEL_WIDTH: usize = 16;

pub fn render_form_dialog(frame: &mut Frame, state: &FormState) {
    let FormState::Visible {
        mode,
        draft,
        focused,
        submitting,
        error,
    } = state
    else {
        return;
    };

    let mut lines: Vec<Line> = Vec::with_capacity(DraftField::ALL.len() + 4);

    for field in DraftField::ALL {
        let is_focused = field == *focused;
        let required = if field == DraftField::Title { "*" } else { " " };
        let label = format!("{:>width$}{} ", field.label(), required, width = LABEL_WIDTH);

        let value = match draft.text(field) {
            Some(text) if is_focused => Span::styled(
                format!("{}▏", text),
                Style::default().fg(HEADER_TEXT),
            ),
            Some("") => Span::styled("-", Style::default().fg(MUTED_TEXT)),
            Some(text) => Span::styled(text.to_string(), Style::default().fg(HEADER_TEXT)),
            None => type_selector(draft.kind),
        };

        let mut line = Line::from(vec![
            Span::styled(label, Style::default().fg(ACCENT_AMBER)),
            value,
        ]);
        if is_focused {
            line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        lines.push(line);
    }

    lines.push(Line::from(""));
    if let Some(message) = error {
        lines.push(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(STATUS_ERROR),
        )));
    }
    let hint = if *submitting {
        Span::styled("Saving…", Style::default().fg(ACCENT_YELLOW))
    } else {
        Span::styled(
            "Enter: Save │ Esc: Cancel │ Tab/↑↓: Field │ Space/←→: Type",
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
        )
    };
    lines.push(Line::from(hint));

    let rect = centered_rect(70, 70, frame.area());
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .title(format!(" {} ", mode.title()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(POPUP_BORDER)),
        ),
        rect,
    );
}

fn type_selector(kind: EntryType) -> Span<'static> {
    let text = match kind {
        EntryType::Movie => "[Movie]  TV Show ",
        EntryType::TvShow => " Movie  [TV Show]",
    };
    Span::styled(text, Style::default().fg(HEADER_TEXT))
}
