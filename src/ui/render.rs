use crate::ui::app::{App, Popup};
use crate::ui::footer::Footer;
use crate::ui::form::render_form_dialog;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions, split_body};
use crate::ui::table::entries_table;
use crate::ui::theme::{ACCENT_YELLOW, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, STATUS_ERROR};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, TableState};
use ratatui::Frame;

const CONFIRM_WIDTH: u16 = 50;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new(app.base_url(), app.list().len());
    frame.render_widget(header_widget.widget(), header);

    let (table_area, more_area) = split_body(body);
    frame.render_widget(Clear, body);
    let mut table_state = TableState::default();
    if !app.list().is_empty() {
        table_state.select(Some(app.selected()));
    }
    frame.render_stateful_widget(entries_table(&app.list().entries), table_area, &mut table_state);
    frame.render_widget(more_row(app), more_area);

    let footer_widget = Footer::new(app.notice());
    frame.render_widget(footer_widget.widget(footer), footer);

    if let Some(Popup::ConfirmDelete { title, .. }) = app.popup() {
        render_confirm_delete(frame, title);
    }

    render_form_dialog(frame, app.form());
}

/// The line under the table: load-more affordance or end marker.
fn more_row(app: &App) -> Paragraph<'static> {
    let list = app.list();
    let (text, style) = if list.loading {
        ("Loading…", Style::default().fg(ACCENT_YELLOW))
    } else if list.has_more {
        (
            "Load more (l)",
            Style::default()
                .fg(ACCENT_YELLOW)
                .add_modifier(Modifier::BOLD),
        )
    } else if list.is_empty() {
        ("No entries yet (a to add)", Style::default().fg(MUTED_TEXT))
    } else {
        (
            "No more entries",
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
        )
    };
    Paragraph::new(Line::from(Span::styled(text, style))).alignment(Alignment::Center)
}

fn render_confirm_delete(frame: &mut Frame<'_>, title: &str) {
    let lines = vec![
        Line::from(Span::styled(
            "Are you sure you want to delete this entry?",
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(Span::styled(
            format!("\"{}\"", title),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD)),
            Span::styled(": Yes    ", Style::default().fg(HEADER_TEXT)),
            Span::styled("n", Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD)),
            Span::styled(": No", Style::default().fg(HEADER_TEXT)),
        ]),
    ];

    let height = lines.len() as u16 + 2;
    let rect = centered_rect_by_size(CONFIRM_WIDTH, height, frame.area());
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .title(" Delete this entry? ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(POPUP_BORDER)),
        ),
        rect,
    );
}
