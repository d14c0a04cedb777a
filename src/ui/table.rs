//! Entries table: column layout and cell formatting.

use ratatui::layout::Constraint;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Cell, Row, Table};

use crate::catalog::{Entry, EntryType};
use crate::ui::theme::{
    ACCENT_AMBER, ACTIVE_HIGHLIGHT, BUDGET_TEXT, DURATION_TEXT, GLOBAL_BORDER, HEADER_TEXT,
    MUTED_TEXT, TAG_MOVIE, TAG_TV_SHOW,
};

const PLACEHOLDER: &str = "-";

const COLUMNS: [(&str, Constraint); 8] = [
    ("Poster", Constraint::Length(6)),
    ("Title", Constraint::Min(20)),
    ("Type", Constraint::Length(9)),
    ("Director", Constraint::Length(18)),
    ("Budget", Constraint::Length(16)),
    ("Location", Constraint::Length(16)),
    ("Duration", Constraint::Length(9)),
    ("Year/Time", Constraint::Length(11)),
];

pub fn entries_table(entries: &[Entry]) -> Table<'_> {
    let header = Row::new(COLUMNS.iter().map(|(title, _)| Cell::from(*title))).style(
        Style::default()
            .fg(ACCENT_AMBER)
            .add_modifier(Modifier::BOLD),
    );

    Table::new(entries.iter().map(entry_row), COLUMNS.map(|(_, width)| width))
        .header(header)
        .row_highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ")
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::RIGHT)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
}

fn entry_row(entry: &Entry) -> Row<'_> {
    let muted = Style::default().fg(MUTED_TEXT);
    let optional = |value: Option<&str>| match value {
        Some(text) if !text.is_empty() => Cell::from(text.to_string()),
        _ => Cell::from(Span::styled(PLACEHOLDER, muted)),
    };

    let poster = if entry.poster_url.is_some() {
        Cell::from("✓")
    } else {
        Cell::from(Span::styled(PLACEHOLDER, muted))
    };

    let kind_color = match entry.kind {
        EntryType::Movie => TAG_MOVIE,
        EntryType::TvShow => TAG_TV_SHOW,
    };

    let budget = match entry.budget {
        Some(value) if value > 0.0 => Cell::from(Span::styled(
            format_budget(value),
            Style::default().fg(BUDGET_TEXT),
        )),
        _ => Cell::from(Span::styled(PLACEHOLDER, muted)),
    };

    let duration = match entry.duration {
        Some(minutes) if minutes > 0.0 => Cell::from(Span::styled(
            format_duration(minutes),
            Style::default().fg(DURATION_TEXT),
        )),
        _ => Cell::from(Span::styled(PLACEHOLDER, muted)),
    };

    Row::new(vec![
        poster,
        Cell::from(Span::styled(
            entry.title.as_str(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Cell::from(Span::styled(entry.kind.label(), Style::default().fg(kind_color))),
        optional(entry.director.as_deref()),
        budget,
        optional(entry.location.as_deref()),
        duration,
        optional(entry.year_time.as_deref()),
    ])
}

/// `$` followed by the whole amount with thousands separators.
pub fn format_budget(value: f64) -> String {
    let rounded = value.round() as u64;
    let digits = rounded.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${grouped}")
}

/// Whole minutes print without a fraction; others keep one decimal.
pub fn format_duration(minutes: f64) -> String {
    if minutes.fract() == 0.0 {
        format!("{minutes:.0} min")
    } else {
        format!("{minutes:.1} min")
    }
}
