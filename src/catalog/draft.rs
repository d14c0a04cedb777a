//! Editable form values and their normalization into [`EntryInput`].

use thiserror::Error;

use super::entry::{Entry, EntryInput, EntryType};

/// Fields of the entry form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DraftField {
    #[default]
    Title,
    Type,
    Director,
    Budget,
    Location,
    Duration,
    YearTime,
    PosterUrl,
    Notes,
}

impl DraftField {
    pub const ALL: [DraftField; 9] = [
        DraftField::Title,
        DraftField::Type,
        DraftField::Director,
        DraftField::Budget,
        DraftField::Location,
        DraftField::Duration,
        DraftField::YearTime,
        DraftField::PosterUrl,
        DraftField::Notes,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DraftField::Title => "Title",
            DraftField::Type => "Type",
            DraftField::Director => "Director",
            DraftField::Budget => "Budget",
            DraftField::Location => "Location",
            DraftField::Duration => "Duration (min)",
            DraftField::YearTime => "Year/Time",
            DraftField::PosterUrl => "Poster URL",
            DraftField::Notes => "Notes",
        }
    }

    pub fn next(self) -> Self {
        let index = self.index();
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let index = self.index();
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|field| *field == self)
            .unwrap_or(0)
    }
}

impl std::fmt::Display for DraftField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Reasons a draft cannot become an [`EntryInput`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Please input the title")]
    MissingTitle,

    #[error("{field} must be a number, got '{value}'")]
    NotANumber { field: DraftField, value: String },

    #[error("{field} must not be negative")]
    Negative { field: DraftField },
}

impl DraftError {
    /// The form field the error points at.
    pub fn field(&self) -> DraftField {
        match self {
            DraftError::MissingTitle => DraftField::Title,
            DraftError::NotANumber { field, .. } | DraftError::Negative { field } => *field,
        }
    }
}

/// Raw form values as typed by the user.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntryDraft {
    pub title: String,
    pub kind: EntryType,
    pub director: String,
    pub budget: String,
    pub location: String,
    pub duration: String,
    pub year_time: String,
    pub poster_url: String,
    pub notes: String,
}

impl EntryDraft {
    /// Pre-fills the form for editing an existing entry.
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            title: entry.title.clone(),
            kind: entry.kind,
            director: entry.director.clone().unwrap_or_default(),
            budget: entry.budget.map(format_number).unwrap_or_default(),
            location: entry.location.clone().unwrap_or_default(),
            duration: entry.duration.map(format_number).unwrap_or_default(),
            year_time: entry.year_time.clone().unwrap_or_default(),
            poster_url: entry.poster_url.clone().unwrap_or_default(),
            notes: entry.notes.clone().unwrap_or_default(),
        }
    }

    /// Text of a field; `None` for the type selector.
    pub fn text(&self, field: DraftField) -> Option<&str> {
        let text = match field {
            DraftField::Title => &self.title,
            DraftField::Type => return None,
            DraftField::Director => &self.director,
            DraftField::Budget => &self.budget,
            DraftField::Location => &self.location,
            DraftField::Duration => &self.duration,
            DraftField::YearTime => &self.year_time,
            DraftField::PosterUrl => &self.poster_url,
            DraftField::Notes => &self.notes,
        };
        Some(text.as_str())
    }

    pub fn text_mut(&mut self, field: DraftField) -> Option<&mut String> {
        let text = match field {
            DraftField::Title => &mut self.title,
            DraftField::Type => return None,
            DraftField::Director => &mut self.director,
            DraftField::Budget => &mut self.budget,
            DraftField::Location => &mut self.location,
            DraftField::Duration => &mut self.duration,
            DraftField::YearTime => &mut self.year_time,
            DraftField::PosterUrl => &mut self.poster_url,
            DraftField::Notes => &mut self.notes,
        };
        Some(text)
    }

    /// Normalizes the draft: trims text, maps blank input to `None`,
    /// parses the numeric fields.
    pub fn to_input(&self) -> Result<EntryInput, DraftError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(DraftError::MissingTitle);
        }

        let budget = parse_amount(DraftField::Budget, &self.budget)?;
        let duration = parse_amount(DraftField::Duration, &self.duration)?;

        Ok(EntryInput {
            title: title.to_string(),
            kind: self.kind,
            director: non_blank(&self.director),
            budget,
            location: non_blank(&self.location),
            duration,
            year_time: non_blank(&self.year_time),
            poster_url: non_blank(&self.poster_url),
            notes: non_blank(&self.notes),
        })
    }
}

fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parses a non-negative number, ignoring `,`, `$` and `_` separators.
/// Blank input is `None`.
fn parse_amount(field: DraftField, raw: &str) -> Result<Option<f64>, DraftError> {
    let Some(text) = non_blank(raw) else {
        return Ok(None);
    };
    let cleaned: String = text
        .chars()
        .filter(|c| !matches!(c, ',' | '$' | '_'))
        .collect();
    let value: f64 = match cleaned.parse() {
        Ok(value) if f64::is_finite(value) => value,
        _ => return Err(DraftError::NotANumber { field, value: text }),
    };
    if value < 0.0 {
        return Err(DraftError::Negative { field });
    }
    Ok(Some(value))
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
