use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend-assigned identifier of a catalogued title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub i64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EntryId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Kind of catalogued title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryType {
    #[default]
    Movie,
    TvShow,
}

impl EntryType {
    pub fn label(self) -> &'static str {
        match self {
            EntryType::Movie => "Movie",
            EntryType::TvShow => "TV Show",
        }
    }

    /// The other variant; used by the form's type toggle.
    pub fn toggled(self) -> Self {
        match self {
            EntryType::Movie => EntryType::TvShow,
            EntryType::TvShow => EntryType::Movie,
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One catalogued title as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: EntryId,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: EntryType,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub location: Option<String>,
    /// Running time in minutes.
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub year_time: Option<String>,
    #[serde(default)]
    pub poster_url: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Entry {
    /// The create/update payload that would reproduce this entry.
    pub fn to_input(&self) -> EntryInput {
        EntryInput {
            title: self.title.clone(),
            kind: self.kind,
            director: self.director.clone(),
            budget: self.budget,
            location: self.location.clone(),
            duration: self.duration,
            year_time: self.year_time.clone(),
            poster_url: self.poster_url.clone(),
            notes: self.notes.clone(),
        }
    }
}

/// Create/update payload: an [`Entry`] without its id.
///
/// Optional fields are always serialized, as `null` when unset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryInput {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: EntryType,
    pub director: Option<String>,
    pub budget: Option<f64>,
    pub location: Option<String>,
    pub duration: Option<f64>,
    pub year_time: Option<String>,
    pub poster_url: Option<String>,
    pub notes: Option<String>,
}

/// A single rejected field, either from local checks or from the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl EntryInput {
    pub fn new(title: impl Into<String>, kind: EntryType) -> Self {
        Self {
            title: title.into(),
            kind,
            ..Self::default()
        }
    }

    /// Checks the payload before it leaves the process.
    ///
    /// Returns every violation, not only the first one.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push(FieldError::new("title", "Title is required"));
        }

        let texts = [
            ("director", &self.director),
            ("location", &self.location),
            ("yearTime", &self.year_time),
            ("posterUrl", &self.poster_url),
            ("notes", &self.notes),
        ];
        for (field, value) in texts {
            if matches!(value, Some(text) if text.trim().is_empty()) {
                errors.push(FieldError::new(field, "Blank text must be sent as null"));
            }
        }

        if let Some(budget) = self.budget {
            if !budget.is_finite() || budget < 0.0 {
                errors.push(FieldError::new("budget", "Budget must be a non-negative number"));
            }
        }

        if let Some(duration) = self.duration {
            if !duration.is_finite() || duration < 0.0 {
                errors.push(FieldError::new("duration", "Duration must be a non-negative number"));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// One page of the entries collection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse {
    pub items: Vec<Entry>,
    /// Absent or `null` when no further pages exist.
    #[serde(default)]
    pub next_cursor: Option<i64>,
}
