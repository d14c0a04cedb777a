use crate::catalog::{DraftField, EntryDraft, EntryId};
use crate::mvi::UiState;

/// Whether the form creates a new entry or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: EntryId },
}

impl FormMode {
    pub fn title(self) -> &'static str {
        match self {
            FormMode::Create => "Add Entry",
            FormMode::Edit { .. } => "Edit Entry",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormState {
    #[default]
    Hidden,
    Visible {
        mode: FormMode,
        draft: EntryDraft,
        focused: DraftField,
        /// A create/update request is outstanding; input is frozen.
        submitting: bool,
        error: Option<String>,
    },
}

impl UiState for FormState {}

impl FormState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Visible { submitting: true, .. })
    }
}
