use crate::catalog::{DraftField, Entry};
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FormIntent {
    OpenCreate,
    OpenEdit { entry: Entry },
    Close,
    FocusNext,
    FocusPrev,
    InsertChar(char),
    Backspace,
    /// Flip MOVIE/TV_SHOW; only acts while the type field is focused.
    ToggleType,
    SubmitStarted,
    /// Local conversion or remote failure; the form stays open.
    SubmitFailed {
        message: String,
        field: Option<DraftField>,
    },
}

impl Intent for FormIntent {}
