use crate::catalog::{DraftField, EntryDraft};
use crate::mvi::Reducer;
use crate::ui::form::intent::FormIntent;
use crate::ui::form::state::{FormMode, FormState};

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::OpenCreate => FormState::Visible {
                mode: FormMode::Create,
                draft: EntryDraft::default(),
                focused: DraftField::Title,
                submitting: false,
                error: None,
            },
            FormIntent::OpenEdit { entry } => FormState::Visible {
                mode: FormMode::Edit { id: entry.id },
                draft: EntryDraft::from_entry(&entry),
                focused: DraftField::Title,
                submitting: false,
                error: None,
            },
            FormIntent::Close => FormState::Hidden,
            FormIntent::SubmitStarted => match state {
                FormState::Visible {
                    mode,
                    draft,
                    focused,
                    ..
                } => FormState::Visible {
                    mode,
                    draft,
                    focused,
                    submitting: true,
                    error: None,
                },
                other => other,
            },
            FormIntent::SubmitFailed { message, field } => match state {
                FormState::Visible {
                    mode,
                    draft,
                    focused,
                    ..
                } => FormState::Visible {
                    mode,
                    draft,
                    focused: field.unwrap_or(focused),
                    submitting: false,
                    error: Some(message),
                },
                other => other,
            },
            // Remaining intents edit the draft and are ignored while submitting.
            edit => match state {
                FormState::Visible {
                    mode,
                    mut draft,
                    mut focused,
                    submitting: false,
                    mut error,
                } => {
                    match edit {
                        FormIntent::FocusNext => focused = focused.next(),
                        FormIntent::FocusPrev => focused = focused.prev(),
                        FormIntent::InsertChar(ch) => {
                            if focused == DraftField::Type {
                                if ch == ' ' {
                                    draft.kind = draft.kind.toggled();
                                }
                            } else if let Some(text) = draft.text_mut(focused) {
                                text.push(ch);
                                error = None;
                            }
                        }
                        FormIntent::Backspace => {
                            if let Some(text) = draft.text_mut(focused) {
                                text.pop();
                                error = None;
                            }
                        }
                        FormIntent::ToggleType => {
                            if focused == DraftField::Type {
                                draft.kind = draft.kind.toggled();
                            }
                        }
                        _ => {}
                    }
                    FormState::Visible {
                        mode,
                        draft,
                        focused,
                        submitting: false,
                        error,
                    }
                }
                other => other,
            },
        }
    }
}
