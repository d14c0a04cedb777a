use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::api::ApiError;
use crate::catalog::{Entry, EntryId, PageResponse};
use crate::config::Config;
use crate::list::{ListIntent, ListReducer, ListState};
use crate::mvi::Reducer;
use crate::ui::form::{FormIntent, FormMode, FormReducer, FormState};
use crate::ui::worker::{UiCommand, UiCommandSender};

const NOTICE_TTL: Duration = Duration::from_secs(4);

/// Rows taken by header, footer, table header and the "load more" line.
const CHROME_ROWS: u16 = 3 + 3 + 1 + 1;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Popup {
    ConfirmDelete { id: EntryId, title: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    expires_at: Instant,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Top-level coordinator of the browser.
///
/// Owns the entries list, the form dialog and popups; remote calls go out
/// as [`UiCommand`]s and come back through the `on_*` completion methods.
pub struct App {
    should_quit: bool,
    base_url: String,
    page_size: u32,
    autoload: bool,
    autoload_margin: usize,
    viewport_rows: usize,
    /// Entries list (MVI pattern).
    list: ListState,
    /// Bumped on every reset; page completions from older epochs are dropped.
    list_epoch: u64,
    selected: usize,
    /// State of the add/edit dialog (MVI pattern).
    form: FormState,
    popup: Option<Popup>,
    pending_delete: Option<EntryId>,
    notice: Option<Notice>,
    commands: Option<UiCommandSender>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            base_url: config.api.base_url.clone(),
            page_size: config.api.page_size,
            autoload: config.ui.autoload,
            autoload_margin: config.ui.autoload_margin,
            viewport_rows: 0,
            list: ListState::default(),
            list_epoch: 0,
            selected: 0,
            form: FormState::default(),
            popup: None,
            pending_delete: None,
            notice: None,
            commands: None,
        }
    }

    pub fn attach_commands(&mut self, sender: UiCommandSender) {
        self.commands = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn list(&self) -> &ListState {
        &self.list
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn popup(&self) -> Option<&Popup> {
        self.popup.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.list.get(self.selected)
    }

    pub fn pending_delete(&self) -> Option<EntryId> {
        self.pending_delete
    }

    /// Loads the first page.
    pub fn start(&mut self) {
        self.request_load_more();
    }

    pub fn on_tick(&mut self) {
        if let Some(notice) = &self.notice {
            if Instant::now() >= notice.expires_at {
                self.notice = None;
            }
        }
    }

    pub fn on_resize(&mut self, _cols: u16, rows: u16) {
        self.viewport_rows = rows.saturating_sub(CHROME_ROWS) as usize;
    }

    // -- List -----------------------------------------------------------------

    /// Requests the next page unless one is outstanding or none remain.
    ///
    /// Returns true when a fetch was issued.
    pub fn request_load_more(&mut self) -> bool {
        if !self.list.can_load_more() {
            return false;
        }
        let command = UiCommand::FetchPage {
            epoch: self.list_epoch,
            cursor: self.list.cursor,
            limit: self.page_size,
        };
        if !self.send_command(command) {
            return false;
        }
        dispatch_mvi!(self, list, ListReducer, ListIntent::LoadRequested);
        true
    }

    /// Drops everything loaded and fetches from the first page.
    pub fn reload(&mut self) {
        self.list_epoch += 1;
        self.selected = 0;
        dispatch_mvi!(self, list, ListReducer, ListIntent::Reset);
        self.request_load_more();
    }

    pub fn move_selection(&mut self, delta: isize) {
        if self.list.is_empty() {
            self.selected = 0;
            return;
        }
        let last = self.list.len() - 1;
        self.selected = self.selected.saturating_add_signed(delta).min(last);
        self.maybe_autoload();
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.list.len().saturating_sub(1);
        self.maybe_autoload();
    }

    /// Infinite scroll: fetch when the selection nears the end, or when the
    /// loaded rows do not fill the screen yet.
    fn maybe_autoload(&mut self) {
        if !self.autoload || !self.list.can_load_more() {
            return;
        }
        let len = self.list.len();
        let near_end = len > 0 && self.selected + self.autoload_margin + 1 >= len;
        let underfilled = len < self.viewport_rows;
        if near_end || underfilled {
            self.request_load_more();
        }
    }

    pub fn on_page_loaded(&mut self, epoch: u64, result: Result<PageResponse, ApiError>) {
        if epoch != self.list_epoch {
            debug!(epoch, current = self.list_epoch, "Dropping page fetched before reset");
            return;
        }
        match result {
            Ok(page) => {
                debug!(count = page.items.len(), next_cursor = ?page.next_cursor, "Page loaded");
                dispatch_mvi!(self, list, ListReducer, ListIntent::PageLoaded(page));
                self.maybe_autoload();
            }
            Err(err) => {
                dispatch_mvi!(self, list, ListReducer, ListIntent::LoadFailed);
                self.set_notice(
                    NoticeKind::Error,
                    format!("Failed to load entries: {}", err.user_message()),
                );
            }
        }
    }

    // -- Form -----------------------------------------------------------------

    pub fn dispatch_form(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, form, FormReducer, intent);
    }

    pub fn open_create_form(&mut self) {
        self.dispatch_form(FormIntent::OpenCreate);
    }

    pub fn open_edit_form(&mut self) {
        let Some(entry) = self.selected_entry().cloned() else {
            return;
        };
        self.dispatch_form(FormIntent::OpenEdit { entry });
    }

    /// Closes the form unless a save is outstanding.
    pub fn close_form(&mut self) {
        if !self.form.is_submitting() {
            self.dispatch_form(FormIntent::Close);
        }
    }

    /// Converts the draft and sends it; conversion errors stay in the form.
    pub fn submit_form(&mut self) {
        let FormState::Visible {
            mode,
            draft,
            submitting: false,
            ..
        } = &self.form
        else {
            return;
        };
        let mode = *mode;

        let input = match draft.to_input() {
            Ok(input) => input,
            Err(err) => {
                self.dispatch_form(FormIntent::SubmitFailed {
                    message: err.to_string(),
                    field: Some(err.field()),
                });
                return;
            }
        };

        let command = match mode {
            FormMode::Create => UiCommand::Create { input },
            FormMode::Edit { id } => UiCommand::Update { id, input },
        };
        if self.send_command(command) {
            self.dispatch_form(FormIntent::SubmitStarted);
        } else {
            self.dispatch_form(FormIntent::SubmitFailed {
                message: "Failed to save entry: backend worker unavailable".to_string(),
                field: None,
            });
        }
    }

    pub fn on_entry_saved(&mut self, mode: FormMode, result: Result<Entry, ApiError>) {
        match result {
            Ok(entry) => {
                let text = match mode {
                    FormMode::Create => "Entry created successfully!",
                    FormMode::Edit { .. } => "Entry updated successfully!",
                };
                info!(id = %entry.id, title = %entry.title, "Entry saved");
                self.dispatch_form(FormIntent::Close);
                self.set_notice(NoticeKind::Success, text.to_string());
                self.reload();
            }
            Err(err) => {
                self.dispatch_form(FormIntent::SubmitFailed {
                    message: format!("Failed to save entry: {}", err.user_message()),
                    field: None,
                });
            }
        }
    }

    // -- Delete ---------------------------------------------------------------

    /// Asks for confirmation before deleting the selected entry.
    pub fn request_delete_selected(&mut self) {
        if self.pending_delete.is_some() {
            return;
        }
        let Some(entry) = self.selected_entry() else {
            return;
        };
        self.popup = Some(Popup::ConfirmDelete {
            id: entry.id,
            title: entry.title.clone(),
        });
    }

    pub fn confirm_popup(&mut self) {
        let Some(Popup::ConfirmDelete { id, .. }) = self.popup.take() else {
            return;
        };
        if self.send_command(UiCommand::Delete { id }) {
            self.pending_delete = Some(id);
        }
    }

    pub fn cancel_popup(&mut self) {
        self.popup = None;
    }

    pub fn on_entry_deleted(&mut self, id: EntryId, result: Result<(), ApiError>) {
        if self.pending_delete == Some(id) {
            self.pending_delete = None;
        }
        match result {
            Ok(()) => {
                dispatch_mvi!(self, list, ListReducer, ListIntent::EntryRemoved { id });
                self.selected = self.selected.min(self.list.len().saturating_sub(1));
                self.set_notice(NoticeKind::Success, "Entry deleted".to_string());
                self.maybe_autoload();
            }
            Err(err) => {
                self.set_notice(
                    NoticeKind::Error,
                    format!("Failed to delete entry: {}", err.user_message()),
                );
            }
        }
    }

    // -- Plumbing -------------------------------------------------------------

    fn set_notice(&mut self, kind: NoticeKind, text: String) {
        self.notice = Some(Notice {
            kind,
            text,
            expires_at: Instant::now() + NOTICE_TTL,
        });
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.commands else {
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => true,
            Err(err) => {
                self.set_notice(NoticeKind::Error, format!("Command send failed: {}", err));
                false
            }
        }
    }
}
