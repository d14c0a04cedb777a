//! Runs backend calls off the UI thread and reports back as events.

use std::sync::mpsc;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc::Receiver;
use tokio::task::JoinHandle;

use crate::api::EntriesApi;
use crate::catalog::{EntryId, EntryInput};
use crate::ui::events::AppEvent;
use crate::ui::form::FormMode;

#[derive(Debug)]
pub enum UiCommand {
    FetchPage {
        epoch: u64,
        cursor: Option<i64>,
        limit: u32,
    },
    Create {
        input: EntryInput,
    },
    Update {
        id: EntryId,
        input: EntryInput,
    },
    Delete {
        id: EntryId,
    },
}

pub type UiCommandSender = tokio::sync::mpsc::Sender<UiCommand>;

/// Spawns the command loop on `runtime`.
///
/// Each command runs in its own task, so a slow page fetch does not hold
/// back a delete. The loop ends when every sender is dropped.
pub fn spawn_worker<A>(
    runtime: &Handle,
    api: Arc<A>,
    mut commands: Receiver<UiCommand>,
    events: mpsc::Sender<AppEvent>,
) -> JoinHandle<()>
where
    A: EntriesApi + 'static,
{
    let handle = runtime.clone();
    runtime.spawn(async move {
        while let Some(command) = commands.recv().await {
            let api = Arc::clone(&api);
            let events = events.clone();
            handle.spawn(async move {
                let event = execute(api.as_ref(), command).await;
                // The UI may already be gone; nothing left to notify.
                let _ = events.send(event);
            });
        }
        tracing::debug!("Command channel closed, worker exiting");
    })
}

async fn execute<A: EntriesApi + ?Sized>(api: &A, command: UiCommand) -> AppEvent {
    match command {
        UiCommand::FetchPage {
            epoch,
            cursor,
            limit,
        } => AppEvent::PageLoaded {
            epoch,
            result: api.list_page(cursor, limit).await,
        },
        UiCommand::Create { input } => AppEvent::EntrySaved {
            mode: FormMode::Create,
            result: api.create(&input).await,
        },
        UiCommand::Update { id, input } => AppEvent::EntrySaved {
            mode: FormMode::Edit { id },
            result: api.update(id, &input).await,
        },
        UiCommand::Delete { id } => AppEvent::EntryDeleted {
            id,
            result: api.delete(id).await,
        },
    }
}
