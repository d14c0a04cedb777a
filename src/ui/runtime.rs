use crate::api::ApiClient;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::spawn_worker;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

const COMMAND_QUEUE: usize = 32;

/// Runs the interactive browser until the user quits.
///
/// Backend calls are executed on `runtime`; drawing and input stay on the
/// calling thread.
pub fn run(config: &Config, runtime: &Handle) -> io::Result<()> {
    let client = ApiClient::new(&config.api).map_err(io::Error::other)?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms.max(10));

    let events = EventHandler::new(tick_rate);
    let (command_tx, command_rx) = tokio::sync::mpsc::channel(COMMAND_QUEUE);
    let worker = spawn_worker(runtime, Arc::new(client), command_rx, events.sender());

    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(config);
    app.attach_commands(command_tx);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    app.start();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::PageLoaded { epoch, result }) => app.on_page_loaded(epoch, result),
            Ok(AppEvent::EntrySaved { mode, result }) => app.on_entry_saved(mode, result),
            Ok(AppEvent::EntryDeleted { id, result }) => app.on_entry_deleted(id, result),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(app);
    worker.abort();
    drop(guard);
    Ok(())
}
