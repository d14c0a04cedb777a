//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod fake_api;
pub mod mock_backend;

use favreel::catalog::{Entry, EntryId, EntryType, PageResponse};
use favreel::config::Config;
use favreel::ui::app::App;
use favreel::ui::worker::UiCommand;
use std::net::TcpListener;
use std::path::PathBuf;
use tempfile::TempDir;
use tokio::sync::mpsc;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// A base URL nothing listens on.
pub fn unreachable_base_url() -> String {
    format!("http://127.0.0.1:{}/api", free_port())
}

/// Create a temporary config file with `content`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

// -- Entry builders -----------------------------------------------------------

pub fn entry(id: i64, title: &str) -> Entry {
    Entry {
        id: EntryId(id),
        title: title.to_string(),
        kind: EntryType::Movie,
        director: None,
        budget: None,
        location: None,
        duration: None,
        year_time: None,
        poster_url: None,
        notes: None,
    }
}

/// A page holding entries with the given ids, titled "Entry {id}".
pub fn page(ids: &[i64], next_cursor: Option<i64>) -> PageResponse {
    PageResponse {
        items: ids
            .iter()
            .map(|id| entry(*id, &format!("Entry {}", id)))
            .collect(),
        next_cursor,
    }
}

pub fn entry_json(id: i64, title: &str) -> String {
    format!(
        r#"{{"id": {}, "title": "{}", "type": "MOVIE", "director": null, "budget": null,
            "location": null, "duration": null, "yearTime": null, "posterUrl": null, "notes": null}}"#,
        id, title
    )
}

// -- App helpers --------------------------------------------------------------

pub fn make_app() -> App {
    App::new(&Config::default())
}

/// Config with infinite scroll off, so only explicit loads fetch.
pub fn manual_config() -> Config {
    let mut config = Config::default();
    config.ui.autoload = false;
    config
}

/// App wired to a command channel the test drains by hand.
pub fn app_with_commands(config: &Config) -> (App, mpsc::Receiver<UiCommand>) {
    let mut app = App::new(config);
    let (tx, rx) = mpsc::channel(16);
    app.attach_commands(tx);
    (app, rx)
}

/// Drains every queued command.
pub fn drain(rx: &mut mpsc::Receiver<UiCommand>) -> Vec<UiCommand> {
    let mut commands = Vec::new();
    while let Ok(command) = rx.try_recv() {
        commands.push(command);
    }
    commands
}
