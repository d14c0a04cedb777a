//! Terminal browser: entries table, add/edit form and delete confirmation.

pub mod app;
pub mod events;
pub mod footer;
pub mod form;
pub mod header;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod table;
pub mod terminal_guard;
pub mod theme;
pub mod worker;

pub use runtime::run;
