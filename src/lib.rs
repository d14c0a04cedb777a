pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod list;
pub mod logging;
pub mod mvi;
pub mod ui;
