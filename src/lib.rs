pub mod config;
pub mod content;
pub mod host;
pub mod logging;
pub mod tracker;
pub mod ui;
