// Terminal UI using Ratatui

pub mod components;
pub mod constants;
pub mod detail;
pub mod events;
pub mod header;
pub mod help;
pub mod overlays;
pub mod page;
pub mod state;
pub mod text;

pub use detail::{DetailScreen, DetailState};
pub use events::{draw, handle_key, handle_mouse, run_ui, tick};
pub use header::NavHeader;
pub use help::{HelpModal, HelpModalState, HelpSection};
pub use page::PageLayout;
pub use state::{AppState, PageState, Screen};
