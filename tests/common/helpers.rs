#![allow(dead_code)] // Not every test binary uses every helper

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio::config::Config;
use folio::content::ContentStore;
use folio::tracker::{AnchorSource, SectionSpec};
use folio::ui::{self, AppState};
use ratatui::{Terminal, backend::TestBackend};
use std::path::PathBuf;
use std::time::{Duration, Instant};

pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/content.json")
}

pub fn fixture_store() -> ContentStore {
    ContentStore::load(&fixture_path()).expect("fixture export should load")
}

/// App state over the fixture export with animations disabled, so every
/// navigation lands in a single step.
pub fn instant_app() -> AppState {
    let mut config = Config::default();
    config.scroll.smooth = false;
    AppState::new(fixture_store(), &config).expect("default sections are valid")
}

pub fn smooth_app() -> AppState {
    AppState::new(fixture_store(), &Config::default()).expect("default sections are valid")
}

pub fn test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(width, height)).expect("test backend never fails")
}

/// Draw one frame and return the screen as text, one line per row.
pub fn render(terminal: &mut Terminal<TestBackend>, state: &mut AppState) -> String {
    terminal
        .draw(|frame| ui::draw(frame, state))
        .expect("drawing to a test backend never fails");
    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn press(state: &mut AppState, code: KeyCode) -> bool {
    ui::handle_key(KeyEvent::new(code, KeyModifiers::NONE), state)
}

/// Run every pending animation to completion.
pub fn settle(state: &mut AppState) {
    ui::tick(state, Instant::now() + Duration::from_secs(5));
}

/// Fixed anchors for tracker tests that don't need a real page.
pub struct Anchors(pub Vec<(&'static str, u32)>);

impl Anchors {
    pub fn specs(&self) -> Vec<SectionSpec> {
        self.0
            .iter()
            .map(|(id, _)| SectionSpec::new(*id, id.to_uppercase()))
            .collect()
    }
}

impl AnchorSource for Anchors {
    fn anchor_offset(&self, id: &str) -> Option<u32> {
        self.0.iter().find(|(a, _)| *a == id).map(|(_, row)| *row)
    }
}
