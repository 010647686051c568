// Event handling and main UI loop

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    widgets::{Paragraph, Widget},
};
use std::io;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::content::ContentStore;
use crate::ui::{
    HelpModal,
    components::Footer,
    detail::DetailScreen,
    header::NavHeader,
    help::{HelpModalState, HelpSection},
    overlays::{PickerOverlay, ResumeOverlay},
    state::{AppState, Screen, StatusMessage},
};

mod detail;
mod help;
mod overlays;
mod page;

// Event types sent from dedicated event thread to main loop
enum UiEvent {
    Input(Event), // Keyboard, mouse, or resize
    Tick,         // Periodic update for animation and rendering
}

/// Spawn a dedicated thread for event polling.
fn spawn_event_thread(tx: mpsc::Sender<UiEvent>) {
    let tick_rate = Duration::from_millis(16); // ~60 FPS

    thread::spawn(move || {
        let mut last_tick = Instant::now();
        loop {
            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_secs(0));

            if event::poll(timeout).unwrap_or(false) {
                if let Ok(evt) = event::read() {
                    if tx.send(UiEvent::Input(evt)).is_err() {
                        break; // Main thread dropped the receiver
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                if tx.send(UiEvent::Tick).is_err() {
                    break;
                }
                last_tick = Instant::now();
            }
        }
    });
}

pub fn run_ui(content: ContentStore, config: &Config) -> io::Result<()> {
    // Built before the terminal is touched so a bad setup never leaves it raw
    let mut app_state =
        AppState::new(content, config).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (event_tx, event_rx) = mpsc::channel();
    spawn_event_thread(event_tx);

    tracing::info!(title = %app_state.settings.title, "ui started");
    let result = run_app(&mut terminal, &mut app_state, event_rx);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    state: &mut AppState,
    event_rx: Receiver<UiEvent>,
) -> io::Result<()> {
    loop {
        // Coalesce tick bursts; inputs are handled in arrival order
        let mut pending_ticks: u64 = 0;
        let mut pending_inputs: Vec<Event> = Vec::new();

        match event_rx.recv() {
            Ok(UiEvent::Tick) => pending_ticks += 1,
            Ok(UiEvent::Input(ev)) => pending_inputs.push(ev),
            Err(_) => return Ok(()),
        }

        while let Ok(evt) = event_rx.try_recv() {
            match evt {
                UiEvent::Tick => pending_ticks += 1,
                UiEvent::Input(ev) => pending_inputs.push(ev),
            }
        }

        for input in pending_inputs {
            match input {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if handle_key(key, state) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => handle_mouse(mouse, state),
                Event::Resize(width, height) => {
                    // the next draw lays out against the new frame area
                    tracing::debug!(width, height, "terminal resized");
                }
                _ => {}
            }
        }

        if pending_ticks > 0 {
            tick(state, Instant::now());
        }

        terminal.draw(|frame| draw(frame, state))?;
    }
}

/// Advance animations and expire transient messages.
pub fn tick(state: &mut AppState, now: Instant) {
    state.page.viewport.tick(now);
    if let Some(detail) = state.detail.as_mut() {
        detail.viewport.tick(now);
    }
    if state.status.as_ref().is_some_and(|s| s.expired(now)) {
        state.status = None;
    }
}

pub fn draw(frame: &mut Frame, state: &mut AppState) {
    match state.current_screen {
        Screen::Page => draw_page(frame, state),
        Screen::Detail => {
            if let Some(detail) = state.detail.as_mut() {
                DetailScreen::render(frame, detail, &state.settings);
            }
        }
    }

    if let Some(status) = &state.status {
        let area = frame.area();
        let footer_row = ratatui::layout::Rect::new(area.x, area.bottom().saturating_sub(1), area.width, 1);
        Footer::status(status).render(footer_row, frame.buffer_mut());
    }

    if let Some(picker) = state.picker.as_mut() {
        PickerOverlay::render(frame, picker);
    }
    if state.resume_open {
        ResumeOverlay::render(frame, &state.settings.about);
    }
    if let Some(help_state) = state.help_modal.as_mut() {
        HelpModal::render(frame, help_state);
    }
}

fn draw_page(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let body = chunks[0];

    let page = &mut state.page;
    page.ensure_layout(&state.content, &state.images, body.width, u32::from(body.height));

    let visible = page
        .layout
        .borrow()
        .visible(page.viewport.offset(), u32::from(body.height));
    frame.render_widget(Paragraph::new(visible), body);

    // the header is fixed and overlays the top rows of the body
    let header_rows = u16::try_from(page.header_height())
        .unwrap_or(u16::MAX)
        .min(body.height);
    let header_area = ratatui::layout::Rect::new(body.x, body.y, body.width, header_rows);
    page.header_area = header_area;
    NavHeader::render(
        frame,
        header_area,
        &state.settings.title,
        page.tracker.specs(),
        &page.tracker.active_section(),
    );

    Footer::page(&page.active_label(), page.progress()).render(chunks[1], frame.buffer_mut());
}

fn should_quit(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Returns true when the application should exit.
pub fn handle_key(key: KeyEvent, state: &mut AppState) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    // Modals take keys first, topmost first
    if state.help_modal.is_some() {
        help::handle_help_key(key, state);
        return false;
    }
    if state.resume_open {
        overlays::handle_resume_key(key, state);
        return false;
    }
    if state.picker.is_some() {
        overlays::handle_picker_key(key, state);
        return false;
    }

    if should_quit(&key) {
        return true;
    }

    if matches!(
        key.code,
        KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('?')
    ) {
        help::open_help(state);
        return false;
    }

    match state.current_screen {
        Screen::Page => page::handle_page_key(key, state),
        Screen::Detail => detail::handle_detail_key(key, state),
    }

    false
}

pub fn handle_mouse(mouse: MouseEvent, state: &mut AppState) {
    if state.help_modal.is_some() || state.picker.is_some() || state.resume_open {
        return;
    }
    match state.current_screen {
        Screen::Page => page::handle_page_mouse(mouse, state),
        Screen::Detail => detail::handle_detail_mouse(mouse, state),
    }
}
