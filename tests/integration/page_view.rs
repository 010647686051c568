// Integration tests for the page and detail screens
//
// These tests drive AppState through key and mouse events and render
// frames with ratatui's TestBackend.

use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use folio::tracker::resolve_active_section;
use folio::ui::{self, Screen, header::tab_areas};
use ratatui::style::Color;

use crate::common::helpers::*;

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn row(screen: &str, index: usize) -> &str {
    screen.lines().nth(index).unwrap_or_default()
}

// ============================================================================
// Page navigation
// ============================================================================

#[test]
fn test_first_frame_shows_header_and_about() {
    let mut state = instant_app();
    let mut terminal = test_terminal(80, 24);
    let screen = render(&mut terminal, &mut state);

    assert!(row(&screen, 0).contains("Fixture Folio"));
    assert!(row(&screen, 1).contains(" 1 About "));
    assert!(row(&screen, 1).contains(" 6 Blog "));
    assert!(row(&screen, 3).starts_with(" ABOUT"));
    assert_eq!(state.page.tracker.active_section(), "about");
}

#[test]
fn test_number_key_brings_section_below_header() {
    let mut state = instant_app();
    let mut terminal = test_terminal(80, 24);
    render(&mut terminal, &mut state);

    assert!(!press(&mut state, KeyCode::Char('3')));
    let screen = render(&mut terminal, &mut state);

    assert_eq!(state.page.tracker.active_section(), "projects");
    assert!(row(&screen, 3).starts_with(" PROJECTS"), "{screen}");
    assert!(row(&screen, 23).contains("Projects"));

    // the active tab is highlighted
    let tab = tab_areas(state.page.header_area, state.page.tracker.specs())[2];
    let cell = &terminal.backend().buffer()[(tab.x, tab.y)];
    assert_eq!(cell.bg, Color::Yellow);
}

#[test]
fn test_smooth_navigation_highlights_target_at_once() {
    let mut state = smooth_app();
    let mut terminal = test_terminal(80, 24);
    render(&mut terminal, &mut state);

    press(&mut state, KeyCode::Char('6'));
    assert_eq!(state.page.tracker.active_section(), "blog");
    assert!(state.page.viewport.is_animating());

    settle(&mut state);
    assert!(!state.page.viewport.is_animating());
    assert_eq!(state.page.tracker.active_section(), "blog");
    let screen = render(&mut terminal, &mut state);
    assert!(row(&screen, 3).starts_with(" BLOG"), "{screen}");
}

#[test]
fn test_tab_cycles_sections_and_end_reaches_last() {
    let mut state = instant_app();
    let mut terminal = test_terminal(80, 24);
    render(&mut terminal, &mut state);

    press(&mut state, KeyCode::Tab);
    assert_eq!(state.page.tracker.active_section(), "experience");
    press(&mut state, KeyCode::BackTab);
    assert_eq!(state.page.tracker.active_section(), "about");
    press(&mut state, KeyCode::BackTab);
    assert_eq!(state.page.tracker.active_section(), "about");

    press(&mut state, KeyCode::End);
    assert_eq!(state.page.tracker.active_section(), "blog");
    press(&mut state, KeyCode::Home);
    assert_eq!(state.page.tracker.active_section(), "about");
}

#[test]
fn test_clicking_a_tab_navigates() {
    let mut state = instant_app();
    let mut terminal = test_terminal(80, 24);
    render(&mut terminal, &mut state);

    let tab = tab_areas(state.page.header_area, state.page.tracker.specs())[3];
    ui::handle_mouse(click(tab.x + 1, tab.y), &mut state);

    assert_eq!(state.page.tracker.active_section(), "gallery");
}

#[test]
fn test_resize_re_resolves_active_section() {
    let mut state = instant_app();
    let mut terminal = test_terminal(80, 24);
    render(&mut terminal, &mut state);
    press(&mut state, KeyCode::Char('4'));

    let wide_anchor = state.page.layout.borrow().anchors()[3].1;
    let mut narrow = test_terminal(30, 24);
    render(&mut narrow, &mut state);

    let layout = state.page.layout.borrow();
    assert!(layout.anchors()[3].1 > wide_anchor);
    let sections = state.page.tracker.measure(&*layout);
    let expected = resolve_active_section(
        state.page.viewport.offset(),
        &sections,
        state.page.tracker.options().offset_threshold,
    );
    assert_eq!(state.page.tracker.active_section(), expected);
}

#[test]
fn test_unknown_section_key_reports_status() {
    let mut state = instant_app();
    let mut terminal = test_terminal(80, 24);
    render(&mut terminal, &mut state);

    press(&mut state, KeyCode::Char('9'));
    let screen = render(&mut terminal, &mut state);

    assert!(row(&screen, 23).contains("No section 9"));
    assert_eq!(state.page.tracker.active_section(), "about");
}

// ============================================================================
// Detail screen and overlays
// ============================================================================

#[test]
fn test_picker_opens_detail_and_escape_returns() {
    let mut state = instant_app();
    let mut terminal = test_terminal(80, 24);
    render(&mut terminal, &mut state);
    press(&mut state, KeyCode::Char('3'));

    press(&mut state, KeyCode::Char('o'));
    assert!(state.picker.is_some());
    let screen = render(&mut terminal, &mut state);
    assert!(screen.contains("New notes"));

    press(&mut state, KeyCode::Enter);
    assert!(state.picker.is_none());
    assert_eq!(state.current_screen, Screen::Detail);
    let screen = render(&mut terminal, &mut state);
    assert!(row(&screen, 0).contains("New notes | Fixture Folio"), "{screen}");
    assert!(screen.contains("/posts/new-notes"));

    press(&mut state, KeyCode::Esc);
    assert_eq!(state.current_screen, Screen::Page);
    assert!(state.detail.is_none());
    // the page kept its place
    assert_eq!(state.page.tracker.active_section(), "projects");
}

#[test]
fn test_help_and_resume_overlays_take_keys_first() {
    let mut state = instant_app();
    let mut terminal = test_terminal(80, 24);
    render(&mut terminal, &mut state);

    press(&mut state, KeyCode::Char('h'));
    assert!(state.help_modal.is_some());
    // keys go to the modal, not the page
    press(&mut state, KeyCode::Char('3'));
    assert_eq!(state.page.tracker.active_section(), "about");
    render(&mut terminal, &mut state);
    press(&mut state, KeyCode::Esc);
    assert!(state.help_modal.is_none());

    press(&mut state, KeyCode::Char('r'));
    assert!(state.resume_open);
    let screen = render(&mut terminal, &mut state);
    assert!(screen.contains("https://example.com/sam.pdf"));
    press(&mut state, KeyCode::Esc);
    assert!(!state.resume_open);
}

#[test]
fn test_quit_keys() {
    let mut state = instant_app();
    assert!(press(&mut state, KeyCode::Char('q')));
    assert!(ui::handle_key(
        crossterm::event::KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        &mut state
    ));
}
