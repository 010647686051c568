use super::*;

fn report(state: &mut AppState, result: Result<(), crate::tracker::TrackerError>) {
    if let Err(e) = result {
        state.set_status(StatusMessage::error(e.to_string()));
    }
}

fn page_rows(state: &AppState) -> i64 {
    let body = i64::from(state.page.viewport.height());
    let header = i64::from(state.page.header_height());
    (body - header).max(1)
}

pub(super) fn handle_page_key(key: KeyEvent, state: &mut AppState) {
    let now = Instant::now();

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.page.viewport.scroll_by(-1),
        KeyCode::Down | KeyCode::Char('j') => state.page.viewport.scroll_by(1),
        KeyCode::PageUp => {
            let rows = page_rows(state);
            state.page.viewport.scroll_by(-rows);
        }
        KeyCode::PageDown | KeyCode::Char(' ') => {
            let rows = page_rows(state);
            state.page.viewport.scroll_by(rows);
        }
        KeyCode::Home | KeyCode::Char('g') => state.page.viewport.scroll_to(0),
        KeyCode::End | KeyCode::Char('G') => {
            let max = state.page.viewport.max_offset();
            state.page.viewport.scroll_to(max);
        }
        KeyCode::Tab => {
            let result = state.page.navigate_relative(1, now);
            report(state, result);
        }
        KeyCode::BackTab => {
            let result = state.page.navigate_relative(-1, now);
            report(state, result);
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            let target = state.page.tracker.specs().get(index).map(|s| s.id.clone());
            match target {
                Some(id) => {
                    let result = state.page.navigate(&id, now);
                    report(state, result);
                }
                None => state.set_status(StatusMessage::error(format!("No section {c}"))),
            }
        }
        KeyCode::Char('o') | KeyCode::Char('O') => {
            state.picker = Some(crate::ui::state::PickerState::new(&state.content));
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            if state.settings.about.resume_url.is_some() {
                state.resume_open = true;
            } else {
                state.set_status(StatusMessage::info("No resume available"));
            }
        }
        _ => {}
    }
}

pub(super) fn handle_page_mouse(mouse: MouseEvent, state: &mut AppState) {
    let step = i64::from(state.wheel_step);
    match mouse.kind {
        MouseEventKind::ScrollDown => state.page.viewport.scroll_by(step),
        MouseEventKind::ScrollUp => state.page.viewport.scroll_by(-step),
        MouseEventKind::Down(MouseButton::Left) => {
            let tab = crate::ui::header::tab_at(
                state.page.header_area,
                state.page.tracker.specs(),
                mouse.column,
                mouse.row,
            );
            if let Some(index) = tab {
                let id = state.page.tracker.specs()[index].id.clone();
                let result = state.page.navigate(&id, Instant::now());
                report(state, result);
            }
        }
        _ => {}
    }
}
