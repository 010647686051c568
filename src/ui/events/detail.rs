use super::*;
use crate::content::EntryKind;
use crate::ui::detail::DetailState;

pub(super) fn open_detail(state: &mut AppState, kind: EntryKind, slug: &str) {
    match DetailState::open(&state.content, &state.images, kind, slug, state.smooth) {
        Ok(detail) => {
            state.detail = Some(detail);
            state.current_screen = Screen::Detail;
        }
        Err(e) => state.set_status(StatusMessage::error(e.to_string())),
    }
}

fn close_detail(state: &mut AppState) {
    // dropping the detail state releases its scroll subscription
    state.detail = None;
    state.current_screen = Screen::Page;
}

pub(super) fn handle_detail_key(key: KeyEvent, state: &mut AppState) {
    let Some(detail) = state.detail.as_mut() else {
        state.current_screen = Screen::Page;
        return;
    };
    let page_rows = i64::from(detail.viewport.height()).max(1);

    match key.code {
        KeyCode::Esc | KeyCode::Backspace => close_detail(state),
        KeyCode::Up | KeyCode::Char('k') => detail.viewport.scroll_by(-1),
        KeyCode::Down | KeyCode::Char('j') => detail.viewport.scroll_by(1),
        KeyCode::PageUp => detail.viewport.scroll_by(-page_rows),
        KeyCode::PageDown | KeyCode::Char(' ') => detail.viewport.scroll_by(page_rows),
        KeyCode::Home | KeyCode::Char('g') => detail.viewport.scroll_to(0),
        KeyCode::End | KeyCode::Char('G') => {
            let max = detail.viewport.max_offset();
            detail.viewport.scroll_to(max);
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            let target = detail.more.get(index).map(|m| (m.kind, m.slug.clone()));
            if let Some((kind, slug)) = target {
                open_detail(state, kind, &slug);
            }
        }
        _ => {}
    }
}

pub(super) fn handle_detail_mouse(mouse: MouseEvent, state: &mut AppState) {
    let step = i64::from(state.wheel_step);
    if let Some(detail) = state.detail.as_mut() {
        match mouse.kind {
            MouseEventKind::ScrollDown => detail.viewport.scroll_by(step),
            MouseEventKind::ScrollUp => detail.viewport.scroll_by(-step),
            _ => {}
        }
    }
}
