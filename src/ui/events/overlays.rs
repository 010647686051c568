use super::*;

pub(super) fn handle_resume_key(key: KeyEvent, state: &mut AppState) {
    if matches!(
        key.code,
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R')
    ) {
        state.resume_open = false;
    }
}

pub(super) fn handle_picker_key(key: KeyEvent, state: &mut AppState) {
    let Some(picker) = state.picker.as_mut() else {
        return;
    };

    match key.code {
        KeyCode::Esc | KeyCode::Char('o') | KeyCode::Char('O') => {
            state.picker = None;
        }
        KeyCode::Up | KeyCode::Char('k') => picker.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => picker.select_next(),
        KeyCode::Enter => {
            let target = picker.selected().map(|entry| (entry.kind, entry.slug.clone()));
            state.picker = None;
            if let Some((kind, slug)) = target {
                detail::open_detail(state, kind, &slug);
            }
        }
        _ => {}
    }
}
