use super::*;

pub(super) fn open_help(state: &mut AppState) {
    let options = state.page.tracker.options();
    state.help_modal = Some(HelpModalState {
        current_section: HelpSection::About,
        scroll_offset: 0,
        max_scroll: 0,
        app_version: state.app_version.clone(),
        site_title: state.settings.title.clone(),
        offset_threshold: options.offset_threshold,
        header_height: options.header_height,
        smooth_scroll: state.smooth.enabled,
    });
}

pub(super) fn handle_help_key(key: KeyEvent, state: &mut AppState) {
    if let Some(ref mut help_state) = state.help_modal {
        match key.code {
            // Close help
            KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('?') => {
                state.help_modal = None;
            }
            KeyCode::Tab | KeyCode::Right => {
                help_state.current_section = help_state.current_section.next();
                help_state.scroll_offset = 0;
            }
            KeyCode::BackTab | KeyCode::Left => {
                help_state.current_section = help_state.current_section.previous();
                help_state.scroll_offset = 0;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                help_state.scroll_offset = help_state.scroll_offset.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                help_state.scroll_offset = help_state
                    .scroll_offset
                    .saturating_add(1)
                    .min(help_state.max_scroll);
            }
            KeyCode::PageUp => {
                help_state.scroll_offset = help_state.scroll_offset.saturating_sub(10);
            }
            KeyCode::PageDown => {
                help_state.scroll_offset = help_state
                    .scroll_offset
                    .saturating_add(10)
                    .min(help_state.max_scroll);
            }
            KeyCode::Home => {
                help_state.scroll_offset = 0;
            }
            KeyCode::End => {
                help_state.scroll_offset = help_state.max_scroll;
            }
            _ => {}
        }
    }
}
