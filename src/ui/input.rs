use crate::catalog::CategoryFilter;
use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') || key.code == KeyCode::Char('q') {
        app.request_quit();
        return;
    }

    if app.navigation().is_detail() {
        handle_detail_key(app, key);
    } else {
        handle_list_key(app, key);
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_focus(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_focus(1),
        KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => app.cycle_filter(-1),
        KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => app.cycle_filter(1),
        KeyCode::Enter => {
            app.open_focused();
        }
        KeyCode::Char(ch) => {
            if let Some(filter) = filter_for_digit(ch) {
                app.set_filter(filter);
            }
        }
        _ => {}
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => app.back(),
        KeyCode::Char('r') => {
            app.replay();
        }
        KeyCode::Up | KeyCode::Char('k') => app.scroll_detail(-1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_detail(1),
        KeyCode::PageUp => app.scroll_detail(-10),
        KeyCode::PageDown => app.scroll_detail(10),
        _ => {}
    }
}

/// `1`..`4` pick a category tab.
fn filter_for_digit(ch: char) -> Option<CategoryFilter> {
    let index = ch.to_digit(10)? as usize;
    index
        .checked_sub(1)
        .and_then(|i| CategoryFilter::ALL.get(i).copied())
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
