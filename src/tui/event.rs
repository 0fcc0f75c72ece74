//! Keyboard event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::App;

/// Process a key event and update the application state.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Ctrl+C always quits
    if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    if app.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
            app.show_help = false;
        }
        return;
    }

    if app.gallery_source.is_some() {
        handle_gallery_keys(app, key);
        return;
    }

    app.status_message = None;
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),
        KeyCode::Char('g') | KeyCode::Home => app.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.select_last(),
        KeyCode::Enter => app.open_selected(),
        KeyCode::Char('s') => app.toggle_simple(),
        _ => {}
    }
}

fn handle_gallery_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.close_gallery(),
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => app.step_gallery(true),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => app.step_gallery(false),
        _ => {}
    }
}
