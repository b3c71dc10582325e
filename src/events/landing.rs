use crossterm::event::{KeyCode, KeyEvent};

use crate::state::AppState;

/// Handle key events on the landing screen.
///
/// Returns `true` to exit the app, `false` to continue.
pub fn handle_landing_key(ke: KeyEvent, app: &mut AppState) -> bool {
    match ke.code {
        KeyCode::Enter | KeyCode::Char(' ' | 's') => {
            tracing::debug!("start searching");
            app.open_search();
            false
        }
        KeyCode::Esc | KeyCode::Char('q') => true,
        _ => false,
    }
}
