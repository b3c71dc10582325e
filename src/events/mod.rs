//! Event handling layer for EchoChamber's TUI.
//!
//! Dispatches key presses by screen and delegates mouse handling.

use crossterm::event::{Event as CEvent, KeyCode, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::state::{AppState, QueryInput, Screen};

mod landing;
mod mouse;
mod search;
mod utils;

pub use mouse::handle_mouse_event;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(
    ev: &CEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) -> bool {
    match ev {
        CEvent::Key(ke) => {
            if ke.kind != KeyEventKind::Press {
                return false;
            }
            if ke.code == KeyCode::Char('c') && ke.modifiers.contains(KeyModifiers::CONTROL) {
                return true;
            }
            match app.screen {
                Screen::Landing => landing::handle_landing_key(*ke, app),
                Screen::Search => search::handle_search_key(*ke, app, query_tx),
            }
        }
        CEvent::Mouse(m) => mouse::handle_mouse_event(*m, app),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    #[test]
    /// What: Ctrl+C exits from any screen; Enter on landing opens search.
    fn global_keys() {
        let mut app = AppState::default();
        let (tx, _rx) = mpsc::unbounded_channel();
        let enter = CEvent::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::empty()));
        assert!(!handle_event(&enter, &mut app, &tx));
        assert_eq!(app.screen, Screen::Search);

        let ctrl_c = CEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(handle_event(&ctrl_c, &mut app, &tx));
    }

    #[test]
    /// What: Key releases are ignored.
    fn key_release_is_ignored() {
        let mut app = AppState::default();
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut release = KeyEvent::new(KeyCode::Enter, KeyModifiers::empty());
        release.kind = KeyEventKind::Release;
        assert!(!handle_event(&CEvent::Key(release), &mut app, &tx));
        assert_eq!(app.screen, Screen::Landing);
    }

    #[test]
    /// What: `q` on the landing screen exits.
    fn landing_q_exits() {
        let mut app = AppState::default();
        let (tx, _rx) = mpsc::unbounded_channel();
        let q = CEvent::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty()));
        assert!(handle_event(&q, &mut app, &tx));
    }
}
