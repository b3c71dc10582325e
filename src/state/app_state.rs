//! Central `AppState` container shared by the event, networking, and UI layers.

use crate::state::session::SearchSession;
use crate::state::types::{Screen, Sentiment};

/// Clickable rectangle in terminal cells: `(x, y, width, height)`.
pub type HitRect = (u16, u16, u16, u16);

/// Which part of the search screen receives key presses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    /// The search bar; printable keys edit the query.
    #[default]
    Input,
    /// The result columns; keys navigate and open articles.
    Results,
}

/// Global application state.
///
/// Mutated in response to input and worker messages on the UI task only.
#[derive(Debug)]
pub struct AppState {
    /// Screen on display.
    pub screen: Screen,
    /// Query, flags and result lists of the search screen.
    pub session: SearchSession,
    /// Text currently typed into the search bar.
    pub input: String,
    /// Caret position (in characters) within `input`.
    pub caret: usize,
    /// Which part of the search screen is focused.
    pub focus: Focus,
    /// Result column receiving navigation keys.
    pub active_column: Sentiment,
    /// Spinner animation frame, advanced on each tick while loading.
    pub spinner_frame: usize,

    // Column widths loaded from settings
    /// Left column width in percent.
    pub layout_left_pct: u16,
    /// Center column width in percent.
    pub layout_center_pct: u16,
    /// Right column width in percent.
    pub layout_right_pct: u16,

    // Mouse hit-test rectangles, refreshed on every frame
    /// "Start Searching" button on the landing screen.
    pub start_button_rect: Option<HitRect>,
    /// "← Back to Homepage" button on the search screen.
    pub back_button_rect: Option<HitRect>,
    /// Search bar input area.
    pub search_input_rect: Option<HitRect>,
    /// Inner list area of each result column, indexed by [`Sentiment::index`].
    pub column_list_rects: [Option<HitRect>; 3],
    /// "◀ Prev" button of each column.
    pub prev_button_rects: [Option<HitRect>; 3],
    /// "Next ▶" button of each column.
    pub next_button_rects: [Option<HitRect>; 3],
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            screen: Screen::Landing,
            session: SearchSession::default(),
            input: String::new(),
            caret: 0,
            focus: Focus::Input,
            active_column: Sentiment::Supportive,
            spinner_frame: 0,
            layout_left_pct: 33,
            layout_center_pct: 34,
            layout_right_pct: 33,
            start_button_rect: None,
            back_button_rect: None,
            search_input_rect: None,
            column_list_rects: [None; 3],
            prev_button_rects: [None; 3],
            next_button_rects: [None; 3],
        }
    }
}

impl AppState {
    /// What: Build the initial state from loaded settings.
    ///
    /// Inputs:
    /// - `settings`: Parsed `settings.conf` values
    ///
    /// Output:
    /// - `AppState` on the landing screen with the configured column widths.
    #[must_use]
    pub fn from_settings(settings: &crate::theme::Settings) -> Self {
        Self {
            layout_left_pct: settings.layout_left_pct,
            layout_center_pct: settings.layout_center_pct,
            layout_right_pct: settings.layout_right_pct,
            ..Self::default()
        }
    }

    /// What: Switch to the search screen with an idle search bar.
    pub fn open_search(&mut self) {
        self.screen = Screen::Search;
        self.focus = Focus::Input;
    }

    /// What: Return to the landing screen, dropping the search session.
    ///
    /// Details:
    /// - Mirrors navigating back to `/`: the search page state is discarded.
    pub fn go_home(&mut self) {
        self.screen = Screen::Landing;
        self.session.reset();
        self.input.clear();
        self.caret = 0;
        self.focus = Focus::Input;
        self.active_column = Sentiment::Supportive;
        self.clear_hit_rects();
    }

    /// Forget all hit-test rectangles; the renderer sets the visible ones again.
    pub const fn clear_hit_rects(&mut self) {
        self.start_button_rect = None;
        self.back_button_rect = None;
        self.search_input_rect = None;
        self.column_list_rects = [None; 3];
        self.prev_button_rects = [None; 3];
        self.next_button_rects = [None; 3];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::types::SearchView;

    #[test]
    /// What: Going home drops the session and returns focus to the input.
    fn go_home_resets_search_state() {
        let mut app = AppState::default();
        app.open_search();
        app.input = "partial".into();
        app.caret = 3;
        app.focus = Focus::Results;
        app.session.begin("topic");

        app.go_home();
        assert_eq!(app.screen, Screen::Landing);
        assert_eq!(app.session.view(), SearchView::Idle);
        assert!(app.input.is_empty());
        assert_eq!(app.caret, 0);
        assert_eq!(app.focus, Focus::Input);
    }
}
