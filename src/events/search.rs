use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::logic::send_query;
use crate::state::{AppState, Focus, QueryInput, SearchView};
use crate::util::open_url;

use super::utils::{byte_index_for_char, char_count};

/// Handle key events on the search screen.
///
/// Esc always goes back to the landing screen. While loading, nothing else
/// is accepted. Otherwise keys go to the search bar or the result columns,
/// depending on focus.
/// Returns `true` to exit the app, `false` to continue.
pub fn handle_search_key(
    ke: KeyEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) -> bool {
    if ke.code == KeyCode::Esc {
        tracing::debug!("back to homepage");
        app.go_home();
        return false;
    }
    let view = app.session.view();
    if view == SearchView::Loading {
        return false;
    }
    if matches!(ke.code, KeyCode::Tab | KeyCode::BackTab) {
        if view == SearchView::Results {
            app.focus = match app.focus {
                Focus::Input => Focus::Results,
                Focus::Results => Focus::Input,
            };
        }
        return false;
    }
    match app.focus {
        Focus::Input => {
            handle_input_key(ke, app, query_tx);
            false
        }
        Focus::Results => handle_results_key(ke, app),
    }
}

/// Edit the search bar; Enter submits the query.
fn handle_input_key(
    ke: KeyEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) {
    let cc = char_count(&app.input);
    app.caret = app.caret.min(cc);
    match ke.code {
        KeyCode::Enter => send_query(app, query_tx),
        KeyCode::Char(ch) if !ke.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            let bi = byte_index_for_char(&app.input, app.caret);
            app.input.insert(bi, ch);
            app.caret += 1;
        }
        KeyCode::Char('u') if ke.modifiers.contains(KeyModifiers::CONTROL) => {
            app.input.clear();
            app.caret = 0;
        }
        KeyCode::Backspace if app.caret > 0 => {
            let bs = byte_index_for_char(&app.input, app.caret - 1);
            let be = byte_index_for_char(&app.input, app.caret);
            app.input.replace_range(bs..be, "");
            app.caret -= 1;
        }
        KeyCode::Delete if app.caret < cc => {
            let bs = byte_index_for_char(&app.input, app.caret);
            let be = byte_index_for_char(&app.input, app.caret + 1);
            app.input.replace_range(bs..be, "");
        }
        KeyCode::Left => app.caret = app.caret.saturating_sub(1),
        KeyCode::Right => app.caret = (app.caret + 1).min(cc),
        KeyCode::Home => app.caret = 0,
        KeyCode::End => app.caret = cc,
        KeyCode::Down if app.session.view() == SearchView::Results => app.focus = Focus::Results,
        _ => {}
    }
}

/// Navigate the result columns. Returns `true` to exit the app.
fn handle_results_key(ke: KeyEvent, app: &mut AppState) -> bool {
    let col = app.active_column;
    match ke.code {
        KeyCode::Left | KeyCode::Char('h') => app.active_column = col.prev(),
        KeyCode::Right | KeyCode::Char('l') => app.active_column = col.next(),
        KeyCode::Up | KeyCode::Char('k') => app.session.move_selection(col, -1),
        KeyCode::Down | KeyCode::Char('j') => app.session.move_selection(col, 1),
        KeyCode::PageUp | KeyCode::Char('[') => {
            app.session.page_back(col);
        }
        KeyCode::PageDown | KeyCode::Char(']') => {
            app.session.page_forward(col);
        }
        KeyCode::Enter | KeyCode::Char('o') => {
            if let Some(article) = app.session.selected_article(col) {
                open_url(&article.url);
            }
        }
        KeyCode::Char('/' | 'i') => app.focus = Focus::Input,
        KeyCode::Char('q') => return true,
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Article, ArticleResponse, Screen, SearchResults, Sentiment};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn type_text(app: &mut AppState, tx: &mpsc::UnboundedSender<QueryInput>, s: &str) {
        for ch in s.chars() {
            handle_search_key(key(KeyCode::Char(ch)), app, tx);
        }
    }

    fn results_app(neutral: usize) -> AppState {
        let mut app = AppState::default();
        app.open_search();
        let q = app.session.begin("topic");
        app.session.complete(SearchResults {
            id: q.id,
            articles: ArticleResponse {
                neutral: (0..neutral)
                    .map(|n| Article {
                        title: format!("n{n}"),
                        excerpt: String::new(),
                        url: format!("https://n.example/{n}"),
                    })
                    .collect(),
                ..ArticleResponse::default()
            },
        });
        app.focus = Focus::Results;
        app.active_column = Sentiment::Neutral;
        app
    }

    #[test]
    /// What: Typing edits at the caret and Enter submits the query.
    ///
    /// Inputs:
    /// - Keys "climte", Left twice, "a", End, " change", then Enter.
    ///
    /// Output:
    /// - Query "climate change" is sent and the view is Loading.
    fn typing_and_enter_submit_query() {
        let mut app = AppState::default();
        app.open_search();
        let (tx, mut rx) = mpsc::unbounded_channel();
        type_text(&mut app, &tx, "climte");
        handle_search_key(key(KeyCode::Left), &mut app, &tx);
        handle_search_key(key(KeyCode::Left), &mut app, &tx);
        type_text(&mut app, &tx, "a");
        handle_search_key(key(KeyCode::End), &mut app, &tx);
        type_text(&mut app, &tx, " change");
        assert_eq!(app.input, "climate change");

        handle_search_key(key(KeyCode::Enter), &mut app, &tx);
        let q = rx.try_recv().expect("query sent");
        assert_eq!(q.text, "climate change");
        assert_eq!(app.session.view(), SearchView::Loading);
    }

    #[test]
    /// What: Backspace and Delete remove characters around the caret.
    fn backspace_and_delete_edit_input() {
        let mut app = AppState::default();
        app.open_search();
        let (tx, _rx) = mpsc::unbounded_channel();
        type_text(&mut app, &tx, "héllo");
        handle_search_key(key(KeyCode::Backspace), &mut app, &tx);
        assert_eq!(app.input, "héll");
        handle_search_key(key(KeyCode::Home), &mut app, &tx);
        handle_search_key(key(KeyCode::Right), &mut app, &tx);
        handle_search_key(key(KeyCode::Delete), &mut app, &tx);
        assert_eq!(app.input, "hll");
        assert_eq!(app.caret, 1);
    }

    #[test]
    /// What: While loading, keys other than Esc are ignored.
    fn loading_ignores_typing() {
        let mut app = AppState::default();
        app.open_search();
        app.session.begin("pending");
        let (tx, mut rx) = mpsc::unbounded_channel();
        type_text(&mut app, &tx, "abc");
        handle_search_key(key(KeyCode::Enter), &mut app, &tx);
        assert!(app.input.is_empty());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    /// What: Esc returns to the landing screen from any view.
    fn esc_goes_home() {
        let mut app = results_app(3);
        let (tx, _rx) = mpsc::unbounded_channel();
        assert!(!handle_search_key(key(KeyCode::Esc), &mut app, &tx));
        assert_eq!(app.screen, Screen::Landing);
        assert_eq!(app.session.view(), SearchView::Idle);
    }

    #[test]
    /// What: Paging keys respect the disabled back/forward controls.
    ///
    /// Inputs:
    /// - Seven neutral articles.
    ///
    /// Output:
    /// - `[` on page 0 is a no-op, `]` moves to page 1, a second `]` stays there.
    fn paging_keys_respect_bounds() {
        let mut app = results_app(7);
        let (tx, _rx) = mpsc::unbounded_channel();
        handle_search_key(key(KeyCode::Char('[')), &mut app, &tx);
        assert_eq!(app.session.pager(Sentiment::Neutral).page, 0);
        handle_search_key(key(KeyCode::Char(']')), &mut app, &tx);
        assert_eq!(app.session.pager(Sentiment::Neutral).page, 1);
        handle_search_key(key(KeyCode::PageDown), &mut app, &tx);
        assert_eq!(app.session.pager(Sentiment::Neutral).page, 1);
        handle_search_key(key(KeyCode::PageUp), &mut app, &tx);
        assert_eq!(app.session.pager(Sentiment::Neutral).page, 0);
    }

    #[test]
    /// What: Column and row navigation move the highlight.
    fn results_navigation_moves_highlight() {
        let mut app = results_app(3);
        let (tx, _rx) = mpsc::unbounded_channel();
        handle_search_key(key(KeyCode::Down), &mut app, &tx);
        handle_search_key(key(KeyCode::Char('j')), &mut app, &tx);
        assert_eq!(
            app.session.selected_article(Sentiment::Neutral).map(|a| a.title.as_str()),
            Some("n2")
        );
        handle_search_key(key(KeyCode::Right), &mut app, &tx);
        assert_eq!(app.active_column, Sentiment::Opposing);
        handle_search_key(key(KeyCode::Char('h')), &mut app, &tx);
        handle_search_key(key(KeyCode::Char('h')), &mut app, &tx);
        assert_eq!(app.active_column, Sentiment::Supportive);
    }

    #[test]
    /// What: Tab toggles focus between the search bar and the columns.
    fn tab_toggles_focus_in_results_view() {
        let mut app = results_app(1);
        let (tx, _rx) = mpsc::unbounded_channel();
        handle_search_key(key(KeyCode::Tab), &mut app, &tx);
        assert_eq!(app.focus, Focus::Input);
        type_text(&mut app, &tx, "q");
        assert_eq!(app.input, "q");
        handle_search_key(key(KeyCode::Tab), &mut app, &tx);
        assert_eq!(app.focus, Focus::Results);
        assert!(handle_search_key(key(KeyCode::Char('q')), &mut app, &tx));
    }
}
