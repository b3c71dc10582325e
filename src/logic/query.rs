use tokio::sync::mpsc;

use crate::state::{AppState, Focus, QueryInput};

/// What: Start a search for the current input and hand it to the search worker.
///
/// Inputs:
/// - `app`: Mutable application state; the session moves to loading
/// - `query_tx`: Channel to send the `QueryInput`
///
/// Output:
/// - Sends a `QueryInput` with a fresh id and the current text; clears the input.
///
/// Details:
/// - The session keeps the query so the results screen can show it as the
///   search bar placeholder.
/// - The id allows correlating responses so the UI can discard stale results.
pub fn send_query(app: &mut AppState, query_tx: &mpsc::UnboundedSender<QueryInput>) {
    let q = app.session.begin(&app.input);
    tracing::info!(id = q.id, query = %q.text, "search started");
    app.input.clear();
    app.caret = 0;
    app.focus = Focus::Input;
    if query_tx.send(q).is_err() {
        tracing::error!("search worker is gone; query dropped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SearchView;

    #[tokio::test]
    /// What: Ensure `send_query` allocates ids and forwards the current input text.
    ///
    /// Inputs:
    /// - `AppState` whose `input` is set to `"hello"`.
    ///
    /// Output:
    /// - The session is loading, the input is cleared and the channel receives a
    ///   matching `QueryInput`.
    ///
    /// Details:
    /// - Uses a short timeout to guarantee the send occurs asynchronously.
    async fn send_query_begins_session_and_sends() {
        let mut app = AppState {
            input: "hello".into(),
            caret: 5,
            ..Default::default()
        };
        let (tx, mut rx) = mpsc::unbounded_channel();
        send_query(&mut app, &tx);
        assert_eq!(app.session.view(), SearchView::Loading);
        assert_eq!(app.session.query(), "hello");
        assert!(app.input.is_empty());
        assert_eq!(app.caret, 0);
        let q = tokio::time::timeout(std::time::Duration::from_millis(50), rx.recv())
            .await
            .ok()
            .flatten()
            .expect("query sent");
        assert_eq!(q.id, app.session.latest_query_id());
        assert_eq!(q.text, "hello");
    }

    #[test]
    /// What: An empty query is still sent.
    fn send_query_sends_empty_query() {
        let mut app = AppState::default();
        let (tx, mut rx) = mpsc::unbounded_channel();
        send_query(&mut app, &tx);
        let q = rx.try_recv().expect("query sent");
        assert_eq!(q.text, "");
        assert_eq!(app.session.view(), SearchView::Loading);
    }
}
