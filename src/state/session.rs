//! Search session state: the query, loading flags and the three result lists.
//!
//! All mutation at search boundaries goes through [`SearchSession::begin`] and
//! [`SearchSession::complete`], so the flags and lists can never be observed
//! half-updated.

use crate::state::pager::Pager;
use crate::state::types::{Article, QueryInput, SearchResults, SearchView, Sentiment};

/// In-memory state of the search screen.
#[derive(Debug, Default)]
pub struct SearchSession {
    /// Query of the most recent search.
    query: String,
    /// A request for `latest_query_id` is outstanding.
    loading: bool,
    /// A request has settled since the screen was opened.
    show_results: bool,
    /// Positive column.
    supportive: Vec<Article>,
    /// Neutral column.
    neutral: Vec<Article>,
    /// Negative column.
    opposing: Vec<Article>,
    /// Page cursors, indexed by [`Sentiment::index`].
    pagers: [Pager; 3],
    /// Identifier of the latest query whose results will be displayed.
    latest_query_id: u64,
    /// Next query identifier to allocate.
    next_query_id: u64,
}

impl SearchSession {
    /// What: Start a new search.
    ///
    /// Inputs:
    /// - `query`: Text exactly as typed (may be empty)
    ///
    /// Output:
    /// - `QueryInput` carrying a fresh id, to be handed to the search worker.
    ///
    /// Details:
    /// - Sets `loading`, clears `show_results`, stores the query and resets
    ///   every pager to page 0.
    /// - The id allows correlating responses so stale results are discarded.
    pub fn begin(&mut self, query: &str) -> QueryInput {
        let id = self.next_query_id;
        self.next_query_id += 1;
        self.latest_query_id = id;
        self.query = query.to_string();
        self.loading = true;
        self.show_results = false;
        for p in &mut self.pagers {
            p.reset();
        }
        QueryInput {
            id,
            text: self.query.clone(),
        }
    }

    /// What: Store the outcome of a search.
    ///
    /// Inputs:
    /// - `results`: Sanitized articles tagged with the originating query id
    ///
    /// Output:
    /// - `true` when applied; `false` when the id is not the latest one.
    ///
    /// Details:
    /// - A failed request arrives here as empty buckets; both cases end with
    ///   `loading = false` and `show_results = true`.
    pub fn complete(&mut self, results: SearchResults) -> bool {
        if !self.loading || results.id != self.latest_query_id {
            tracing::debug!(
                id = results.id,
                latest = self.latest_query_id,
                "discarding stale search results"
            );
            return false;
        }
        let articles = results.articles;
        self.supportive = articles.supportive;
        self.neutral = articles.neutral;
        self.opposing = articles.opposing;
        self.loading = false;
        self.show_results = true;
        true
    }

    /// What: Forget results and return to the idle search bar.
    ///
    /// Details:
    /// - Used when leaving the search screen. Bumps the latest id so an
    ///   in-flight response cannot repopulate the screen afterwards.
    pub fn reset(&mut self) {
        let next_query_id = self.next_query_id + 1;
        *self = Self {
            next_query_id,
            latest_query_id: next_query_id - 1,
            ..Self::default()
        };
    }

    /// Which of idle, loading or results is visible.
    #[must_use]
    pub const fn view(&self) -> SearchView {
        if self.loading {
            SearchView::Loading
        } else if self.show_results {
            SearchView::Results
        } else {
            SearchView::Idle
        }
    }

    /// Query of the most recent search.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether a request is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether results (possibly empty) are shown.
    #[must_use]
    pub const fn show_results(&self) -> bool {
        self.show_results
    }

    /// Identifier of the most recently issued query.
    #[must_use]
    pub const fn latest_query_id(&self) -> u64 {
        self.latest_query_id
    }

    /// Articles in one column.
    #[must_use]
    pub fn articles(&self, column: Sentiment) -> &[Article] {
        match column {
            Sentiment::Supportive => &self.supportive,
            Sentiment::Neutral => &self.neutral,
            Sentiment::Opposing => &self.opposing,
        }
    }

    /// Page cursor of one column.
    #[must_use]
    pub const fn pager(&self, column: Sentiment) -> &Pager {
        &self.pagers[column.index()]
    }

    /// What: Flip one column a page back.
    ///
    /// Output:
    /// - `true` when the page changed.
    pub const fn page_back(&mut self, column: Sentiment) -> bool {
        self.pagers[column.index()].back()
    }

    /// What: Flip one column a page forward.
    ///
    /// Output:
    /// - `true` when the page changed.
    pub fn page_forward(&mut self, column: Sentiment) -> bool {
        let len = self.articles(column).len();
        self.pagers[column.index()].forward(len)
    }

    /// Move the highlighted row of one column.
    pub fn move_selection(&mut self, column: Sentiment, delta: isize) {
        let len = self.articles(column).len();
        self.pagers[column.index()].move_selection(delta, len);
    }

    /// What: Highlight a specific row on the current page.
    ///
    /// Output:
    /// - The article under that row, if any.
    pub fn select_row(&mut self, column: Sentiment, row: usize) -> Option<&Article> {
        let len = self.articles(column).len();
        let pager = &mut self.pagers[column.index()];
        pager.selected = row;
        let idx = pager.selected_index(len)?;
        self.articles(column).get(idx)
    }

    /// The highlighted article of one column.
    #[must_use]
    pub fn selected_article(&self, column: Sentiment) -> Option<&Article> {
        let list = self.articles(column);
        self.pager(column)
            .selected_index(list.len())
            .and_then(|i| list.get(i))
    }
}
