//! Core value types used by EchoChamber state.

use serde::{Deserialize, Serialize};

/// A single news item as returned by the articles backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Headline text.
    pub title: String,
    /// Short excerpt; may contain markup and entities until sanitized.
    pub excerpt: String,
    /// Link to the source article.
    pub url: String,
}

/// Body of a successful `/articles/<query>` response.
///
/// Sentiment buckets are assigned upstream; this client only displays them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleResponse {
    /// Articles leaning in favour of the topic.
    pub supportive: Vec<Article>,
    /// Articles without a clear leaning.
    pub neutral: Vec<Article>,
    /// Articles leaning against the topic.
    pub opposing: Vec<Article>,
}

impl ArticleResponse {
    /// What: Return the number of articles in each bucket.
    ///
    /// Output:
    /// - `(supportive, neutral, opposing)` counts
    #[must_use]
    pub const fn counts(&self) -> (usize, usize, usize) {
        (self.supportive.len(), self.neutral.len(), self.opposing.len())
    }
}

/// Sentiment column shown on the results screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sentiment {
    /// Left column.
    Supportive,
    /// Center column.
    Neutral,
    /// Right column.
    Opposing,
}

impl Sentiment {
    /// All columns in display order (left to right).
    pub const ALL: [Self; 3] = [Self::Supportive, Self::Neutral, Self::Opposing];

    /// Header label rendered above the column.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Supportive => "Positive",
            Self::Neutral => "Neutral",
            Self::Opposing => "Negative",
        }
    }

    /// Zero-based column index, matching [`Sentiment::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Supportive => 0,
            Self::Neutral => 1,
            Self::Opposing => 2,
        }
    }

    /// Column to the left, saturating at the first column.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Supportive | Self::Neutral => Self::Supportive,
            Self::Opposing => Self::Neutral,
        }
    }

    /// Column to the right, saturating at the last column.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Supportive => Self::Neutral,
            Self::Neutral | Self::Opposing => Self::Opposing,
        }
    }
}

/// Which screen is on display. Stands in for the `/` and `/search` routes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    /// Welcome text and the "Start Searching" button.
    #[default]
    Landing,
    /// Search bar, spinner or the three result columns.
    Search,
}

/// What the search screen currently shows, derived from the session flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchView {
    /// Nothing searched yet: only the search bar.
    Idle,
    /// A request is outstanding: spinner.
    Loading,
    /// The latest request settled: search bar plus columns.
    Results,
}

/// Search query sent to the background search worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryInput {
    /// Monotonic identifier used to correlate responses.
    pub id: u64,
    /// Raw query text entered by the user.
    pub text: String,
}

/// Results corresponding to a prior [`QueryInput`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResults {
    /// Echoed identifier from the originating query.
    pub id: u64,
    /// Sanitized articles; all buckets empty when the request failed.
    pub articles: ArticleResponse,
}
