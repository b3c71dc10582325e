//! One search round-trip: fetch, sanitize, and fold failures into empty results.

use crate::logic::sanitize::clean_response;
use crate::sources;
use crate::state::{ArticleResponse, QueryInput, SearchResults};

/// What: Run a single search for the search worker.
///
/// Inputs:
/// - `client`: Shared HTTP client
/// - `base_url`: Backend base URL
/// - `query`: Query with the id allocated by `SearchSession::begin`
///
/// Output:
/// - `SearchResults` echoing the query id. Excerpts are sanitized on
///   success; all three buckets are empty on any failure.
///
/// Details:
/// - Connection errors, HTTP error statuses and malformed bodies are not
///   distinguished; each is logged and reported as empty results.
pub async fn run_search(
    client: &reqwest::Client,
    base_url: &str,
    query: QueryInput,
) -> SearchResults {
    let articles = match sources::fetch_articles(client, base_url, &query.text).await {
        Ok(resp) => clean_response(resp),
        Err(e) => {
            tracing::warn!(
                id = query.id,
                query = %query.text,
                error = %e,
                "error fetching articles"
            );
            ArticleResponse::default()
        }
    };
    SearchResults {
        id: query.id,
        articles,
    }
}
