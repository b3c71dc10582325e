//! Articles backend client: `GET <base>/articles/<query>`.

use std::time::Duration;

use tracing::{debug, info};

use crate::state::ArticleResponse;
use crate::util::percent_encode;

type Result<T> = super::Result<T>;

/// What: Build the request URL for a query.
///
/// Inputs:
/// - `base_url`: Backend base such as `http://127.0.0.1:8000` (trailing `/` tolerated)
/// - `query`: Query text exactly as typed
///
/// Output:
/// - `<base>/articles/<percent-encoded query>`; an empty query yields `<base>/articles/`.
#[must_use]
pub fn articles_url(base_url: &str, query: &str) -> String {
    format!(
        "{}/articles/{}",
        base_url.trim_end_matches('/'),
        percent_encode(query)
    )
}

/// What: Build the HTTP client used for all searches in a run.
///
/// Inputs:
/// - `timeout_secs`: Overall request timeout; `0` means none
///
/// Output:
/// - Configured `reqwest::Client`.
///
/// # Errors
/// - Returns `Err` when the TLS backend cannot be initialized.
pub fn build_client(timeout_secs: u64) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder().user_agent(format!(
        "EchoChamber/{}",
        env!("CARGO_PKG_VERSION")
    ));
    if timeout_secs > 0 {
        builder = builder.timeout(Duration::from_secs(timeout_secs));
    }
    Ok(builder.build()?)
}

/// What: Fetch the sentiment buckets for a query.
///
/// Inputs:
/// - `client`: Shared HTTP client
/// - `base_url`: Backend base URL
/// - `query`: Query text exactly as typed
///
/// Output:
/// - `Ok(ArticleResponse)` with raw (unsanitized) excerpts.
///
/// # Errors
/// - Returns `Err` when the connection fails
/// - Returns `Err` when the backend answers with a non-2xx status
/// - Returns `Err` when the body is not a valid `ArticleResponse`
pub async fn fetch_articles(
    client: &reqwest::Client,
    base_url: &str,
    query: &str,
) -> Result<ArticleResponse> {
    let url = articles_url(base_url, query);
    debug!(url = %url, "requesting articles");
    let resp = client.get(&url).send().await?.error_for_status()?;
    let status = resp.status().as_u16();
    let body = resp.json::<ArticleResponse>().await?;
    let (supportive, neutral, opposing) = body.counts();
    info!(
        url = %url,
        status,
        supportive,
        neutral,
        opposing,
        "fetched articles"
    );
    Ok(body)
}
