//! Network data retrieval.

mod articles;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

pub use articles::{articles_url, build_client, fetch_articles};
