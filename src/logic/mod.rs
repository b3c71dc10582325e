//! Core non-UI logic: excerpt sanitizing and the search round-trip.

pub mod query;
pub mod sanitize;
pub mod search;

pub use query::send_query;
pub use sanitize::{clean, clean_articles, clean_response};
pub use search::run_search;
