//! Application state split into the session, pager and value types.

pub mod app_state;
pub mod pager;
pub mod session;
pub mod types;

pub use app_state::{AppState, Focus, HitRect};
pub use pager::{PAGE_SIZE, Pager};
pub use session::SearchSession;
pub use types::{
    Article, ArticleResponse, QueryInput, Screen, SearchResults, SearchView, Sentiment,
};
