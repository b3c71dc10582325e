//! Excerpt cleanup: markup removal followed by HTML entity decoding.

use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;

use crate::state::{Article, ArticleResponse};

/// Any `<...>` run that contains no `>` of its own.
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

/// What: Strip tags from an excerpt and decode its HTML entities.
///
/// Inputs:
/// - `excerpt`: Raw excerpt text from the backend
///
/// Output:
/// - Plain text, e.g. `"<b>Hello</b> &amp; welcome"` becomes `"Hello & welcome"`.
///
/// Details:
/// - Tags are removed first, so entity-encoded markup such as `&lt;b&gt;`
///   survives as literal `<b>` text.
/// - Whitespace is left as-is.
#[must_use]
pub fn clean(excerpt: &str) -> String {
    let stripped = TAG_RE.replace_all(excerpt, "");
    decode_entities(&stripped)
}

/// What: Decode HTML character references the way a browser would.
///
/// Inputs:
/// - `text`: Text that may contain `&name;`, `&#NN;` or `&#xHH;` references
///
/// Output:
/// - Decoded text.
///
/// Details:
/// - The text is parsed with `scraper` as the content of a `<textarea>`, an
///   RCDATA element: character references are decoded but nothing is treated
///   as markup. The leading newline guards the one a textarea start tag eats.
/// - `<` is escaped to `&lt;` first so no `</textarea` in the text can end the
///   element early; it decodes back to `<`.
/// - Every input goes through the parser, so CR and CRLF always become LF.
#[must_use]
pub fn decode_entities(text: &str) -> String {
    let escaped = text.replace('<', "&lt;");
    let fragment = Html::parse_fragment(&format!("<textarea>\n{escaped}</textarea>"));
    fragment.root_element().text().collect()
}

/// What: Clean the excerpt of every article in a list.
///
/// Output:
/// - Same articles in the same order; titles and URLs untouched.
#[must_use]
pub fn clean_articles(articles: Vec<Article>) -> Vec<Article> {
    articles
        .into_iter()
        .map(|a| Article {
            excerpt: clean(&a.excerpt),
            ..a
        })
        .collect()
}

/// What: Clean all three buckets of a backend response.
#[must_use]
pub fn clean_response(resp: ArticleResponse) -> ArticleResponse {
    ArticleResponse {
        supportive: clean_articles(resp.supportive),
        neutral: clean_articles(resp.neutral),
        opposing: clean_articles(resp.opposing),
    }
}
