//! Integration tests for UI rendering using ratatui's `TestBackend`.
//!
//! These tests render each screen from a prepared `AppState` and check the
//! visible labels and the hit rectangles recorded for mouse handling.

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend};

use echochamber::events::handle_mouse_event;
use echochamber::state::{
    AppState, Article, ArticleResponse, Screen, SearchResults, SearchView, Sentiment,
};
use echochamber::ui;

/// Render one frame of `app` and return the buffer as a single string.
fn render(app: &mut AppState, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal
        .draw(|f| ui::ui(f, app))
        .expect("draw frame");
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(ratatui::buffer::Cell::symbol)
        .collect()
}

fn articles(prefix: &str, n: usize) -> Vec<Article> {
    (0..n)
        .map(|i| Article {
            title: format!("{prefix} {i}"),
            excerpt: format!("about {prefix} {i}"),
            url: format!("https://news.example/{prefix}/{i}"),
        })
        .collect()
}

/// App on the search screen with settled results.
fn app_with_results(resp: ArticleResponse) -> AppState {
    let mut app = AppState::default();
    app.open_search();
    let q = app.session.begin("climate change");
    assert!(app.session.complete(SearchResults {
        id: q.id,
        articles: resp,
    }));
    app
}

fn click(app: &mut AppState, rect: Option<(u16, u16, u16, u16)>) {
    let (x, y, w, h) = rect.expect("rect recorded");
    let ev = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: x + w / 2,
        row: y + h / 2,
        modifiers: KeyModifiers::empty(),
    };
    let _ = handle_mouse_event(ev, app);
}

#[test]
/// What: Landing screen shows the welcome text and records the start button.
///
/// Output:
/// - Heading, category names and button label are visible; clicking the button
///   switches to the search screen.
fn landing_renders_and_start_button_opens_search() {
    let mut app = AppState::default();
    let text = render(&mut app, 120, 30);
    assert!(text.contains("Welcome to Breaking Out Of The Social Media Echo Chamber"));
    assert!(text.contains("Start Searching"));
    assert!(text.contains("The way we consume news today"));
    assert!(text.contains("Our app helps you"));
    assert!(text.contains("Positive"));
    assert!(text.contains("Negative"));
    assert!(app.back_button_rect.is_none());

    let rect = app.start_button_rect;
    click(&mut app, rect);
    assert_eq!(app.screen, Screen::Search);
}

#[test]
/// What: Idle search screen shows heading, back control and placeholder.
fn idle_search_shows_placeholder() {
    let mut app = AppState::default();
    app.open_search();
    let text = render(&mut app, 120, 30);
    assert!(text.contains("← Back to Homepage"));
    assert!(text.contains("EchoChamber Search"));
    assert!(text.contains("Enter a topic..."));
    assert!(app.search_input_rect.is_some());
    assert!(app.column_list_rects.iter().all(Option::is_none));
}

#[test]
/// What: Loading view shows the spinner text and hides the search bar.
fn loading_view_shows_spinner_text() {
    let mut app = AppState::default();
    app.open_search();
    app.session.begin("climate change");
    assert_eq!(app.session.view(), SearchView::Loading);
    let text = render(&mut app, 120, 30);
    assert!(text.contains("Loading articles..."));
    assert!(!text.contains("Enter a topic..."));
    assert!(app.search_input_rect.is_none());
}

#[test]
/// What: Results view lists 1/0/2 articles under the three headers.
///
/// Output:
/// - Headers with counts, titles and excerpts, "No articles" for the empty column,
///   and the last query as the search bar placeholder.
fn results_view_renders_three_columns() {
    let mut app = app_with_results(ArticleResponse {
        supportive: articles("upbeat", 1),
        neutral: vec![],
        opposing: articles("gloomy", 2),
    });
    let text = render(&mut app, 120, 30);
    assert!(text.contains("Positive (1)"));
    assert!(text.contains("Neutral (0)"));
    assert!(text.contains("Negative (2)"));
    assert!(text.contains("upbeat 0"));
    assert!(text.contains("about gloomy 1"));
    assert!(text.contains("No articles"));
    assert!(text.contains("climate change"));
    assert!(text.contains("Page 1/1"));
    for col in Sentiment::ALL {
        assert!(app.prev_button_rects[col.index()].is_some());
        assert!(app.next_button_rects[col.index()].is_some());
    }
}

#[test]
/// What: Seven articles page as five then two, driven by the Next/Prev buttons.
///
/// Inputs:
/// - Neutral column with 7 articles; clicks on its rendered buttons.
///
/// Output:
/// - Page 1/2 shows items 0-4; after Next, page 2/2 shows items 5-6; Next is
///   then a no-op and Prev returns to the first page.
fn pagination_buttons_flip_pages() {
    let mut app = app_with_results(ArticleResponse {
        neutral: articles("steady", 7),
        ..ArticleResponse::default()
    });
    let col = Sentiment::Neutral;

    let text = render(&mut app, 120, 30);
    assert!(text.contains("Page 1/2"));
    assert!(text.contains("steady 4"));
    assert!(!text.contains("steady 5"));

    let rect = app.next_button_rects[col.index()];
    click(&mut app, rect);
    assert_eq!(app.session.pager(col).page, 1);
    let text = render(&mut app, 120, 30);
    assert!(text.contains("Page 2/2"));
    assert!(text.contains("steady 5"));
    assert!(text.contains("steady 6"));
    assert!(!text.contains("steady 0"));

    let rect = app.next_button_rects[col.index()];
    click(&mut app, rect);
    assert_eq!(app.session.pager(col).page, 1);

    let rect = app.prev_button_rects[col.index()];
    click(&mut app, rect);
    assert_eq!(app.session.pager(col).page, 0);
}

#[test]
/// What: The back control returns to the landing screen and drops results.
fn back_button_returns_home() {
    let mut app = app_with_results(ArticleResponse {
        supportive: articles("upbeat", 1),
        ..ArticleResponse::default()
    });
    render(&mut app, 120, 30);
    let rect = app.back_button_rect;
    click(&mut app, rect);
    assert_eq!(app.screen, Screen::Landing);
    assert_eq!(app.session.view(), SearchView::Idle);
    let text = render(&mut app, 120, 30);
    assert!(text.contains("Start Searching"));
}

#[test]
/// What: Tiny terminals render every screen without panicking.
fn tiny_terminal_does_not_panic() {
    let mut app = AppState::default();
    render(&mut app, 10, 4);
    app.open_search();
    render(&mut app, 10, 4);
    app.session.begin("x");
    render(&mut app, 12, 5);
    let mut app = app_with_results(ArticleResponse {
        opposing: articles("gloomy", 9),
        ..ArticleResponse::default()
    });
    render(&mut app, 16, 6);
    render(&mut app, 1, 1);
}
