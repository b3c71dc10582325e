//! EchoChamber runtime (terminal lifecycle, search worker, and event loop).

use crossterm::event::Event as CEvent;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::{
    select,
    sync::mpsc,
    task::JoinHandle,
    time::{Duration, interval},
};

use crate::logic::{run_search, send_query};
use crate::sources;
use crate::state::{AppState, Focus, QueryInput, SearchResults, Sentiment};
use crate::theme::Settings;
use crate::ui::ui;

use super::terminal::{restore_terminal, setup_terminal};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Interval between UI ticks (spinner animation).
const TICK_MS: u64 = 200;

/// Resolved startup options (CLI merged over settings).
#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    /// Settings loaded from `settings.conf`, with CLI overrides applied.
    pub settings: Settings,
    /// Skip raw mode, the alternate screen and terminal input.
    pub headless: bool,
    /// Query to run immediately on the search screen.
    pub initial_query: Option<String>,
}

/// What: Spawn the search worker.
///
/// Inputs:
/// - `client`: HTTP client shared by all searches
/// - `base_url`: Backend base URL
/// - `query_rx`: Queries issued by the UI
/// - `results_tx`: Channel receiving one `SearchResults` per query
///
/// Output:
/// - Handle of the worker task; it ends when `query_rx` closes.
///
/// Details:
/// - Every query gets its own task, so overlapping searches run concurrently
///   and may settle in any order. The UI drops stale ids.
pub fn spawn_search_worker(
    client: reqwest::Client,
    base_url: String,
    mut query_rx: mpsc::UnboundedReceiver<QueryInput>,
    results_tx: mpsc::UnboundedSender<SearchResults>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(q) = query_rx.recv().await {
            let client = client.clone();
            let base_url = base_url.clone();
            let tx = results_tx.clone();
            tokio::spawn(async move {
                let results = run_search(&client, &base_url, q).await;
                let _ = tx.send(results);
            });
        }
        tracing::debug!("search worker stopped");
    })
}

/// What: Apply a worker response to the UI state.
///
/// Details:
/// - When results were applied and any column has articles, focus moves to
///   the first non-empty column so it can be browsed right away.
fn handle_results(app: &mut AppState, results: SearchResults) {
    let id = results.id;
    if !app.session.complete(results) {
        return;
    }
    tracing::debug!(id, "search results applied");
    if let Some(col) = Sentiment::ALL
        .into_iter()
        .find(|c| !app.session.articles(*c).is_empty())
    {
        app.active_column = col;
        app.focus = Focus::Results;
    }
}

/// What: Enter the alternate screen and build the ratatui terminal.
///
/// Details:
/// - When the terminal cannot be built after setup succeeded, raw mode and
///   the alternate screen are restored before the error is returned.
fn open_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    setup_terminal()?;
    let terminal = undo_on_err(
        Terminal::new(CrosstermBackend::new(std::io::stdout())),
        || {
            if let Err(e) = restore_terminal() {
                tracing::warn!(error = %e, "failed to restore terminal");
            }
        },
    )?;
    Ok(terminal)
}

/// Run `undo` when `res` is an error, then hand `res` back unchanged.
fn undo_on_err<T, E>(res: std::result::Result<T, E>, undo: impl FnOnce()) -> std::result::Result<T, E> {
    if res.is_err() {
        undo();
    }
    res
}

/// What: Run the EchoChamber TUI end-to-end: initialize terminal and state, spawn the
/// search worker, drive the event loop, and restore the terminal on exit.
///
/// Inputs:
/// - `opts`: Resolved settings and startup flags
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal or client errors.
///
/// Details:
/// - Headless mode (flag or `ECHOCHAMBER_TEST_HEADLESS=1`) skips terminal setup and input,
///   which lets smoke tests drive the runtime without a TTY.
pub async fn run(opts: RunOptions) -> Result<()> {
    let headless =
        opts.headless || std::env::var("ECHOCHAMBER_TEST_HEADLESS").ok().as_deref() == Some("1");
    let client = sources::build_client(opts.settings.request_timeout_secs)?;
    tracing::info!(
        api = %opts.settings.api_base_url,
        timeout_secs = opts.settings.request_timeout_secs,
        headless,
        "runtime starting"
    );

    let mut terminal = if headless { None } else { Some(open_terminal()?) };

    let mut app = AppState::from_settings(&opts.settings);

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<CEvent>();
    let (query_tx, query_rx) = mpsc::unbounded_channel::<QueryInput>();
    let (results_tx, mut results_rx) = mpsc::unbounded_channel::<SearchResults>();

    if !headless {
        std::thread::spawn(move || {
            loop {
                match crossterm::event::read() {
                    Ok(ev) => {
                        if event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::debug!(error = %e, "terminal read failed; retrying");
                    }
                }
            }
        });
    }

    let worker = spawn_search_worker(
        client,
        opts.settings.api_base_url.clone(),
        query_rx,
        results_tx,
    );

    if let Some(q) = opts.initial_query {
        app.open_search();
        app.input = q;
        app.caret = app.input.chars().count();
        send_query(&mut app, &query_tx);
    }

    let mut ticker = interval(Duration::from_millis(TICK_MS));
    loop {
        if let Some(t) = terminal.as_mut() {
            let _ = t.draw(|f| ui(f, &mut app));
        } else if !app.session.is_loading() {
            // Headless runs stop once the initial search (if any) has settled.
            let (positive, neutral, negative) = (
                app.session.articles(Sentiment::Supportive).len(),
                app.session.articles(Sentiment::Neutral).len(),
                app.session.articles(Sentiment::Opposing).len(),
            );
            tracing::info!(positive, neutral, negative, "headless run settled");
            break;
        }

        select! {
            Some(ev) = event_rx.recv() => {
                if crate::events::handle_event(&ev, &mut app, &query_tx) {
                    break;
                }
            }
            Some(results) = results_rx.recv() => handle_results(&mut app, results),
            _ = ticker.tick() => {
                if app.session.is_loading() {
                    app.spinner_frame = app.spinner_frame.wrapping_add(1);
                }
            }
        }
    }

    drop(query_tx);
    worker.abort();
    if !headless {
        restore_terminal()?;
    }
    tracing::info!("runtime stopped");
    Ok(())
}
