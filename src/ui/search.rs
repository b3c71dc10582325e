//! Search screen: back button, heading, then search bar, spinner or results.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::Position,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::state::{AppState, Focus, SearchView, Sentiment};
use crate::theme::{sentiment_color, theme};

use super::columns::render_column;
use super::helpers::{hit_rect, text_width, truncate_to_width};

/// Label of the control returning to the landing screen.
pub const BACK_LABEL: &str = "← Back to Homepage";
/// Heading of the search screen.
pub const SEARCH_HEADING: &str = "EchoChamber Search";
/// Placeholder of the empty search bar.
pub const PLACEHOLDER: &str = "Enter a topic...";
/// Text next to the spinner.
pub const LOADING_LABEL: &str = "Loading articles...";
/// Braille spinner frames, advanced once per tick.
const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Render the search screen into `area`, recording every clickable rect.
pub fn render_search(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // back
            Constraint::Length(1), // heading
            Constraint::Length(3), // search bar or spinner
            Constraint::Min(0),    // columns
            Constraint::Length(1), // hints
        ])
        .split(area);

    let back_w = u16::try_from(text_width(BACK_LABEL))
        .unwrap_or(u16::MAX)
        .min(chunks[0].width);
    f.render_widget(
        Paragraph::new(Span::styled(BACK_LABEL, Style::default().fg(th.sapphire))),
        chunks[0],
    );
    app.back_button_rect = Some((chunks[0].x, chunks[0].y, back_w, 1));

    f.render_widget(
        Paragraph::new(Span::styled(
            SEARCH_HEADING,
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        chunks[1],
    );

    match app.session.view() {
        SearchView::Idle => {
            render_search_bar(f, app, chunks[2], PLACEHOLDER);
            render_hints(f, chunks[4], &[("Enter", "search"), ("Esc", "home")]);
        }
        SearchView::Loading => {
            let frame = SPINNER[app.spinner_frame % SPINNER.len()];
            let line = Line::from(vec![
                Span::styled(frame, Style::default().fg(th.lavender)),
                Span::raw(" "),
                Span::styled(LOADING_LABEL, Style::default().fg(th.subtext0)),
            ]);
            let spin_area = if chunks[2].height >= 3 {
                Rect {
                    y: chunks[2].y + 1,
                    height: 1,
                    ..chunks[2]
                }
            } else {
                chunks[2]
            };
            f.render_widget(Paragraph::new(line).alignment(Alignment::Center), spin_area);
            render_hints(f, chunks[4], &[("Esc", "home")]);
        }
        SearchView::Results => {
            let placeholder = app.session.query().to_string();
            render_search_bar(f, app, chunks[2], &placeholder);
            render_results(f, app, chunks[3]);
            let hints: &[(&str, &str)] = if app.focus == Focus::Results {
                &[
                    ("h/l", "column"),
                    ("j/k", "select"),
                    ("[/]", "page"),
                    ("Enter", "open"),
                    ("/", "search"),
                    ("Esc", "home"),
                ]
            } else {
                &[("Enter", "search"), ("Tab", "results"), ("Esc", "home")]
            };
            render_hints(f, chunks[4], hints);
        }
    }
}

/// What: Draw the search bar and place the terminal cursor.
///
/// Inputs:
/// - `placeholder`: Muted text shown while `app.input` is empty
///
/// Details:
/// - The cursor is only shown while the bar is focused.
fn render_search_bar(f: &mut Frame, app: &mut AppState, area: Rect, placeholder: &str) {
    let th = theme();
    let focused = app.focus == Focus::Input;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { th.sapphire } else { th.surface2 }));
    let inner = block.inner(area);
    let width = usize::from(inner.width.saturating_sub(2));

    let content = if app.input.is_empty() {
        Span::styled(truncate_to_width(placeholder, width), Style::default().fg(th.overlay1))
    } else {
        Span::styled(app.input.clone(), Style::default().fg(th.text))
    };
    let line = Line::from(vec![Span::styled("> ", Style::default().fg(th.sapphire)), content]);
    f.render_widget(Paragraph::new(line).block(block), area);
    app.search_input_rect = Some(hit_rect(inner));

    if focused {
        let before: String = app.input.chars().take(app.caret).collect();
        let offset = u16::try_from(text_width(&before)).unwrap_or(u16::MAX);
        let x = inner
            .x
            .saturating_add(2)
            .saturating_add(offset)
            .min(inner.x + inner.width.saturating_sub(1));
        f.set_cursor_position(Position::new(x, inner.y));
    }
}

/// Draw the sentiment headers and the three paginated columns.
fn render_results(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(app.layout_left_pct),
            Constraint::Percentage(app.layout_center_pct),
            Constraint::Percentage(app.layout_right_pct),
        ])
        .split(area);

    for col in Sentiment::ALL {
        let rect = cols[col.index()];
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(rect);
        let count = app.session.articles(col).len();
        let header = Line::from(vec![
            Span::styled(
                col.label(),
                Style::default()
                    .fg(sentiment_color(&th, col))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" ({count})"), Style::default().fg(th.overlay1)),
        ]);
        f.render_widget(Paragraph::new(header).alignment(Alignment::Center), parts[0]);
        render_column(f, app, col, parts[1]);
    }
}

/// Render a one-line `key action` hint bar.
fn render_hints(f: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let th = theme();
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, action) in hints {
        spans.push(Span::styled(*key, Style::default().fg(th.sapphire)));
        spans.push(Span::styled(format!(" {action}  "), Style::default().fg(th.overlay1)));
    }
    f.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Center), area);
}
