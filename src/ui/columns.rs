//! Paginated article column: title/excerpt entries plus Prev/Next controls.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use crate::state::{AppState, Focus, Pager, Sentiment};
use crate::theme::{sentiment_color, theme};

use super::helpers::{hit_rect, one_line, text_width, truncate_to_width};

/// Lines taken by one article entry (title, excerpt).
pub const ENTRY_HEIGHT: u16 = 2;

/// Label of the back control.
const PREV_LABEL: &str = "◀ Prev";
/// Label of the forward control.
const NEXT_LABEL: &str = "Next ▶";

/// What: Render one result column into `area` and record its hit rectangles.
///
/// Inputs:
/// - `f`: Frame to draw into
/// - `app`: Application state; hit rects for this column are updated
/// - `col`: Which sentiment column to draw
/// - `area`: Column rectangle including its border
///
/// Details:
/// - Only the current page (at most `PAGE_SIZE` entries) is drawn.
/// - Disabled controls are drawn muted; their rects are still recorded and
///   clicks on them are no-ops because paging is bounded by the pager.
pub fn render_column(f: &mut Frame, app: &mut AppState, col: Sentiment, area: Rect) {
    let th = theme();
    let accent = sentiment_color(&th, col);
    let is_active = app.focus == Focus::Results && app.active_column == col;
    let articles = app.session.articles(col);
    let pager = *app.session.pager(col);
    let len = articles.len();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if is_active { accent } else { th.surface2 }));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);
    let list_area = parts[0];
    let footer_area = parts[1];

    let width = usize::from(list_area.width);
    let items: Vec<ListItem> = if len == 0 {
        vec![ListItem::new(Line::from(Span::styled(
            "No articles",
            Style::default().fg(th.overlay1),
        )))]
    } else {
        pager
            .visible(articles)
            .iter()
            .enumerate()
            .map(|(row, a)| {
                let selected = is_active && row == pager.selected;
                let marker = if selected { "> " } else { "  " };
                let title_style = if selected {
                    Style::default()
                        .fg(th.crust)
                        .bg(accent)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(th.text).add_modifier(Modifier::BOLD)
                };
                let avail = width.saturating_sub(marker.len());
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(marker, Style::default().fg(accent)),
                        Span::styled(truncate_to_width(&one_line(&a.title), avail), title_style),
                    ]),
                    Line::from(vec![
                        Span::raw("  "),
                        Span::styled(
                            truncate_to_width(&one_line(&a.excerpt), avail),
                            if selected {
                                Style::default().fg(th.text).bg(th.surface1)
                            } else {
                                Style::default().fg(th.overlay2)
                            },
                        ),
                    ]),
                ])
            })
            .collect()
    };
    f.render_widget(List::new(items), list_area);

    let visible_rows = u16::try_from(pager.visible(articles).len()).unwrap_or(0);
    let rows_h = (visible_rows * ENTRY_HEIGHT).min(list_area.height);
    let i = col.index();
    app.column_list_rects[i] = Some(hit_rect(Rect {
        height: rows_h,
        ..list_area
    }));

    render_footer(f, app, col, &pager, len, footer_area);
}

/// Draw `◀ Prev   Page x/y   Next ▶` and record the button rects.
fn render_footer(f: &mut Frame, app: &mut AppState, col: Sentiment, pager: &Pager, len: usize, area: Rect) {
    let th = theme();
    let enabled = Style::default().fg(th.lavender).add_modifier(Modifier::BOLD);
    let disabled = Style::default().fg(th.overlay1);
    let page_label = format!("Page {}/{}", pager.page + 1, Pager::page_count(len));

    let prev_w = u16::try_from(text_width(PREV_LABEL)).unwrap_or(0);
    let next_w = u16::try_from(text_width(NEXT_LABEL)).unwrap_or(0);
    let label_w = u16::try_from(text_width(&page_label)).unwrap_or(0);
    let gap = area.width.saturating_sub(prev_w + next_w + label_w) / 2;

    let line = Line::from(vec![
        Span::styled(PREV_LABEL, if pager.can_back() { enabled } else { disabled }),
        Span::raw(" ".repeat(usize::from(gap))),
        Span::styled(page_label, Style::default().fg(th.subtext0)),
        Span::raw(" ".repeat(usize::from(gap))),
        Span::styled(NEXT_LABEL, if pager.can_forward(len) { enabled } else { disabled }),
    ]);
    f.render_widget(Paragraph::new(line), area);

    let i = col.index();
    app.prev_button_rects[i] = Some((area.x, area.y, prev_w.min(area.width), 1));
    let next_x = area.x + (prev_w + gap * 2 + label_w).min(area.width);
    app.next_button_rects[i] = Some((next_x, area.y, next_w.min(area.width.saturating_sub(next_x - area.x)), 1));
}
