//! Rendering entry point; every frame is drawn from `AppState` alone.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::Block,
};

use crate::state::{AppState, Screen};
use crate::theme::theme;

pub mod columns;
mod helpers;
pub mod landing;
pub mod search;

/// What: Render one frame.
///
/// Inputs:
/// - `f`: Frame to draw into
/// - `app`: Application state; hit-test rectangles are refreshed
///
/// Details:
/// - Rectangles of controls not on screen are cleared first so stale clicks
///   cannot hit them.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    app.clear_hit_rects();

    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let inner = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    };
    if inner.width == 0 || inner.height == 0 {
        return;
    }
    match app.screen {
        Screen::Landing => landing::render_landing(f, app, inner),
        Screen::Search => search::render_search(f, app, inner),
    }
}
