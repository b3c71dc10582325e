use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::state::{AppState, Focus, Screen, SearchView, Sentiment};
use crate::ui::columns::ENTRY_HEIGHT;
use crate::util::open_url;

use super::utils::point_in_rect;

/// Handle mouse events using the hit-test rectangles recorded by the last render.
///
/// Left clicks press buttons and open article entries; the wheel moves the
/// highlight of the column under the pointer.
/// Returns `true` to exit the app, `false` to continue.
pub fn handle_mouse_event(m: MouseEvent, app: &mut AppState) -> bool {
    let (x, y) = (m.column, m.row);
    match m.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_click(x, y, app),
        MouseEventKind::ScrollDown => scroll(x, y, app, 1),
        MouseEventKind::ScrollUp => scroll(x, y, app, -1),
        _ => {}
    }
    false
}

/// Dispatch a left click to whatever control lies under `(x, y)`.
fn handle_click(x: u16, y: u16, app: &mut AppState) {
    match app.screen {
        Screen::Landing => {
            if point_in_rect(x, y, app.start_button_rect) {
                app.open_search();
            }
        }
        Screen::Search => {
            if point_in_rect(x, y, app.back_button_rect) {
                app.go_home();
                return;
            }
            if app.session.view() == SearchView::Loading {
                return;
            }
            if point_in_rect(x, y, app.search_input_rect) {
                app.focus = Focus::Input;
                return;
            }
            for col in Sentiment::ALL {
                let i = col.index();
                if point_in_rect(x, y, app.prev_button_rects[i]) {
                    app.active_column = col;
                    app.session.page_back(col);
                    return;
                }
                if point_in_rect(x, y, app.next_button_rects[i]) {
                    app.active_column = col;
                    app.session.page_forward(col);
                    return;
                }
                if let Some(rect) = app.column_list_rects[i]
                    && point_in_rect(x, y, Some(rect))
                {
                    app.active_column = col;
                    app.focus = Focus::Results;
                    let row = usize::from((y - rect.1) / ENTRY_HEIGHT);
                    if let Some(article) = app.session.select_row(col, row) {
                        open_url(&article.url);
                    }
                    return;
                }
            }
        }
    }
}

/// Move the highlight of the column under the pointer.
fn scroll(x: u16, y: u16, app: &mut AppState, delta: isize) {
    if app.screen != Screen::Search || app.session.view() != SearchView::Results {
        return;
    }
    if let Some(col) = Sentiment::ALL
        .into_iter()
        .find(|c| point_in_rect(x, y, app.column_list_rects[c.index()]))
    {
        app.active_column = col;
        app.session.move_selection(col, delta);
    }
}
