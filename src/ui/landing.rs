//! Landing screen: welcome text and the "Start Searching" button.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::state::{AppState, Sentiment};
use crate::theme::{sentiment_color, theme};

use super::helpers::hit_rect;

/// Heading shown at the top of the landing screen.
pub const WELCOME_HEADING: &str = "Welcome to Breaking Out Of The Social Media Echo Chamber";
/// Label of the button that opens the search screen.
pub const START_LABEL: &str = "Start Searching";

/// Maximum width of the text column.
const TEXT_MAX_W: u16 = 90;

/// Render the landing screen into `area` and record the start button rect.
pub fn render_landing(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let text_w = area.width.min(TEXT_MAX_W);
    let column = Rect {
        x: area.x + (area.width - text_w) / 2,
        width: text_w,
        ..area
    };

    let sentiment = |s: Sentiment| {
        Span::styled(
            s.label(),
            Style::default()
                .fg(sentiment_color(&th, s))
                .add_modifier(Modifier::BOLD),
        )
    };
    let body = Style::default().fg(th.text);
    let lines = vec![
        Line::from(Span::styled(
            WELCOME_HEADING,
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "The way we consume news today is often shaped by algorithms that reinforce our \
             existing beliefs - creating echo chambers that are hard to break out of.",
            body,
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "Our app helps you to step outside of that bubble by showing how different \
                 sources report on the same topic, categorised into ",
                body,
            ),
            sentiment(Sentiment::Supportive),
            Span::styled(", ", body),
            sentiment(Sentiment::Neutral),
            Span::styled(" and ", body),
            sentiment(Sentiment::Opposing),
            Span::styled(" sentiment.", body),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Whether you are researching a trending story or just curious about how \
             narratives shift, we will help you get a clearer picture of the full conversation!",
            body,
        )),
    ];

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(column);

    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        chunks[1],
    );

    let btn_w = u16::try_from(START_LABEL.len() + 4)
        .unwrap_or(u16::MAX)
        .min(chunks[2].width);
    let btn = Rect {
        x: chunks[2].x + (chunks[2].width - btn_w) / 2,
        width: btn_w,
        ..chunks[2]
    };
    let button = Paragraph::new(Line::from(Span::styled(
        START_LABEL,
        Style::default().fg(th.lavender).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.lavender)),
    );
    f.render_widget(button, btn);
    app.start_button_rect = Some(hit_rect(btn));

    let hints = Line::from(vec![
        Span::styled("Enter", Style::default().fg(th.sapphire)),
        Span::styled(" start  ", Style::default().fg(th.overlay1)),
        Span::styled("q", Style::default().fg(th.sapphire)),
        Span::styled(" quit", Style::default().fg(th.overlay1)),
    ]);
    f.render_widget(
        Paragraph::new(hints).alignment(Alignment::Center),
        chunks[4],
    );
}
