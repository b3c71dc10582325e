use ratatui::style::Color;

/// Default backend base URL when neither settings nor CLI provide one.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Application theme palette used by rendering code.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Darkest background shade, used as text on highlighted rows.
    pub crust: Color,
    /// Subtle surface color for selected rows.
    pub surface1: Color,
    /// Border color for panels.
    pub surface2: Color,
    /// Muted color for placeholders and disabled controls.
    pub overlay1: Color,
    /// Secondary muted color for excerpts.
    pub overlay2: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Accent for focused borders and the caret.
    pub sapphire: Color,
    /// Accent for headings.
    pub mauve: Color,
    /// Positive sentiment.
    pub green: Color,
    /// Neutral sentiment.
    pub yellow: Color,
    /// Negative sentiment.
    pub red: Color,
    /// Accent for buttons and highlights.
    pub lavender: Color,
}

/// User-configurable settings loaded from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Base URL of the articles backend, without a trailing slash.
    pub api_base_url: String,
    /// Overall request timeout in seconds; `0` disables the timeout.
    pub request_timeout_secs: u64,
    /// Percentage width of the Positive column.
    pub layout_left_pct: u16,
    /// Percentage width of the Neutral column.
    pub layout_center_pct: u16,
    /// Percentage width of the Negative column.
    pub layout_right_pct: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: 0,
            layout_left_pct: 33,
            layout_center_pct: 34,
            layout_right_pct: 33,
        }
    }
}
