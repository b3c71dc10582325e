//! Theme palette, settings file and config paths.

/// Path resolution for config directories.
mod paths;
/// Settings loading and parsing.
mod settings;
/// Palette construction.
mod store;
/// Theme and settings type definitions.
mod types;

pub use paths::{config_dir, logs_dir};
pub use settings::{load_settings_from, parse_settings, settings};
pub use store::{sentiment_color, theme};
pub use types::{DEFAULT_API_BASE_URL, Settings, Theme};
