use std::fs;
use std::path::Path;

use super::paths::{config_dir, resolve_settings_config_path};
use super::types::Settings;
use crate::util::config::{parse_key_value, skip_comment_or_empty};

/// Content written to `settings.conf` on first run.
pub(crate) const SKELETON_SETTINGS_CONTENT: &str = "\
# EchoChamber settings
#
# Base URL of the articles backend. Searches request <api_base_url>/articles/<query>.
api_base_url = http://127.0.0.1:8000

# Overall request timeout in seconds (0 = wait indefinitely).
request_timeout_secs = 0

# Column widths in percent; the three values must add up to 100.
layout_left_pct = 33
layout_center_pct = 34
layout_right_pct = 33
";

/// What: Load user settings from `settings.conf`.
///
/// Output:
/// - Parsed [`Settings`]; `Settings::default()` when the file is missing or unreadable.
///
/// Details:
/// - Writes a commented skeleton on first run so users can discover the keys.
#[must_use]
pub fn settings() -> Settings {
    let path = resolve_settings_config_path().unwrap_or_else(|| {
        let target = config_dir().join("settings.conf");
        if !target.exists() {
            let _ = fs::write(&target, SKELETON_SETTINGS_CONTENT);
        }
        target
    });
    load_settings_from(&path)
}

/// What: Load settings from an explicit file path.
///
/// Output:
/// - Parsed settings, or defaults when the file cannot be read.
#[must_use]
pub fn load_settings_from(path: &Path) -> Settings {
    match fs::read_to_string(path) {
        Ok(content) => {
            tracing::debug!(path = %path.display(), "loaded settings file");
            parse_settings(&content)
        }
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "settings file unavailable; using defaults");
            Settings::default()
        }
    }
}

/// What: Parse `settings.conf` content.
///
/// Inputs:
/// - `content`: Full file text
///
/// Output:
/// - Settings with every recognized, valid key applied over the defaults.
///
/// Details:
/// - Unknown keys and unparseable values are logged and ignored.
/// - Column widths only apply when all three add up to 100.
/// - A trailing `/` on `api_base_url` is dropped.
#[must_use]
pub fn parse_settings(content: &str) -> Settings {
    let mut out = Settings::default();
    let mut left = out.layout_left_pct;
    let mut center = out.layout_center_pct;
    let mut right = out.layout_right_pct;
    for line in content.lines() {
        if skip_comment_or_empty(line) {
            continue;
        }
        let Some((key, val)) = parse_key_value(line) else {
            continue;
        };
        match key.as_str() {
            "api_base_url" | "api_url" => {
                let v = val.trim_end_matches('/');
                if v.is_empty() {
                    tracing::warn!(key = %key, "empty api_base_url ignored");
                } else {
                    out.api_base_url = v.to_string();
                }
            }
            "request_timeout_secs" => match val.parse::<u64>() {
                Ok(v) => out.request_timeout_secs = v,
                Err(_) => tracing::warn!(key = %key, value = %val, "invalid timeout ignored"),
            },
            "layout_left_pct" => parse_pct(&key, &val, &mut left),
            "layout_center_pct" => parse_pct(&key, &val, &mut center),
            "layout_right_pct" => parse_pct(&key, &val, &mut right),
            _ => tracing::debug!(key = %key, "unknown settings key ignored"),
        }
    }
    if u32::from(left) + u32::from(center) + u32::from(right) == 100 {
        out.layout_left_pct = left;
        out.layout_center_pct = center;
        out.layout_right_pct = right;
    } else {
        tracing::warn!(left, center, right, "column widths must sum to 100; using defaults");
    }
    out
}

/// Parse a percentage into `slot`, leaving it untouched on failure.
fn parse_pct(key: &str, val: &str, slot: &mut u16) {
    match val.parse::<u16>() {
        Ok(v) if v <= 100 => *slot = v,
        _ => tracing::warn!(key = %key, value = %val, "invalid percentage ignored"),
    }
}
