use std::env;
use std::path::{Path, PathBuf};

/// Application directory name under the XDG config base.
const APP_DIR: &str = "echochamber";

/// Determine the configuration file path for `settings.conf`, searching in priority order.
///
/// Output: First existing candidate under `$XDG_CONFIG_HOME/echochamber` or
/// `$HOME/.config/echochamber`; `None` when neither has the file.
pub(crate) fn resolve_settings_config_path() -> Option<PathBuf> {
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME")
        && !xdg.trim().is_empty()
    {
        candidates.push(Path::new(&xdg).join(APP_DIR).join("settings.conf"));
    }
    if let Ok(h) = env::var("HOME") {
        candidates.push(
            Path::new(&h)
                .join(".config")
                .join(APP_DIR)
                .join("settings.conf"),
        );
    }
    candidates.into_iter().find(|p| p.is_file())
}

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// Config directory for EchoChamber (ensured to exist).
#[must_use]
pub fn config_dir() -> PathBuf {
    let dir = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join(APP_DIR);
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: `<config>/logs` (ensured to exist).
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}
