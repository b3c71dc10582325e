//! Small utility helpers for URL encoding, browser launching and config parsing.

pub mod config;

use std::fmt::Write;

/// What: Percent-encode a string as a single URL path segment.
///
/// Inputs:
/// - `input`: String to encode.
///
/// Output:
/// - Returns a percent-encoded string where reserved characters are escaped.
///
/// Details:
/// - Matches JavaScript's `encodeURIComponent`: `A-Z`, `a-z`, `0-9` and
///   `- _ . ! ~ * ' ( )` are left as-is.
/// - Space is encoded as `%20` (not `+`), `/` as `%2F`.
/// - Operates on UTF-8 bytes; non-ASCII characters become one `%XX` per byte.
#[must_use]
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        match b {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(char::from(b)),
            _ => {
                out.push('%');
                let _ = write!(out, "{b:02X}");
            }
        }
    }
    out
}

/// What: Decide whether a URL is safe to hand to the system browser.
///
/// Output:
/// - `true` for `http://` and `https://` URLs only.
#[must_use]
pub fn is_browsable_url(url: &str) -> bool {
    let lower = url.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// What: Open a URL in the default browser (cross-platform).
///
/// Inputs:
/// - `url`: URL string to open.
///
/// Output:
/// - `true` when a launcher was spawned; `false` for non-web URLs.
///
/// Details:
/// - Only `http(s)` URLs are opened; anything else from the backend is refused.
/// - On Windows, uses `cmd /c start`.
/// - On Unix-like systems (Linux/macOS), uses `xdg-open` (Linux) or `open` (macOS).
/// - Spawns the command in a background thread and ignores errors.
/// - During tests, nothing is spawned.
pub fn open_url(url: &str) -> bool {
    if !is_browsable_url(url) {
        tracing::warn!(url, "refusing to open non-web url");
        return false;
    }
    tracing::info!(url, "opening article in browser");
    #[cfg(not(test))]
    {
        let url = url.to_string();
        std::thread::spawn(move || {
            #[cfg(target_os = "windows")]
            {
                let _ = std::process::Command::new("cmd")
                    .args(["/c", "start", "", &url])
                    .stdin(std::process::Stdio::null())
                    .stdout(std::process::Stdio::null())
                    .stderr(std::process::Stdio::null())
                    .spawn();
            }
            #[cfg(not(target_os = "windows"))]
            {
                let _ = std::process::Command::new("xdg-open")
                    .arg(&url)
                    .stdin(std::process::Stdio::null())
                    .stdout(std::process::Stdio::null())
                    .stderr(std::process::Stdio::null())
                    .spawn()
                    .or_else(|_| {
                        std::process::Command::new("open")
                            .arg(&url)
                            .stdin(std::process::Stdio::null())
                            .stdout(std::process::Stdio::null())
                            .stderr(std::process::Stdio::null())
                            .spawn()
                    });
            }
        });
    }
    true
}
