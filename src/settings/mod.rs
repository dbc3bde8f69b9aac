//! User settings loaded from `settings.conf`.
//!
//! The file is a flat list of `key = value` lines. Blank lines and lines
//! starting with `#`, `//` or `;` are ignored, as are unknown keys. Command
//! line flags take precedence over anything configured here.

mod paths;

use std::path::{Path, PathBuf};

pub use paths::{config_dir, logs_dir};

use crate::pages::DEFAULT_DATA_BASE;

/// Name of the settings file inside the config directory.
pub const SETTINGS_FILE: &str = "settings.conf";

/// Effective configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Directory or URL prefix holding `<slug>.json` data files.
    pub data_base: String,
    /// Output directory for generated pages.
    pub pages_dir: PathBuf,
    /// Default log level when no flag overrides it.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_base: DEFAULT_DATA_BASE.to_string(),
            pages_dir: PathBuf::from("."),
            log_level: "info".to_string(),
        }
    }
}

/// What: Check if a line should be skipped (empty or comment).
///
/// Inputs:
/// - `line`: Line to check
///
/// Output:
/// - `true` for blank lines and lines starting with `#`, `//`, or `;`
fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// What: Split a `key = value` line.
///
/// Inputs:
/// - `line`: Settings line
///
/// Output:
/// - Normalized key (lower-case, `-`/`.`/spaces as `_`) and trimmed value;
///   `None` when the line has no `=`.
fn parse_key_value(line: &str) -> Option<(String, &str)> {
    let (key, value) = line.trim().split_once('=')?;
    let key = key.trim().to_lowercase().replace(['.', '-', ' '], "_");
    Some((key, value.trim()))
}

/// What: Parse settings file content on top of the defaults.
///
/// Inputs:
/// - `content`: Text of `settings.conf`
///
/// Output:
/// - Settings with every recognized key applied.
///
/// Details:
/// - Empty values are ignored so a blank `data_base =` keeps the default.
pub fn parse_settings(content: &str) -> Settings {
    let mut settings = Settings::default();
    for line in content.lines() {
        if skip_comment_or_empty(line) {
            continue;
        }
        let Some((key, value)) = parse_key_value(line) else {
            tracing::debug!(line, "ignoring settings line without '='");
            continue;
        };
        if value.is_empty() {
            continue;
        }
        match key.as_str() {
            "data_base" | "data_dir" | "data_url" => value.clone_into(&mut settings.data_base),
            "pages_dir" | "output_dir" => settings.pages_dir = PathBuf::from(value),
            "log_level" => settings.log_level = value.to_ascii_lowercase(),
            _ => tracing::debug!(key = %key, "ignoring unknown settings key"),
        }
    }
    settings
}

/// What: Load settings from a config directory.
///
/// Inputs:
/// - `dir`: Config directory override, or `None` for the default location
///
/// Output:
/// - Parsed settings, or defaults when the file is missing or unreadable.
pub fn load_settings(dir: Option<&Path>) -> Settings {
    let path = dir.map_or_else(config_dir, Path::to_path_buf).join(SETTINGS_FILE);
    match std::fs::read_to_string(&path) {
        Ok(content) => {
            tracing::debug!(path = %path.display(), "loaded settings");
            parse_settings(&content)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Settings::default(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot read settings; using defaults");
            Settings::default()
        }
    }
}
