//! Settings file loading. Precedence: defaults, then the TOML file, then CLI flags.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::AppError;
use crate::http::builder::DEFAULT_SERVER;
use crate::state::gesture::DEFAULT_TIMEOUT;

const APP_DIR: &str = "apiscope";

/// Lines `Ctrl+D` moves the cursor by.
pub const DEFAULT_HALF_PAGE_LINES: usize = 21;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub gesture_timeout: Duration,
    pub half_page_lines: usize,
    pub fallback_server: String,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gesture_timeout: DEFAULT_TIMEOUT,
            half_page_lines: DEFAULT_HALF_PAGE_LINES,
            fallback_server: DEFAULT_SERVER.to_string(),
            log_file: default_log_file(),
        }
    }
}

/// On-disk shape of `config.toml`. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    /// Humantime duration, e.g. `"500ms"`.
    gesture_timeout: Option<String>,
    half_page_lines: Option<usize>,
    fallback_server: Option<String>,
    log_file: Option<PathBuf>,
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
}

fn default_log_file() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR)
        .join("apiscope.log")
}

/// Load settings from `explicit`, or from the default location when `None`.
///
/// A missing default file yields defaults; a missing explicit file is an error.
pub fn load(explicit: Option<&Path>) -> Result<Config, AppError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(Config::default()),
        },
    };
    let content = std::fs::read_to_string(&path).map_err(|e| AppError::Config {
        path: path.clone(),
        message: e.to_string(),
    })?;
    parse(&content, &path)
}

fn parse(content: &str, path: &Path) -> Result<Config, AppError> {
    let invalid = |message: String| AppError::Config { path: path.to_path_buf(), message };
    let file: ConfigFile = toml::from_str(content).map_err(|e| invalid(e.to_string()))?;

    let mut config = Config::default();
    if let Some(timeout) = file.gesture_timeout {
        config.gesture_timeout = humantime::parse_duration(&timeout)
            .map_err(|e| invalid(format!("gesture_timeout {timeout:?}: {e}")))?;
    }
    if let Some(lines) = file.half_page_lines {
        if lines == 0 {
            return Err(invalid("half_page_lines must be at least 1".to_string()));
        }
        config.half_page_lines = lines;
    }
    if let Some(server) = file.fallback_server {
        config.fallback_server = server.trim_end_matches('/').to_string();
    }
    if let Some(log_file) = file.log_file {
        config.log_file = log_file;
    }
    Ok(config)
}

impl Config {
    /// Apply command-line overrides on top of the loaded settings.
    pub fn with_cli(mut self, server: Option<String>, log_file: Option<PathBuf>) -> Self {
        if let Some(server) = server {
            self.fallback_server = server.trim_end_matches('/').to_string();
        }
        if let Some(log_file) = log_file {
            self.log_file = log_file;
        }
        self
    }
}
