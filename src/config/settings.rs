//! Logger settings in the `key=value` properties format.
//!
//! ```text
//! # comments start with '#' or '!'
//! logLevel=WARNING
//! logFile=/var/log/app.log
//! ```
//!
//! Recognised keys are `logLevel` (INFO | WARNING | ERROR) and `logFile`.
//! Unknown keys are ignored; missing keys fall back to `INFO` / `app.log`.
//! Either `=` or `:` separates key from value, whichever comes first.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::severity::Severity;

use super::load::expand_home;

pub const LEVEL_KEY: &str = "logLevel";
pub const FILE_KEY: &str = "logFile";
pub const DEFAULT_LOG_FILE: &str = "app.log";

/// Env var overriding `logLevel`.
pub const LEVEL_ENV: &str = "SHAREDLOG_LOG_LEVEL";
/// Env var overriding `logFile`.
pub const FILE_ENV: &str = "SHAREDLOG_LOG_FILE";

/// Threshold and destination of a [`SharedLogger`](crate::logger::SharedLogger).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerSettings {
    pub min_severity: Severity,
    pub log_file: PathBuf,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            min_severity: Severity::Info,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl LoggerSettings {
    pub fn new(min_severity: Severity, log_file: impl Into<PathBuf>) -> Self {
        Self { min_severity, log_file: log_file.into() }
    }

    /// Resolve settings from properties text.
    pub fn parse(text: &str) -> Result<Self, AppError> {
        Self::from_properties(&parse_properties(text), None, None)
    }

    fn from_properties(
        props: &HashMap<String, String>,
        level_override: Option<&str>,
        file_override: Option<&str>,
    ) -> Result<Self, AppError> {
        let min_severity = match level_override.or(props.get(LEVEL_KEY).map(String::as_str)) {
            Some(level) => level.parse()?,
            None => Severity::Info,
        };

        let log_file = match file_override.or(props.get(FILE_KEY).map(String::as_str)) {
            Some("") => {
                return Err(AppError::Config(format!("{FILE_KEY} must not be empty")));
            }
            Some(path) => expand_home(path),
            None => PathBuf::from(DEFAULT_LOG_FILE),
        };

        Ok(Self { min_severity, log_file })
    }

    /// Render in the same properties format that [`LoggerSettings::parse`] reads.
    pub fn to_properties(&self) -> String {
        format!(
            "{LEVEL_KEY}={}\n{FILE_KEY}={}\n",
            self.min_severity,
            self.log_file.display()
        )
    }

    /// Write the settings to `path`, replacing any existing file.
    pub fn save_to(&self, path: &Path) -> Result<(), AppError> {
        fs::write(path, self.to_properties())
            .map_err(|e| AppError::Config(format!("cannot write {}: {e}", path.display())))
    }
}

/// Split properties text into key/value pairs. Later duplicates win.
pub fn parse_properties(text: &str) -> HashMap<String, String> {
    let mut props = HashMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        let Some(idx) = line.find(['=', ':']) else {
            continue;
        };
        let key = line[..idx].trim();
        if key.is_empty() {
            continue;
        }
        props.insert(key.to_string(), line[idx + 1..].trim().to_string());
    }
    props
}

/// Load settings from `path` (or defaults when `None`), then apply the
/// `SHAREDLOG_LOG_LEVEL` / `SHAREDLOG_LOG_FILE` env overrides.
pub fn load(path: Option<&Path>) -> Result<LoggerSettings, AppError> {
    let level_override = env::var(LEVEL_ENV).ok();
    let file_override = env::var(FILE_ENV).ok();
    match path {
        Some(path) => load_from(path, level_override.as_deref(), file_override.as_deref()),
        None => LoggerSettings::from_properties(
            &HashMap::new(),
            level_override.as_deref(),
            file_override.as_deref(),
        ),
    }
}

/// Internal loader: accepts an explicit path and optional overrides.
/// Tests pass overrides directly instead of mutating env vars.
pub fn load_from(
    path: &Path,
    level_override: Option<&str>,
    file_override: Option<&str>,
) -> Result<LoggerSettings, AppError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
    LoggerSettings::from_properties(&parse_properties(&raw), level_override, file_override)
        .map_err(|e| match e {
            AppError::Config(msg) => AppError::Config(format!("{}: {msg}", path.display())),
            other => other,
        })
}
