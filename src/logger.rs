//! [`SharedLogger`]: one append sink shared by every producer in the process.
//!
//! Construct it once at startup and hand clones to producer tasks; all clones
//! share one `LoggerState` behind a single mutex. The state owns the
//! destination file handle for its whole life, so a write is just
//! `write_all` + `flush` under the lock. The line is only formatted once the
//! threshold check under the lock has passed, so filtered calls never allocate.
//!
//! `configure` swaps the whole state under the same mutex: a write in flight
//! finishes against the old destination, every later write sees the new one.
//!
//! Reads do not take the lock. They open the destination separately and may
//! observe lines appended while the scan is running.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, info, warn};

use crate::config::settings::{self, LoggerSettings};
use crate::error::AppError;
use crate::reader::{LogLines, LogReader};
use crate::record::LogRecord;
use crate::severity::Severity;

#[derive(Debug)]
struct LoggerState {
    settings: LoggerSettings,
    file: File,
}

impl LoggerState {
    fn open(settings: LoggerSettings) -> Result<Self, AppError> {
        let file = open_append(&settings.log_file)?;
        Ok(Self { settings, file })
    }

    fn append(&mut self, line: &str) -> Result<(), AppError> {
        self.file
            .write_all(line.as_bytes())
            .and_then(|()| self.file.flush())
            .map_err(|e| {
                AppError::Write(format!(
                    "cannot append to {}: {e}",
                    self.settings.log_file.display()
                ))
            })
    }
}

/// Open `path` for appending, creating it and any missing parent directories.
fn open_append(path: &Path) -> Result<File, AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            AppError::Config(format!("cannot create {}: {e}", parent.display()))
        })?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| AppError::Config(format!("cannot open {} for appending: {e}", path.display())))
}

/// Shared, severity-filtered append sink.
///
/// Cheaply cloneable (`Arc`-backed). Safe to call from any number of threads.
#[derive(Debug, Clone)]
pub struct SharedLogger {
    state: Arc<Mutex<LoggerState>>,
}

impl SharedLogger {
    /// Open the destination named by `settings` and build the logger.
    pub fn open(settings: LoggerSettings) -> Result<Self, AppError> {
        let state = LoggerState::open(settings)?;
        info!(
            min_severity = %state.settings.min_severity,
            log_file = %state.settings.log_file.display(),
            "shared logger ready"
        );
        Ok(Self { state: Arc::new(Mutex::new(state)) })
    }

    /// `INFO` threshold, appending to `app.log` in the working directory.
    pub fn with_defaults() -> Result<Self, AppError> {
        Self::open(LoggerSettings::default())
    }

    /// Build from a `key=value` settings file (or defaults when `None`),
    /// honouring the `SHAREDLOG_LOG_LEVEL` / `SHAREDLOG_LOG_FILE` overrides.
    pub fn from_settings_file(path: Option<&Path>) -> Result<Self, AppError> {
        Self::open(settings::load(path)?)
    }

    /// Lock the state; poisoning is reported through `kind`.
    fn lock(&self, kind: fn(String) -> AppError) -> Result<MutexGuard<'_, LoggerState>, AppError> {
        self.state
            .lock()
            .map_err(|_| kind("logger lock poisoned".into()))
    }

    /// Replace threshold and destination. On error the previous state stays in effect.
    pub fn configure(
        &self,
        min_severity: Severity,
        log_file: impl Into<PathBuf>,
    ) -> Result<(), AppError> {
        self.apply(LoggerSettings::new(min_severity, log_file))
    }

    /// Load a `key=value` settings file and apply it like [`configure`](Self::configure).
    pub fn configure_from_file(&self, path: &Path) -> Result<(), AppError> {
        self.apply(settings::load_from(path, None, None)?)
    }

    fn apply(&self, settings: LoggerSettings) -> Result<(), AppError> {
        // Open outside the lock; only the swap is serialised with writers.
        let next = LoggerState::open(settings)?;
        let mut state = self.lock(AppError::Config)?;
        debug!(
            min_severity = %next.settings.min_severity,
            log_file = %next.settings.log_file.display(),
            previous = %state.settings.log_file.display(),
            "logger reconfigured"
        );
        *state = next;
        Ok(())
    }

    /// Change only the threshold.
    pub fn set_min_severity(&self, min_severity: Severity) -> Result<(), AppError> {
        let mut state = self.lock(AppError::Config)?;
        state.settings.min_severity = min_severity;
        Ok(())
    }

    /// Snapshot of the current settings.
    pub fn settings(&self) -> Result<LoggerSettings, AppError> {
        let state = self.lock(AppError::Config)?;
        Ok(state.settings.clone())
    }

    /// Append `message` if `severity` passes the threshold.
    ///
    /// Returns `Ok(true)` when a line was written and `Ok(false)` when it was
    /// filtered out. The line is flushed before this returns.
    pub fn try_log(&self, severity: Severity, message: &str) -> Result<bool, AppError> {
        let mut state = self.lock(AppError::Write)?;
        if severity < state.settings.min_severity {
            return Ok(false);
        }
        let line = LogRecord::new(severity, message).to_line();
        state.append(&line)?;
        Ok(true)
    }

    /// Best-effort [`try_log`](Self::try_log): failures are reported through
    /// `tracing` and never reach the caller.
    pub fn log(&self, severity: Severity, message: &str) {
        if let Err(e) = self.try_log(severity, message) {
            warn!(%severity, error = %e, "log record dropped");
        }
    }

    pub fn info(&self, message: &str) {
        self.log(Severity::Info, message);
    }

    pub fn warning(&self, message: &str) {
        self.log(Severity::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.log(Severity::Error, message);
    }

    /// Reader over the current destination.
    pub fn reader(&self) -> Result<LogReader, AppError> {
        let state = self.lock(AppError::Read)?;
        Ok(LogReader::new(state.settings.log_file.clone()))
    }

    /// Lazily scan the current destination from the start for lines tagged `filter`.
    pub fn read(&self, filter: Severity) -> Result<LogLines, AppError> {
        self.reader()?.read(filter)
    }
}
