//! [`AsyncLogger`]: async handle around [`SharedLogger`] for tokio tasks.
//!
//! The shared logger blocks on its mutex and on file I/O. This handle moves
//! every such call onto `tokio::task::spawn_blocking` so producer tasks never
//! stall a runtime worker thread.

use std::path::PathBuf;

use tracing::warn;

use crate::error::AppError;
use crate::logger::SharedLogger;
use crate::severity::Severity;

/// Async-safe handle to a [`SharedLogger`].
///
/// Cheaply cloneable; clones share the same logger state.
#[derive(Debug, Clone)]
pub struct AsyncLogger {
    inner: SharedLogger,
}

impl AsyncLogger {
    pub fn new(inner: SharedLogger) -> Self {
        Self { inner }
    }

    /// The wrapped synchronous logger.
    pub fn inner(&self) -> &SharedLogger {
        &self.inner
    }

    /// Best-effort write; failures (including a failed blocking task) are
    /// reported through `tracing` only.
    pub async fn log(&self, severity: Severity, message: impl Into<String>) {
        let logger = self.inner.clone();
        let message = message.into();
        if let Err(e) = tokio::task::spawn_blocking(move || logger.log(severity, &message)).await {
            warn!(%severity, error = %e, "log task failed");
        }
    }

    pub async fn try_log(
        &self,
        severity: Severity,
        message: impl Into<String>,
    ) -> Result<bool, AppError> {
        let logger = self.inner.clone();
        let message = message.into();
        tokio::task::spawn_blocking(move || logger.try_log(severity, &message))
            .await
            .map_err(|e| AppError::Write(format!("try_log join: {e}")))?
    }

    pub async fn configure(
        &self,
        min_severity: Severity,
        log_file: impl Into<PathBuf>,
    ) -> Result<(), AppError> {
        let logger = self.inner.clone();
        let log_file = log_file.into();
        tokio::task::spawn_blocking(move || logger.configure(min_severity, log_file))
            .await
            .map_err(|e| AppError::Config(format!("configure join: {e}")))?
    }

    /// Scan the destination and collect the lines tagged `filter`.
    pub async fn read(&self, filter: Severity) -> Result<Vec<String>, AppError> {
        let logger = self.inner.clone();
        tokio::task::spawn_blocking(move || -> Result<Vec<String>, AppError> {
            logger.read(filter)?.collect()
        })
        .await
        .map_err(|e| AppError::Read(format!("read join: {e}")))?
    }
}

impl From<SharedLogger> for AsyncLogger {
    fn from(inner: SharedLogger) -> Self {
        Self::new(inner)
    }
}
