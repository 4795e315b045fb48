//! Resolved runtime configuration types.

use std::path::PathBuf;

use crate::severity::Severity;

/// Worker pool shape for the demo driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkersConfig {
    /// Number of runtime worker threads and producer tasks. Always >= 1.
    pub pool_size: usize,
    /// Lines each producer writes before exiting.
    pub messages_per_worker: usize,
}

/// Fully-resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Diagnostics (tracing) level, e.g. `"info"`.
    pub log_level: String,
    /// Optional path to the logger's `key=value` settings file.
    /// `None` means defaults plus env overrides.
    pub logger_config: Option<PathBuf>,
    /// Diagnostics output file. `None` means stderr.
    pub diag_file: Option<PathBuf>,
    pub workers: WorkersConfig,
    /// Severity the driver prints back after the producers finish.
    pub report_severity: Severity,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            logger_config: None,
            diag_file: None,
            workers: WorkersConfig { pool_size: 3, messages_per_worker: 1 },
            report_severity: Severity::Error,
        }
    }
}
