//! Raw TOML shape: `serde` target before resolution.

use serde::Deserialize;

#[derive(Deserialize, Default)]
pub(super) struct RawConfig {
    #[serde(default)]
    pub runtime: RawRuntime,
    #[serde(default)]
    pub workers: RawWorkers,
    #[serde(default)]
    pub report: RawReport,
}

#[derive(Deserialize)]
pub(super) struct RawRuntime {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub logger_config: Option<String>,
    /// Append diagnostics here instead of stderr.
    #[serde(default)]
    pub diag_file: Option<String>,
}

impl Default for RawRuntime {
    fn default() -> Self {
        Self { log_level: default_log_level(), logger_config: None, diag_file: None }
    }
}

#[derive(Deserialize)]
pub(super) struct RawWorkers {
    #[serde(default = "default_pool_size")]
    pub pool_size: usize,
    #[serde(default = "default_messages_per_worker")]
    pub messages_per_worker: usize,
}

impl Default for RawWorkers {
    fn default() -> Self {
        Self {
            pool_size: default_pool_size(),
            messages_per_worker: default_messages_per_worker(),
        }
    }
}

#[derive(Deserialize)]
pub(super) struct RawReport {
    /// Upper-case severity name; validated during resolution.
    #[serde(default = "default_report_severity")]
    pub severity: String,
}

impl Default for RawReport {
    fn default() -> Self {
        Self { severity: default_report_severity() }
    }
}

pub(super) fn default_log_level() -> String { "info".to_string() }
pub(super) fn default_pool_size() -> usize { 3 }
pub(super) fn default_messages_per_worker() -> usize { 1 }
pub(super) fn default_report_severity() -> String { "ERROR".to_string() }
