//! Runtime config loading with env-var overrides.
//!
//! Reads a TOML file and applies the `SHAREDLOG_DIAG_LEVEL` env override.
//! Every table and key is optional.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::bootstrap::diagnostics::parse_level;
use crate::error::AppError;

use super::raw::RawConfig;
use super::types::*;

/// Env var overriding `[runtime] log_level`.
pub const DIAG_LEVEL_ENV: &str = "SHAREDLOG_DIAG_LEVEL";

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Load config from the given path, or `config/default.toml`, then apply env-var overrides.
/// If no path is given and `config/default.toml` does not exist, returns the hardcoded default.
pub fn load(config_path: Option<&str>) -> Result<RuntimeConfig, AppError> {
    let log_level_override = env::var(DIAG_LEVEL_ENV).ok();

    if let Some(path) = config_path {
        return load_from(Path::new(path), log_level_override.as_deref());
    }

    let default_path = Path::new(DEFAULT_CONFIG_PATH);
    if default_path.exists() {
        load_from(default_path, log_level_override.as_deref())
    } else {
        resolve(RawConfig::default(), log_level_override.as_deref())
    }
}

/// Internal loader: accepts an explicit path and an optional level override.
/// Tests pass the override directly instead of mutating env vars.
pub fn load_from(path: &Path, log_level_override: Option<&str>) -> Result<RuntimeConfig, AppError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

    let parsed: RawConfig = toml::from_str(&raw)
        .map_err(|e| AppError::Config(format!("parse error in {}: {e}", path.display())))?;

    resolve(parsed, log_level_override)
}

fn resolve(parsed: RawConfig, log_level_override: Option<&str>) -> Result<RuntimeConfig, AppError> {
    let log_level = log_level_override
        .unwrap_or(&parsed.runtime.log_level)
        .to_string();
    parse_level(&log_level).map_err(|e| AppError::Config(e.to_string()))?;

    if parsed.workers.pool_size == 0 {
        return Err(AppError::Config("workers.pool_size must be at least 1".into()));
    }

    let report_severity = parsed.report.severity.parse()?;

    Ok(RuntimeConfig {
        log_level,
        logger_config: parsed.runtime.logger_config.as_deref().map(expand_home),
        diag_file: parsed.runtime.diag_file.as_deref().map(expand_home),
        workers: WorkersConfig {
            pool_size: parsed.workers.pool_size,
            messages_per_worker: parsed.workers.messages_per_worker,
        },
        report_severity,
    })
}

/// Expand a leading `~` to the user's home directory.
/// Absolute or relative paths without `~` are returned unchanged.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::severity::Severity;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const FULL_TOML: &str = r#"
[runtime]
log_level = "debug"
logger_config = "config/logger.properties"
diag_file = "~/.sharedlog/diag.log"

[workers]
pool_size = 8
messages_per_worker = 25

[report]
severity = "WARNING"
"#;

    fn write_toml(content: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn parse_full_config() {
        let f = write_toml(FULL_TOML);
        let cfg = load_from(f.path(), None).unwrap();
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.logger_config, Some(PathBuf::from("config/logger.properties")));
        let home = dirs::home_dir().expect("home dir must exist in test env");
        assert_eq!(cfg.diag_file, Some(home.join(".sharedlog/diag.log")));
        assert_eq!(cfg.workers.pool_size, 8);
        assert_eq!(cfg.workers.messages_per_worker, 25);
        assert_eq!(cfg.report_severity, Severity::Warning);
    }

    #[test]
    fn empty_file_is_default() {
        let f = write_toml("");
        let cfg = load_from(f.path(), None).unwrap();
        assert_eq!(cfg, RuntimeConfig::default());
    }

    #[test]
    fn partial_tables_fill_defaults() {
        let f = write_toml("[workers]\npool_size = 2\n");
        let cfg = load_from(f.path(), None).unwrap();
        assert_eq!(cfg.workers.pool_size, 2);
        assert_eq!(cfg.workers.messages_per_worker, 1);
        assert_eq!(cfg.report_severity, Severity::Error);
        assert_eq!(cfg.diag_file, None);
    }

    #[test]
    fn env_log_level_override() {
        let f = write_toml(FULL_TOML);
        let cfg = load_from(f.path(), Some("trace")).unwrap();
        assert_eq!(cfg.log_level, "trace");
    }

    #[test]
    fn zero_pool_rejected() {
        let f = write_toml("[workers]\npool_size = 0\n");
        assert!(matches!(load_from(f.path(), None), Err(AppError::Config(_))));
    }

    #[test]
    fn bad_report_severity_rejected() {
        let f = write_toml("[report]\nseverity = \"error\"\n");
        assert!(load_from(f.path(), None).is_err());
    }

    #[test]
    fn bad_diag_level_rejected() {
        let f = write_toml("[runtime]\nlog_level = \"verbose\"\n");
        assert!(load_from(f.path(), None).is_err());
    }

    #[test]
    fn malformed_toml_errors() {
        let f = write_toml("[workers\npool_size = ");
        let msg = load_from(f.path(), None).unwrap_err().to_string();
        assert!(msg.contains("parse error"));
    }

    #[test]
    fn missing_file_errors() {
        let result = load_from(Path::new("/nonexistent/config.toml"), None);
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("config error"));
    }

    #[test]
    fn tilde_expands_to_home() {
        let home = dirs::home_dir().expect("home dir must exist in test env");
        let expanded = expand_home("~/.sharedlog");
        assert!(expanded.starts_with(&home));
        assert!(expanded.ends_with(".sharedlog"));
    }

    #[test]
    fn absolute_path_unchanged() {
        assert_eq!(expand_home("/absolute/path"), PathBuf::from("/absolute/path"));
    }

    #[test]
    fn relative_path_unchanged() {
        assert_eq!(expand_home("relative/path"), PathBuf::from("relative/path"));
    }
}
