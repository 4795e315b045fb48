//! Process diagnostics for sharedlog itself, via tracing-subscriber.
//!
//! These are the logger's own operational messages (destination opened,
//! reconfigured, record dropped). They never go to a shared logger destination.
//! Call [`init`] once at startup, after runtime settings are resolved.

use std::fs::OpenOptions;
use std::path::Path;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use crate::error::AppError;

/// Install the global subscriber.
///
/// See [`build_filter`] for how `level` and `RUST_LOG` combine and
/// [`make_writer`] for where output goes.
pub fn init(level: &str, prefer_level: bool, diag_file: Option<&Path>) -> Result<(), AppError> {
    let filter = build_filter(level, prefer_level)?;
    let writer = make_writer(diag_file)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .try_init()
        .map_err(|e| AppError::Diagnostics(format!("failed to set subscriber: {e}")))
}

/// Filter for diagnostics output.
///
/// With `prefer_level` (a `-v` flag was given) `level` wins and `RUST_LOG` is
/// only consulted when `level` does not parse. Otherwise `RUST_LOG` wins and
/// `level` (from config) is the fallback.
pub fn build_filter(level: &str, prefer_level: bool) -> Result<EnvFilter, AppError> {
    if !prefer_level {
        return EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level))
            .map_err(|e| AppError::Diagnostics(format!("invalid diagnostics level '{level}': {e}")));
    }
    EnvFilter::try_new(level).or_else(|level_err| {
        EnvFilter::try_from_default_env().map_err(|env_err| {
            AppError::Diagnostics(format!(
                "invalid diagnostics level '{level}': {level_err}; RUST_LOG: {env_err}"
            ))
        })
    })
}

/// Stderr, or `diag_file` opened for appending.
///
/// Don't point `diag_file` at a shared logger destination: diagnostics lines
/// carry no severity tag and would be skipped by reads anyway.
pub fn make_writer(diag_file: Option<&Path>) -> Result<BoxMakeWriter, AppError> {
    let Some(path) = diag_file else {
        return Ok(BoxMakeWriter::new(std::io::stderr));
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            AppError::Diagnostics(format!("cannot open diagnostics file {}: {e}", path.display()))
        })?;
    Ok(BoxMakeWriter::new(file))
}

/// Validate a diagnostics level from config before anything is initialised.
pub fn parse_level(level: &str) -> Result<LevelFilter, AppError> {
    if level.is_empty() {
        return Err(AppError::Diagnostics("diagnostics level must not be empty".into()));
    }
    level
        .parse::<LevelFilter>()
        .map_err(|_| AppError::Diagnostics(format!("unrecognised diagnostics level: '{level}'")))
}

/// Repeated `-v` flags: 1 → warn, 2 → info, 3 → debug, 4+ → trace.
pub fn verbosity_level(verbosity: u8) -> Option<&'static str> {
    match verbosity {
        0 => None,
        1 => Some("warn"),
        2 => Some("info"),
        3 => Some("debug"),
        _ => Some("trace"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn valid_levels_parse() {
        for l in &["error", "warn", "info", "debug", "trace"] {
            assert!(parse_level(l).is_ok(), "expected '{l}' to be valid");
        }
    }

    #[test]
    fn invalid_level_errors() {
        assert!(parse_level("verbose").is_err());
        assert!(parse_level("").is_err());
        assert!(parse_level("WARNING").is_err());
    }

    #[test]
    fn verbosity_tiers() {
        assert_eq!(verbosity_level(0), None);
        assert_eq!(verbosity_level(1), Some("warn"));
        assert_eq!(verbosity_level(3), Some("debug"));
        assert_eq!(verbosity_level(9), Some("trace"));
    }

    #[test]
    fn preferred_level_builds_filter() {
        let filter = build_filter("debug", true).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn writer_creates_diag_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("diag.log");
        make_writer(Some(&path)).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn writer_rejects_directory() {
        let tmp = TempDir::new().unwrap();
        let err = make_writer(Some(tmp.path())).unwrap_err();
        assert!(matches!(err, AppError::Diagnostics(msg) if msg.contains("diagnostics file")));
    }

    #[test]
    fn writer_defaults_to_stderr() {
        assert!(make_writer(None).is_ok());
    }

    #[test]
    fn init_succeeds_or_already_init() {
        // Another test in this process may have installed the subscriber first.
        match init("info", false, None) {
            Ok(()) => {}
            Err(AppError::Diagnostics(msg)) if msg.contains("set subscriber") => {}
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
}
