//! Configuration loading with env-var overrides.
//!
//! Two formats live here:
//!
//! - **settings**: the logger's own `key=value` file (`logLevel`, `logFile`)
//!   with `SHAREDLOG_LOG_LEVEL` / `SHAREDLOG_LOG_FILE` overrides.
//! - **runtime**: the binaries' TOML file (`config/default.toml`) holding the
//!   diagnostics level and output file and the worker pool shape. `SHAREDLOG_DIAG_LEVEL`
//!   overrides the diagnostics level.
//!
//! # Module layout
//!
//! - **types**: resolved runtime structs (`RuntimeConfig`, `WorkersConfig`).
//! - **raw**: raw TOML deserialization types; kept private.
//! - **load**: `load`, `load_from`, `expand_home`.
//! - **settings**: `LoggerSettings` and the properties parser.

mod load;
mod raw;
mod types;
pub mod settings;

pub use load::{expand_home, load, load_from};
pub use settings::LoggerSettings;
pub use types::*;
