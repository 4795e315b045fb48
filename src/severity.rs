//! [`Severity`]: the ordered log level used for filtering.

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Ordered log level: `Info < Warning < Error`.
///
/// The derived `Ord` follows declaration order, which is the filtering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    #[default]
    Info,
    Warning,
    Error,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Info, Severity::Warning, Severity::Error];

    /// Upper-case name as written in log lines and config files.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }

    /// Line tag, e.g. `"[ERROR]"`.
    pub fn tag(self) -> &'static str {
        match self {
            Severity::Info => "[INFO]",
            Severity::Warning => "[WARNING]",
            Severity::Error => "[ERROR]",
        }
    }

    /// Next level in the INFO → WARNING → ERROR → INFO rotation.
    pub fn cycle(self) -> Severity {
        match self {
            Severity::Info => Severity::Warning,
            Severity::Warning => Severity::Error,
            Severity::Error => Severity::Info,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = AppError;

    /// Names are case-sensitive: `"INFO"`, `"WARNING"`, `"ERROR"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|sev| sev.as_str() == s)
            .ok_or_else(|| {
                AppError::Config(format!(
                    "unrecognised severity '{s}' (expected INFO, WARNING or ERROR)"
                ))
            })
    }
}
