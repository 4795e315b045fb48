//! [`LogRecord`] and the on-disk line format `"[<SEVERITY>] <message>"`.
//!
//! Messages are written verbatim. A message containing `\n` produces a
//! continuation line with no tag, which [`LogRecord::parse`] rejects.

use std::fmt;

use crate::severity::Severity;

/// One log entry. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    severity: Severity,
    message: String,
}

impl LogRecord {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self { severity, message: message.into() }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Newline-terminated line, ready for a single `write_all`.
    pub fn to_line(&self) -> String {
        let mut line = String::with_capacity(self.severity.tag().len() + self.message.len() + 2);
        line.push_str(self.severity.tag());
        line.push(' ');
        line.push_str(&self.message);
        line.push('\n');
        line
    }

    /// Parse a line (without its terminator) back into a record.
    /// Returns `None` when the line does not start with a known `[<SEVERITY>] ` tag.
    pub fn parse(line: &str) -> Option<Self> {
        Severity::ALL.into_iter().find_map(|sev| {
            line.strip_prefix(sev.tag())
                .and_then(|rest| rest.strip_prefix(' '))
                .map(|message| LogRecord::new(sev, message))
        })
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.severity.tag(), self.message)
    }
}

/// `true` if `line` carries the tag of `severity`.
pub fn has_tag(line: &str, severity: Severity) -> bool {
    line.starts_with(severity.tag())
}
