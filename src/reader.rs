//! [`LogReader`]: restartable, lazy scans over a log destination.
//!
//! Every call opens the file afresh and reads from the start, so two scans
//! with no writes in between yield identical sequences. Lines are pulled from
//! a buffered reader one at a time; nothing is collected up front.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::record::{LogRecord, has_tag};
use crate::severity::Severity;

/// Reader bound to one destination path.
#[derive(Debug, Clone)]
pub struct LogReader {
    path: PathBuf,
}

impl LogReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lines whose tag equals `filter`, in file order.
    pub fn read(&self, filter: Severity) -> Result<LogLines, AppError> {
        Ok(LogLines {
            lines: self.open()?.lines(),
            filter,
            path: self.path.clone(),
        })
    }

    /// Every line that parses as a [`LogRecord`]; untagged lines are skipped.
    pub fn records(&self) -> Result<Records, AppError> {
        Ok(Records {
            lines: self.open()?.lines(),
            path: self.path.clone(),
        })
    }

    /// Number of lines tagged `filter`.
    pub fn count(&self, filter: Severity) -> Result<usize, AppError> {
        let mut n = 0;
        for line in self.read(filter)? {
            line?;
            n += 1;
        }
        Ok(n)
    }

    fn open(&self) -> Result<BufReader<File>, AppError> {
        File::open(&self.path)
            .map(BufReader::new)
            .map_err(|e| AppError::Read(format!("cannot open {}: {e}", self.path.display())))
    }
}

fn scan_error(path: &Path, e: io::Error) -> AppError {
    AppError::Read(format!("cannot scan {}: {e}", path.display()))
}

/// Lazy sequence returned by [`LogReader::read`].
#[derive(Debug)]
pub struct LogLines {
    lines: io::Lines<BufReader<File>>,
    filter: Severity,
    path: PathBuf,
}

impl Iterator for LogLines {
    type Item = Result<String, AppError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.lines.next()? {
                Ok(line) if has_tag(&line, self.filter) => return Some(Ok(line)),
                Ok(_) => continue,
                Err(e) => return Some(Err(scan_error(&self.path, e))),
            }
        }
    }
}

/// Lazy sequence returned by [`LogReader::records`].
#[derive(Debug)]
pub struct Records {
    lines: io::Lines<BufReader<File>>,
    path: PathBuf,
}

impl Iterator for Records {
    type Item = Result<LogRecord, AppError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.lines.next()? {
                Ok(line) => {
                    if let Some(record) = LogRecord::parse(&line) {
                        return Some(Ok(record));
                    }
                }
                Err(e) => return Some(Err(scan_error(&self.path, e))),
            }
        }
    }
}
