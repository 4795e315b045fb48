//! Shared, severity-filtered append-only log sink.
//!
//! Build one [`SharedLogger`] at startup, hand clones (or an [`AsyncLogger`])
//! to every producer, and read lines back by severity with
//! [`SharedLogger::read`] or a standalone [`LogReader`].
//!
//! ```no_run
//! use sharedlog::{LoggerSettings, Severity, SharedLogger};
//!
//! # fn main() -> Result<(), sharedlog::AppError> {
//! let logger = SharedLogger::open(LoggerSettings::new(Severity::Warning, "t.log"))?;
//! logger.log(Severity::Info, "a"); // below threshold, nothing written
//! logger.log(Severity::Error, "b");
//! for line in logger.read(Severity::Error)? {
//!     println!("{}", line?); // "[ERROR] b"
//! }
//! # Ok(())
//! # }
//! ```

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod handle;
pub mod logger;
pub mod pool;
pub mod reader;
pub mod record;
pub mod severity;

pub use config::LoggerSettings;
pub use error::AppError;
pub use handle::AsyncLogger;
pub use logger::SharedLogger;
pub use reader::LogReader;
pub use record::LogRecord;
pub use severity::Severity;
