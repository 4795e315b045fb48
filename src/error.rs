//! Application-wide error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    #[error("write error: {0}")]
    Write(String),

    #[error("read error: {0}")]
    Read(String),

    #[error("diagnostics error: {0}")]
    Diagnostics(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn config_error_display() {
        let e = AppError::Config("bad severity".into());
        assert!(e.to_string().starts_with("config error"));
        assert!(e.to_string().contains("bad severity"));
    }

    #[test]
    fn write_error_display() {
        let e = AppError::Write("disk full".into());
        assert!(e.to_string().contains("disk full"));
    }

    #[test]
    fn read_error_display() {
        let e = AppError::Read("app.log missing".into());
        assert!(e.to_string().contains("app.log missing"));
    }

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let e: AppError = io_err.into();
        assert!(e.to_string().contains("io error"));
        // satisfies std::error::Error trait
        let _: &dyn Error = &e;
    }
}
