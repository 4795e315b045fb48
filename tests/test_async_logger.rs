//! Integration tests for AsyncLogger and the producer pool.
//!
//! Run with:
//!   cargo test --test test_async_logger

use std::fs;

use tempfile::TempDir;

use sharedlog::config::WorkersConfig;
use sharedlog::pool::run_producers;
use sharedlog::{AsyncLogger, LoggerSettings, Severity, SharedLogger};

fn async_logger(min: Severity) -> (TempDir, AsyncLogger) {
    let tmp = TempDir::new().expect("tempdir");
    let logger = SharedLogger::open(LoggerSettings::new(min, tmp.path().join("async.log")))
        .expect("open logger");
    (tmp, logger.into())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn many_tasks_lose_no_lines() {
    let (_tmp, logger) = async_logger(Severity::Info);

    let mut set = tokio::task::JoinSet::new();
    for t in 0..16 {
        let logger = logger.clone();
        set.spawn(async move {
            for i in 0..50 {
                logger.log(Severity::Warning, format!("task {t} line {i}")).await;
            }
        });
    }
    while let Some(res) = set.join_next().await {
        res.expect("task panicked");
    }

    assert_eq!(logger.read(Severity::Warning).await.unwrap().len(), 800);
}

#[tokio::test]
async fn try_log_reports_filtering() {
    let (_tmp, logger) = async_logger(Severity::Error);
    assert!(!logger.try_log(Severity::Warning, "quiet").await.unwrap());
    assert!(logger.try_log(Severity::Error, "loud").await.unwrap());
    assert_eq!(logger.read(Severity::Error).await.unwrap(), vec!["[ERROR] loud"]);
}

#[tokio::test]
async fn configure_through_handle() {
    let (tmp, logger) = async_logger(Severity::Info);
    let target = tmp.path().join("moved.log");
    logger.configure(Severity::Warning, &target).await.unwrap();
    logger.log(Severity::Info, "skip").await;
    logger.log(Severity::Warning, "keep").await;
    assert_eq!(fs::read_to_string(&target).unwrap(), "[WARNING] keep\n");
    assert_eq!(
        logger.inner().settings().unwrap(),
        LoggerSettings::new(Severity::Warning, &target)
    );
}

#[tokio::test]
async fn configure_error_propagates() {
    let (tmp, logger) = async_logger(Severity::Info);
    assert!(logger.configure(Severity::Info, tmp.path()).await.is_err());
}

#[tokio::test]
async fn read_missing_destination_errors() {
    let (tmp, logger) = async_logger(Severity::Info);
    fs::remove_file(tmp.path().join("async.log")).unwrap();
    assert!(matches!(
        logger.read(Severity::Info).await,
        Err(sharedlog::AppError::Read(_))
    ));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 3)]
async fn fixed_pool_of_three_reports_one_error() {
    let (_tmp, logger) = async_logger(Severity::Info);
    let workers = WorkersConfig { pool_size: 3, messages_per_worker: 1 };
    let report = run_producers(&logger, &workers).await.unwrap();
    assert_eq!(report.written, 3);
    assert_eq!(
        logger.read(Severity::Error).await.unwrap(),
        vec!["[ERROR] message 0 from worker 3"]
    );
}
