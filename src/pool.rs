//! Fixed-size producer pool: drives many concurrent writers into one logger.
//!
//! Each producer is an independent tokio task holding its own [`AsyncLogger`]
//! clone. Producer `n` starts at `Severity::ALL[n % 3]` and rotates
//! INFO → WARNING → ERROR for every further message, so a pool of three
//! writing one message each emits exactly one line per severity.

use tokio::task::JoinSet;
use tracing::{debug, error, warn};

use crate::config::WorkersConfig;
use crate::error::AppError;
use crate::handle::AsyncLogger;
use crate::severity::Severity;

/// Outcome counts across all producers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolReport {
    /// Lines appended to the destination.
    pub written: usize,
    /// Messages below the logger's threshold.
    pub filtered: usize,
    /// Messages lost to write failures.
    pub failed: usize,
}

impl PoolReport {
    fn merge(&mut self, other: PoolReport) {
        self.written += other.written;
        self.filtered += other.filtered;
        self.failed += other.failed;
    }
}

/// Spawn `workers.pool_size` producers and wait for all of them.
///
/// Write failures are counted, not propagated. A panicked producer is an
/// error; the remaining producers are still drained first.
pub async fn run_producers(
    logger: &AsyncLogger,
    workers: &WorkersConfig,
) -> Result<PoolReport, AppError> {
    let mut set: JoinSet<PoolReport> = JoinSet::new();

    for worker in 0..workers.pool_size {
        debug!(worker = worker + 1, "spawning producer");
        set.spawn(produce(logger.clone(), worker, workers.messages_per_worker));
    }

    let mut report = PoolReport::default();
    let mut first_err: Option<AppError> = None;

    while let Some(res) = set.join_next().await {
        match res {
            Ok(tally) => report.merge(tally),
            Err(e) => {
                error!("producer panicked: {e}");
                first_err.get_or_insert_with(|| AppError::Write(format!("producer panicked: {e}")));
            }
        }
    }

    match first_err {
        Some(e) => Err(e),
        None => Ok(report),
    }
}

async fn produce(logger: AsyncLogger, worker: usize, count: usize) -> PoolReport {
    let mut tally = PoolReport::default();
    let mut severity = Severity::ALL[worker % Severity::ALL.len()];

    for seq in 0..count {
        let message = format!("message {seq} from worker {}", worker + 1);
        match logger.try_log(severity, message).await {
            Ok(true) => tally.written += 1,
            Ok(false) => tally.filtered += 1,
            Err(e) => {
                warn!(worker = worker + 1, error = %e, "producer write failed");
                tally.failed += 1;
            }
        }
        severity = severity.cycle();
    }

    tally
}
