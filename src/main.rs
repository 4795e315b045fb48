//! sharedlog: fixed worker pool driver.
//!
//! Startup sequence:
//!   1. Load .env (if present)
//!   2. Load runtime config
//!   3. Resolve effective diagnostics level (CLI `-v` flags > env > config)
//!   4. Init diagnostics once
//!   5. Build a runtime with `workers.pool_size` worker threads
//!   6. Open the shared logger from its settings file
//!   7. Run the producer pool to completion
//!   8. Print the lines matching `report.severity`

use tracing::info;

use sharedlog::bootstrap::diagnostics;
use sharedlog::config;
use sharedlog::error::AppError;
use sharedlog::pool;
use sharedlog::{AsyncLogger, SharedLogger};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    // Load .env if present; ignore errors (file is optional).
    let _ = dotenvy::dotenv();

    let args = parse_cli_args();

    let config = config::load(args.config_path.as_deref())?;

    let effective_log_level = args.log_level.unwrap_or(config.log_level.as_str());
    diagnostics::init(
        effective_log_level,
        args.log_level.is_some(),
        config.diag_file.as_deref(),
    )?;

    info!(
        log_level = %effective_log_level,
        pool_size = config.workers.pool_size,
        messages_per_worker = config.workers.messages_per_worker,
        report_severity = %config.report_severity,
        "config loaded"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.workers.pool_size)
        .enable_all()
        .build()?;

    let logger = SharedLogger::from_settings_file(config.logger_config.as_deref())?;
    let handle = AsyncLogger::new(logger);

    let report = runtime.block_on(pool::run_producers(&handle, &config.workers))?;
    info!(
        written = report.written,
        filtered = report.filtered,
        failed = report.failed,
        "producers finished"
    );

    println!("=== {} logs ===", config.report_severity);
    for line in handle.inner().read(config.report_severity)? {
        println!("{}", line?);
    }

    Ok(())
}

struct CliArgs {
    log_level: Option<&'static str>,
    config_path: Option<String>,
}

fn parse_cli_args() -> CliArgs {
    let mut verbosity = 0u8;
    let mut config_path = None;

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        if arg == "--" {
            break;
        }

        match arg.as_str() {
            "-h" | "--help" => {
                println!("Usage: sharedlog [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -h, --help                 Print help");
                println!("  -f, --config <PATH>        Path to configuration file (default: config/default.toml)");
                println!("  -v, -vv, -vvv, -vvvv       Increase diagnostics verbosity");
                std::process::exit(0);
            }
            "-f" | "--config" => {
                if let Some(path) = iter.next() {
                    config_path = Some(path);
                } else {
                    eprintln!("error: -f/--config requires a path argument");
                    std::process::exit(1);
                }
            }
            "--verbose" => verbosity = verbosity.saturating_add(1),
            a if a.starts_with('-') && a.len() > 1 && a.chars().skip(1).all(|c| c == 'v') => {
                verbosity = verbosity.saturating_add((a.len() - 1) as u8);
            }
            _ => {}
        }
    }

    CliArgs {
        log_level: diagnostics::verbosity_level(verbosity),
        config_path,
    }
}
