//! `sharedlog-ctl`: append to and inspect a shared log destination.
//!
//! # Usage
//!
//! ```text
//! sharedlog-ctl [--config <path>] [--file <path>] <command>
//!
//! Commands:
//!   append <SEVERITY> <message...>   append one line (subject to logLevel)
//!   read <SEVERITY>                  print lines tagged SEVERITY
//!   records                          print every tagged line
//!   settings                         print effective settings as key=value
//!
//! Flags:
//!   --config, -c <path>   logger settings file (logLevel / logFile)
//!   --file <path>         override the destination
//!   --help, -h            print this help
//! ```
//!
//! Settings resolution order:
//!   1. `--file` flag (destination only)
//!   2. `$SHAREDLOG_LOG_LEVEL` / `$SHAREDLOG_LOG_FILE`
//!   3. `--config` file
//!   4. defaults (`INFO`, `app.log`)

use std::path::{Path, PathBuf};
use std::process;

use sharedlog::bootstrap::diagnostics;
use sharedlog::config::settings;
use sharedlog::error::AppError;
use sharedlog::{LogReader, LoggerSettings, Severity, SharedLogger};

// ── CLI arg parsing ────────────────────────────────────────────────────────

#[derive(Debug)]
struct Args {
    config: Option<String>,
    file: Option<String>,
    command: Option<String>,
    rest: Vec<String>,
}

fn parse_args() -> Args {
    match parse_args_from(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

fn parse_args_from(args: impl IntoIterator<Item = String>) -> Result<Args, AppError> {
    let mut config = None;
    let mut file = None;
    let mut command = None;
    let mut rest = Vec::new();
    let mut iter = args.into_iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" | "-c" if command.is_none() => {
                config = Some(flag_value("--config", iter.next())?);
            }
            "--file" if command.is_none() => {
                file = Some(flag_value("--file", iter.next())?);
            }
            "--help" | "-h" if command.is_none() => {
                print_help();
                process::exit(0);
            }
            "--" => {
                rest.extend(iter);
                break;
            }
            _ if command.is_none() => command = Some(arg),
            _ => rest.push(arg),
        }
    }

    Ok(Args { config, file, command, rest })
}

fn flag_value(flag: &str, value: Option<String>) -> Result<String, AppError> {
    value.ok_or_else(|| AppError::Config(format!("{flag} requires a path argument")))
}

fn print_help() {
    eprintln!("usage: sharedlog-ctl [--config <path>] [--file <path>] <command>");
    eprintln!();
    eprintln!("commands:");
    eprintln!("  append <SEVERITY> <message...>   append one line (subject to logLevel)");
    eprintln!("  read <SEVERITY>                  print lines tagged SEVERITY");
    eprintln!("  records                          print every tagged line");
    eprintln!("  settings                         print effective settings");
    eprintln!();
    eprintln!("flags:");
    eprintln!("  --config, -c <path>   logger settings file (logLevel / logFile)");
    eprintln!("  --file <path>         override the destination");
    eprintln!("  --help,   -h          print this help");
    eprintln!();
    eprintln!("severities: INFO, WARNING, ERROR");
}

fn resolve_settings(config: Option<&str>, file: Option<String>) -> Result<LoggerSettings, AppError> {
    let mut resolved = settings::load(config.map(Path::new))?;
    if let Some(file) = file {
        resolved.log_file = PathBuf::from(file);
    }
    Ok(resolved)
}

fn severity_arg(arg: Option<&String>) -> Result<Severity, AppError> {
    arg.ok_or_else(|| AppError::Config("missing SEVERITY argument".into()))?
        .parse()
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let _ = dotenvy::dotenv();
    let args = parse_args();

    diagnostics::init("warn", false, None)?;

    let Some(command) = args.command else {
        print_help();
        process::exit(2);
    };

    let settings = resolve_settings(args.config.as_deref(), args.file)?;

    match command.as_str() {
        "append" => {
            let severity = severity_arg(args.rest.first())?;
            let message = args.rest[1..].join(" ");
            let logger = SharedLogger::open(settings)?;
            if !logger.try_log(severity, &message)? {
                eprintln!("filtered: {severity} is below the configured logLevel");
            }
        }
        "read" => {
            let severity = severity_arg(args.rest.first())?;
            for line in LogReader::new(settings.log_file).read(severity)? {
                println!("{}", line?);
            }
        }
        "records" => {
            for record in LogReader::new(settings.log_file).records()? {
                println!("{}", record?);
            }
        }
        "settings" => {
            print!("{}", settings.to_properties());
        }
        other => {
            eprintln!("unknown command: {other}");
            print_help();
            process::exit(2);
        }
    }

    Ok(())
}
