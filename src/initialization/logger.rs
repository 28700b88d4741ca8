//! Logger initialization.

use std::io::{self, Write};

use colored::*;
use env_logger::fmt::Formatter;
use log::{Level, LevelFilter, Record};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Installs the global `env_logger`.
///
/// `RUST_LOG` is read first and `level` is applied on top of it, so
/// `RUST_LOG=netbar::dns=trace` still narrows a single module. HTTP stack
/// crates stay at Info. Use [`LogFormat::Json`] when `netbar serve` runs under
/// a supervisor that collects structured logs.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    colored::control::set_override(true);

    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    for noisy in ["reqwest", "hyper", "hyper_util", "axum"] {
        builder.filter_module(noisy, LevelFilter::Info);
    }
    builder.filter_module("netbar", level);

    match format {
        LogFormat::Json => builder.format(write_json),
        LogFormat::Plain => builder.format(write_plain),
    };

    builder.try_init()?;
    Ok(())
}

/// One JSON object per line: `{"ts","level","target","msg"}`.
fn write_json(buf: &mut Formatter, record: &Record) -> io::Result<()> {
    let msg = serde_json::to_string(&record.args().to_string()).unwrap_or_else(|_| "\"\"".into());
    writeln!(
        buf,
        "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
        chrono::Utc::now().timestamp_millis(),
        record.level(),
        record.target(),
        msg
    )
}

fn write_plain(buf: &mut Formatter, record: &Record) -> io::Result<()> {
    let level = record.level();
    let (emoji, label) = match level {
        Level::Error => ("❌", level.to_string().red()),
        Level::Warn => ("⚠️", level.to_string().yellow()),
        Level::Info => ("✔️", level.to_string().green()),
        Level::Debug => ("🔍", level.to_string().blue()),
        Level::Trace => ("🔬", level.to_string().purple()),
    };
    writeln!(
        buf,
        "{emoji} {} [{label}] {}",
        record.target().cyan(),
        record.args()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // Only one logger can be installed per process; tests tolerate "already set".

    #[test]
    fn test_init_logger_json_format() {
        let result = init_logger_with(LevelFilter::Info, LogFormat::Json);
        assert!(result.is_ok() || matches!(result, Err(InitializationError::LoggerError(_))));
    }

    #[test]
    fn test_init_logger_twice_reports_error() {
        let _ = init_logger_with(LevelFilter::Warn, LogFormat::Plain);
        let second = init_logger_with(LevelFilter::Warn, LogFormat::Plain);
        assert!(matches!(
            second,
            Err(InitializationError::LoggerError(_))
        ));
    }
}
