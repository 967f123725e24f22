use crate::error::{Result as ServerErrorResult, ServerError};

use px_config::LogLevel;

use std::fmt::{self, Display};
use std::path::PathBuf;
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{LevelFilter, Record, info};

/// Where log lines go
enum Sink {
    File(PathBuf),
    ColoredStdout,
    PlainStdout,
}

/// Install the global fern logger.
///
/// `log_file` wins over stdout; `colored` only applies to stdout.
pub fn initialize(
    log_level: LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let sink = match log_file {
        Some(path) => Sink::File(path),
        None if colored => Sink::ColoredStdout,
        None => Sink::PlainStdout,
    };

    let base = Dispatch::new()
        .level(log_level.0)
        // sqlx logs every statement at info
        .level_for("sqlx", LevelFilter::Warn);

    let dispatch = match &sink {
        Sink::File(path) => {
            let file = fern::log_file(path).map_err(|e| ServerError::Logger {
                message: format!("Failed to open log file {}: {}", path.display(), e),
            })?;
            base.format(plain_line).chain(file)
        }
        Sink::ColoredStdout => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);

            base.format(move |out, message, record| {
                write_line(out, message, record, colors.color(record.level()))
            })
            .chain(std::io::stdout())
        }
        Sink::PlainStdout => base.format(plain_line).chain(std::io::stdout()),
    };

    dispatch.apply().map_err(|e| ServerError::Logger {
        message: format!("Failed to initialize logger: {e}"),
    })?;

    match sink {
        Sink::File(path) => info!(
            "Logger initialized: level={}, file={}",
            log_level.0,
            path.display()
        ),
        _ => info!("Logger initialized: level={}, stdout", log_level.0),
    }

    Ok(())
}

fn plain_line(out: FormatCallback, message: &fmt::Arguments, record: &Record) {
    write_line(out, message, record, record.level())
}

fn write_line(out: FormatCallback, message: &fmt::Arguments, record: &Record, level: impl Display) {
    out.finish(format_args!(
        "[{date} - {level}] {message} [{target}:{line}]",
        date = humantime::format_rfc3339(SystemTime::now()),
        target = record.target(),
        line = record.line().unwrap_or(0),
    ))
}
