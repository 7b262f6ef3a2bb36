use crate::error::{Result as ServerErrorResult, ServerError};

use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, info};

/// Install the global logger.
///
/// Lines look like `[<rfc3339> - LEVEL] message [file:line]`. With a log file
/// the output is plain; on stdout levels are colored when `colored` is set.
pub fn initialize(
    log_level: sb_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter = log_level.0;

    let dispatch = match log_file {
        Some(ref log_path) => {
            let file = fern::log_file(log_path).map_err(|e| ServerError::Logger {
                message: format!("Failed to open log file {}: {}", log_path.display(), e),
            })?;
            formatted(None).chain(file)
        }
        None => {
            let colors = colored.then(level_colors);
            formatted(colors).chain(std::io::stdout())
        }
    };

    Dispatch::new()
        .level(level_filter)
        // sqlx logs every statement at info
        .level_for("sqlx", LevelFilter::Warn)
        .chain(dispatch)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match log_file {
        Some(ref path) => info!("Logger ready at {:?}, writing to {}", level_filter, path.display()),
        None => info!("Logger ready at {:?}, writing to stdout", level_filter),
    }

    // Route `tracing` events from dependencies into the same sink
    tracing_log::LogTracer::init().ok();

    Ok(())
}

pub(crate) fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

/// A dispatch carrying the line format; the caller picks the sink
pub(crate) fn formatted(colors: Option<ColoredLevelConfig>) -> Dispatch {
    Dispatch::new().format(move |out, message, record| {
        let timestamp = humantime::format_rfc3339(SystemTime::now());
        let file = record.file().unwrap_or("unknown");
        let line = record.line().unwrap_or(0);

        match &colors {
            Some(colors) => out.finish(format_args!(
                "[{} - {}] {} [{}:{}]",
                timestamp,
                colors.color(record.level()),
                message,
                file,
                line
            )),
            None => out.finish(format_args!(
                "[{} - {}] {} [{}:{}]",
                timestamp,
                record.level(),
                message,
                file,
                line
            )),
        }
    })
}
