//! Logging backend for the holiday service binary.
//!
//! Colored stdout, plus a plain-text file once a log directory is known.
//!
//! The logger is installed before the configuration is read, so anything
//! logged while loading config is not lost. File lines produced before
//! [`attach_log_file`] are buffered and flushed into the file when it opens.

use crate::error::HolidayServiceError;

use common::ErrorLocation;

use std::fs::{File, create_dir_all};
use std::io::{Write, stdout};
use std::mem::take;
use std::panic::Location;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, Once};
use std::time::SystemTime;

use fern::colors::Color::{Blue, Green, Magenta, Red, Yellow};
use fern::colors::ColoredLevelConfig;
use fern::{Dispatch, Output};
use humantime::format_rfc3339;
use log::{LevelFilter, Record, info, warn};

/// Thread-safe initialization guard.
static INIT_LOGGER_ONCE: Once = Once::new();

/// Tracks if logger initialization was already attempted.
static LOGGER_ALREADY_CALLED: AtomicBool = AtomicBool::new(false);

/// Destination of the plain-text file output.
static FILE_SINK: Mutex<FileSink> = Mutex::new(FileSink::Pending(Vec::new()));

/// Log file name inside the configured directory.
pub const LOG_FILE_NAME: &str = "holiday-service.log";

/// Lines kept while no log file is attached; later lines are dropped.
const MAX_PENDING_LINES: usize = 1024;

const LOGGER_INITIALIZED_MESSAGE_PREFIX: &str = "Logger initialized with level: ";

const LOGGER_ALREADY_INITIALIZED_MESSAGE: &str = "Logger already initialized";

enum FileSink {
    Pending(Vec<String>),
    File(File),
    Disabled,
}

/// Install the global logger and set the active level.
///
/// Safe to call more than once: later calls log a warning, apply `level`
/// and return Ok.
///
/// # Errors
///
/// Returns [`HolidayServiceError::Logger`] if another global logger is already installed.
pub fn initialize(level: LevelFilter) -> Result<(), HolidayServiceError> {
    if LOGGER_ALREADY_CALLED.swap(true, Ordering::SeqCst) {
        warn!("{LOGGER_ALREADY_INITIALIZED_MESSAGE}");
        set_level(level);
        return Ok(());
    }

    let mut result = Ok(());

    INIT_LOGGER_ONCE.call_once(|| {
        result = apply_dispatch();
        if result.is_ok() {
            set_level(level);
            info!("{LOGGER_INITIALIZED_MESSAGE_PREFIX}{level:?}");
        }
    });

    result
}

/// Change the active level of the installed logger.
pub fn set_level(level: LevelFilter) {
    log::set_max_level(level);
}

/// Open `log_dir/holiday-service.log` and write buffered and future lines to it.
///
/// Replaces any previously attached file.
///
/// # Errors
///
/// Returns [`HolidayServiceError::Logger`] if the directory or the file cannot be created.
#[track_caller]
pub fn attach_log_file(log_dir: &Path) -> Result<(), HolidayServiceError> {
    let location = ErrorLocation::from(Location::caller());

    create_dir_all(log_dir).map_err(|e| HolidayServiceError::Logger {
        message: format!(
            "Failed to create log directory {}: {e}",
            log_dir.display()
        ),
        location,
    })?;

    let mut file =
        fern::log_file(log_dir.join(LOG_FILE_NAME)).map_err(|e| HolidayServiceError::Logger {
            message: format!("Failed to create log file: {e}"),
            location,
        })?;

    let mut sink = lock_sink();
    if let FileSink::Pending(lines) = &mut *sink {
        for line in take(lines) {
            let _ = writeln!(file, "{line}");
        }
    }
    *sink = FileSink::File(file);
    drop(sink);

    info!("Log directory: {}", log_dir.display());
    Ok(())
}

/// Stop buffering file lines when no log directory is configured.
pub fn disable_log_file() {
    *lock_sink() = FileSink::Disabled;
}

/// Drop any attached file and start buffering again.
#[cfg(test)]
pub(crate) fn reset_file_sink() {
    *lock_sink() = FileSink::Pending(Vec::new());
}

fn lock_sink() -> std::sync::MutexGuard<'static, FileSink> {
    // A panic while writing a line leaves the sink usable
    FILE_SINK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write_file_line(record: &Record) {
    let mut sink = lock_sink();
    match &mut *sink {
        FileSink::Pending(lines) if lines.len() < MAX_PENDING_LINES => {
            lines.push(record.args().to_string());
        }
        FileSink::Pending(_) | FileSink::Disabled => {}
        FileSink::File(file) => {
            let _ = writeln!(file, "{}", record.args());
        }
    }
}

#[track_caller]
fn apply_dispatch() -> Result<(), HolidayServiceError> {
    let color_configuration = ColoredLevelConfig::new()
        .debug(Blue)
        .info(Green)
        .warn(Yellow)
        .error(Red)
        .trace(Magenta);

    let stdout_dispatch = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = format_rfc3339(SystemTime::now()),
                level = color_configuration.color(record.level()),
                message = message,
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0),
            ))
        })
        .chain(stdout());

    // Plain text, no colors
    let file_dispatch = Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = format_rfc3339(SystemTime::now()),
                level = record.level(),
                message = message,
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0)
            ))
        })
        .chain(Output::call(write_file_line));

    // Everything passes the dispatch; `set_level` does the filtering
    Dispatch::new()
        .level(LevelFilter::Trace)
        .chain(stdout_dispatch)
        .chain(file_dispatch)
        .apply()
        .map_err(|e| HolidayServiceError::Logger {
            message: format!("Failed to initialize logger: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })
}
