// Unit tests for logger module initialization logic
// The logger is process-global, so every test here runs serially

use crate::error::HolidayServiceError;
use crate::logger::{LOG_FILE_NAME, attach_log_file, disable_log_file, initialize, reset_file_sink};

use std::fs::read_to_string;
use std::path::PathBuf;

use log::{LevelFilter, info};
use serial_test::serial;
use tempfile::TempDir;

/// **VALUE**: Verifies that calling initialize() multiple times doesn't panic or fail.
///
/// **WHY THIS MATTERS**: fern errors when a second global logger is installed, and both
/// the startup path and tests reach initialize().
///
/// **BUG THIS CATCHES**: Would catch if the Once or AtomicBool guards are removed.
#[test]
#[serial(logger)]
fn given_logger_initialized_when_called_again_then_returns_ok() {
    // WHEN: Calling initialize twice
    let result1 = initialize(LevelFilter::Debug);
    let result2 = initialize(LevelFilter::Info);

    // THEN: Both should return Ok (second one logs warning but doesn't error)
    assert!(result1.is_ok(), "First initialization should succeed");
    assert!(
        result2.is_ok(),
        "Second initialization should succeed (idempotent)"
    );

    // AND: The later level is the active one
    assert_eq!(log::max_level(), LevelFilter::Info);
}

/// **VALUE**: Verifies lines logged before a file is attached still land in the file.
///
/// **WHY THIS MATTERS**: The log directory comes from config, but config loading itself
/// logs. Those lines must not vanish.
///
/// **BUG THIS CATCHES**: Would catch the pending buffer being dropped instead of flushed.
#[test]
#[serial(logger)]
fn given_lines_logged_before_attach_when_file_attached_then_file_contains_them() {
    // GIVEN: An installed logger and a line logged with no file yet
    initialize(LevelFilter::Trace).unwrap();
    let temp_dir = TempDir::new().unwrap();
    reset_file_sink();
    info!("line-before-attach");

    // WHEN: Attaching the file and logging again
    attach_log_file(temp_dir.path()).unwrap();
    info!("line-after-attach");

    // THEN: Both lines are in the file, in order
    let contents = read_to_string(temp_dir.path().join(LOG_FILE_NAME)).unwrap();
    let before = contents.find("line-before-attach").expect("buffered line written");
    let after = contents.find("line-after-attach").expect("live line written");
    assert!(before < after);

    disable_log_file();
}

/// **VALUE**: Verifies that an unusable log directory is a clear error, not a panic.
///
/// **WHY THIS MATTERS**: A bad `logging.directory` in config must stop startup with a
/// readable message.
///
/// **BUG THIS CATCHES**: Would catch `fern::log_file()` being unwrapped.
#[test]
#[serial(logger)]
fn given_invalid_log_dir_when_attached_then_returns_error() {
    // GIVEN: A path under a regular file, which can never be a directory
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("not-a-dir");
    std::fs::write(&file, b"").unwrap();
    let invalid_dir: PathBuf = file.join("logs");

    // WHEN: Attaching a log file there
    let result = attach_log_file(&invalid_dir);

    // THEN: Should return the Logger variant
    assert!(
        matches!(result, Err(HolidayServiceError::Logger { .. })),
        "Should return Logger error for invalid log directory"
    );
}
