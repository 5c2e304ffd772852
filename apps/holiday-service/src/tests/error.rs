// Unit tests for error module

use crate::error::HolidayServiceError;

use common::ErrorLocation;

use std::panic::Location;

/// **VALUE**: Verifies the startup error renders kind, message and origin.
///
/// **WHY THIS MATTERS**: `main` prints this with `eprintln!` before the logger exists,
/// so the Display output is the only diagnostic an operator sees.
///
/// **BUG THIS CATCHES**: Would catch the location being dropped from the message.
#[test]
fn given_startup_error_when_displayed_then_contains_message_and_location() {
    // GIVEN: A startup error
    let location = ErrorLocation::from(Location::caller());
    let err = HolidayServiceError::Startup {
        message: String::from("Failed to bind 127.0.0.1:8080"),
        location,
    };

    // WHEN: Displaying it
    let text = err.to_string();

    // THEN: Prefix, message and location are all present
    assert!(text.starts_with("Startup Error: "));
    assert!(text.contains("Failed to bind 127.0.0.1:8080"));
    assert!(text.ends_with(&location.to_string()));
}

#[test]
fn given_logger_error_when_displayed_then_uses_logger_prefix() {
    let err = HolidayServiceError::Logger {
        message: String::from("Failed to create log file"),
        location: ErrorLocation::from(Location::caller()),
    };

    assert!(err.to_string().starts_with("Logger Error: Failed to create log file"));
}
