use crate::ErrorLocation;

use std::panic::Location;

/// **VALUE**: Verifies that `ErrorLocation::from(Location::caller())` records this file and a real position.
///
/// **WHY THIS MATTERS**: Every error in the workspace renders its location. If capture breaks,
/// a provider failure in the logs no longer says which call produced it.
///
/// **BUG THIS CATCHES**: Would catch if the conversion drops or mixes up file, line or column.
#[test]
fn given_caller_when_error_location_created_then_captures_file_line_column() {
    // GIVEN / WHEN: Capturing the current location
    let location = ErrorLocation::from(Location::caller());

    // THEN: Should point at this test file
    assert!(
        location.file.contains("tests"),
        "Should capture the test file, got {}",
        location.file
    );
    assert!(location.line > 0, "Should capture line number");
    assert!(location.column > 0, "Should capture column number");
}

/// **VALUE**: Verifies the `[file:line:column]` rendering used in every error message.
///
/// **WHY THIS MATTERS**: Error Display strings end with this suffix; the API layer strips
/// it before answering callers, so its shape must stay stable.
///
/// **BUG THIS CATCHES**: Would catch a Display change (missing brackets, extra separators).
#[test]
fn given_error_location_when_formatted_then_produces_bracketed_format() {
    // GIVEN: A fixed location
    let location = ErrorLocation {
        file: "src/lookup/mod.rs",
        line: 42,
        column: 7,
    };

    // WHEN: Formatting as string
    let formatted = location.to_string();

    // THEN: Should produce "[file:line:column]"
    assert_eq!(formatted, "[src/lookup/mod.rs:42:7]");
}

/// **VALUE**: Verifies that `#[track_caller]` propagation gives each call site its own line.
///
/// **WHY THIS MATTERS**: Helpers that build errors are marked `#[track_caller]`; without
/// propagation every error would report the helper's line.
///
/// **BUG THIS CATCHES**: Would catch if location capture stops following the caller chain.
#[test]
fn given_multiple_call_sites_when_capturing_location_then_each_has_unique_line() {
    // GIVEN: A helper that captures its caller
    #[track_caller]
    fn capture_location() -> ErrorLocation {
        ErrorLocation::from(Location::caller())
    }

    // WHEN: Capturing from two consecutive lines
    let loc1 = capture_location();
    let loc2 = capture_location();

    // THEN: Same file, sequential lines
    assert_eq!(loc1.file, loc2.file, "Should have same file");
    assert_eq!(loc1.line + 1, loc2.line, "Lines should be sequential");
}

/// **VALUE**: Verifies locations serialize as a plain object.
///
/// **BUG THIS CATCHES**: Would catch removal of `#[derive(Serialize)]`.
#[test]
fn given_error_location_when_serialized_then_contains_all_fields() {
    let location = ErrorLocation {
        file: "a.rs",
        line: 1,
        column: 2,
    };

    let json = serde_json::to_value(location).unwrap();

    assert_eq!(json["file"], "a.rs");
    assert_eq!(json["line"], 1);
    assert_eq!(json["column"], 2);
}
