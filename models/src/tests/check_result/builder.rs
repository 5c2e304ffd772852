use crate::{HolidayCheckResultBuilder, ModelError};

/// **VALUE**: Verifies a complete holiday builds successfully.
///
/// **BUG THIS CATCHES**: Would catch the builder dropping the name on the happy path.
#[test]
fn given_holiday_with_name_when_build_then_succeeds() {
    // GIVEN: All fields for a holiday
    let builder = HolidayCheckResultBuilder::default()
        .with_date("2025-12-25")
        .with_country_code("US")
        .with_is_holiday(true)
        .with_holiday_name("Christmas Day");

    // WHEN: Building
    let result = builder.build().unwrap();

    // THEN: The name is carried through
    assert!(result.is_holiday());
    assert_eq!(result.holiday_name(), Some("Christmas Day"));
}

/// **VALUE**: Verifies the builder refuses a holiday without a name.
///
/// **WHY THIS MATTERS**: `isHoliday=true` must imply a non-empty `holidayName`; a provider
/// record with a blank name must not leak through as `holidayName: ""`.
///
/// **BUG THIS CATCHES**: Would catch the blank-name check being removed.
#[test]
fn given_holiday_with_blank_name_when_build_then_returns_validation_error() {
    // GIVEN: A holiday with a whitespace name
    let builder = HolidayCheckResultBuilder::default()
        .with_date("2025-12-25")
        .with_country_code("US")
        .with_is_holiday(true)
        .with_holiday_name("   ");

    // WHEN: Building
    let result = builder.build();

    // THEN: Validation error mentioning the name
    match result {
        Err(ModelError::Validation { message, .. }) => {
            assert!(message.contains("non-empty name"), "got: {message}")
        }
        other => panic!("Expected validation error, got {other:?}"),
    }
}

#[test]
fn given_holiday_without_name_when_build_then_returns_validation_error() {
    let result = HolidayCheckResultBuilder::default()
        .with_date("2025-12-25")
        .with_country_code("US")
        .with_is_holiday(true)
        .build();

    assert!(result.is_err());
}

/// **VALUE**: Verifies the builder refuses a name on a non-holiday.
///
/// **BUG THIS CATCHES**: Would catch the `(false, Some(_))` arm accepting the value.
#[test]
fn given_non_holiday_with_name_when_build_then_returns_validation_error() {
    let result = HolidayCheckResultBuilder::default()
        .with_date("2025-12-24")
        .with_country_code("US")
        .with_is_holiday(false)
        .with_holiday_name("Christmas Eve")
        .build();

    let err = result.unwrap_err();
    assert!(err.to_string().contains("cannot carry a name"));
}

#[test]
fn given_missing_required_fields_when_build_then_returns_validation_error() {
    assert!(HolidayCheckResultBuilder::default().build().is_err());
    assert!(
        HolidayCheckResultBuilder::default()
            .with_date("2025-12-24")
            .with_is_holiday(false)
            .build()
            .is_err(),
        "country code is required"
    );
    assert!(
        HolidayCheckResultBuilder::default()
            .with_date("2025-12-24")
            .with_country_code("US")
            .build()
            .is_err(),
        "holiday flag is required"
    );
}
