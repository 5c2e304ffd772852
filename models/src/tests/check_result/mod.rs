mod builder;

use crate::HolidayCheckResult;

use serde_json::json;

/// **VALUE**: Pins the JSON field names of the public response contract.
///
/// **WHY THIS MATTERS**: API consumers read `countryCode`, `isHoliday` and `holidayName`.
/// A serde attribute change would silently break every client.
///
/// **BUG THIS CATCHES**: Would catch removal of `rename_all = "camelCase"`.
#[test]
fn given_holiday_result_when_serialized_then_uses_camel_case_contract() {
    // GIVEN: A holiday result
    let result = HolidayCheckResult::holiday("2025-12-25", "US", "Christmas Day");

    // WHEN: Serializing to JSON
    let value = serde_json::to_value(&result).unwrap();

    // THEN: Field names and values match the contract
    assert_eq!(
        value,
        json!({
            "date": "2025-12-25",
            "countryCode": "US",
            "isHoliday": true,
            "holidayName": "Christmas Day"
        })
    );
}

/// **VALUE**: Verifies that a non-holiday serializes `holidayName` as an explicit `null`.
///
/// **WHY THIS MATTERS**: The contract documents `holidayName: string|null`; clients may
/// check for the key's presence.
///
/// **BUG THIS CATCHES**: Would catch someone adding `skip_serializing_if = "Option::is_none"`.
#[test]
fn given_not_holiday_result_when_serialized_then_holiday_name_is_null() {
    // GIVEN: A non-holiday result
    let result = HolidayCheckResult::not_holiday("2025-12-24", "US");

    // WHEN: Serializing to JSON
    let value = serde_json::to_value(&result).unwrap();

    // THEN: holidayName is present and null
    assert_eq!(value["isHoliday"], json!(false));
    assert!(value.as_object().unwrap().contains_key("holidayName"));
    assert!(value["holidayName"].is_null());
}

#[test]
fn given_constructors_when_used_then_accessors_reflect_invariant() {
    let holiday = HolidayCheckResult::holiday("2025-01-01", "GB", "New Year's Day");
    let plain = HolidayCheckResult::not_holiday("2025-01-02", "GB");

    assert!(holiday.is_holiday());
    assert_eq!(holiday.holiday_name(), Some("New Year's Day"));
    assert!(!plain.is_holiday());
    assert_eq!(plain.holiday_name(), None);
    assert_eq!(plain.date(), "2025-01-02");
    assert_eq!(plain.country_code(), "GB");
}
