use crate::HttpStatusCode;

/// **VALUE**: Verifies the ranges used to classify provider responses.
///
/// **WHY THIS MATTERS**: The lookup service logs a 404 from the provider (unknown country)
/// differently from a 503 (outage). Misclassification hides real outages in the logs.
///
/// **BUG THIS CATCHES**: Off-by-one errors on the range bounds.
#[test]
fn given_status_codes_when_classified_then_match_http_ranges() {
    // Success
    assert!(HttpStatusCode(200).is_success());
    assert!(HttpStatusCode(204).is_success());
    assert!(!HttpStatusCode(199).is_success());
    assert!(!HttpStatusCode(300).is_success());

    // Client errors
    assert!(HttpStatusCode(400).is_client_error());
    assert!(HttpStatusCode(404).is_client_error());
    assert!(!HttpStatusCode(500).is_client_error());

    // Server errors
    assert!(HttpStatusCode(500).is_server_error());
    assert!(HttpStatusCode(503).is_server_error());
    assert!(!HttpStatusCode(499).is_server_error());
}

#[test]
fn given_u16_when_converted_then_displays_number() {
    let status = HttpStatusCode::from(404);

    assert_eq!(status.as_u16(), 404);
    assert_eq!(status.to_string(), "404");
}
