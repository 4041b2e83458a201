use super::*;

#[test]
fn from_response_maps_401_to_unauthorized() {
    let err = ApiError::from_response(401, r#"{"message":"jwt expired"}"#);
    assert_eq!(err, ApiError::Unauthorized { message: Some("jwt expired".to_owned()) });
    assert!(err.is_unauthorized());
}

#[test]
fn from_response_keeps_status_and_message() {
    let err = ApiError::from_response(409, r#"{"message":"Email already taken"}"#);
    assert_eq!(err, ApiError::Status { status: 409, message: Some("Email already taken".to_owned()) });
    assert!(!err.is_unauthorized());
}

#[test]
fn message_from_body_prefers_message_then_error() {
    assert_eq!(message_from_body(r#"{"message":"a","error":"b"}"#).as_deref(), Some("a"));
    assert_eq!(message_from_body(r#"{"error":"b"}"#).as_deref(), Some("b"));
    assert_eq!(message_from_body(r#"{"message":"  ","error":"b"}"#).as_deref(), Some("b"));
}

#[test]
fn message_from_body_ignores_non_json_and_non_strings() {
    assert_eq!(message_from_body("<html>502</html>"), None);
    assert_eq!(message_from_body(r#"{"message":42}"#), None);
    assert_eq!(message_from_body(""), None);
}

#[test]
fn message_or_uses_fallback_without_backend_message() {
    let err = ApiError::Status { status: 500, message: None };
    assert_eq!(err.message_or("Failed to post media. Please try again."), "Failed to post media. Please try again.");
    assert_eq!(ApiError::Decode("x".to_owned()).message_or("fallback"), "fallback");
    assert_eq!(ApiError::Unauthorized { message: None }.message_or("fallback"), "fallback");
}

#[test]
fn message_or_hides_network_detail() {
    let err = ApiError::Network("JsError { name: TypeError, message: Failed to fetch }".to_owned());
    assert_eq!(err.message_or("Failed to fetch media items"), "Failed to fetch media items");
}

#[test]
fn rejected_login_keeps_backend_message() {
    let err = ApiError::from_response(401, r#"{"message":"Incorrect email or password"}"#);
    assert_eq!(err.message_or("Login failed. Please check your credentials."), "Incorrect email or password");
}
