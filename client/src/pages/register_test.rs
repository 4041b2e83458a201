use super::*;

#[test]
fn failure_message_uses_backend_message() {
    let err = ApiError::Status { status: 400, message: Some("Email already taken".to_owned()) };
    assert_eq!(failure_message(&err), "Email already taken");
}

#[test]
fn failure_message_fallback() {
    assert_eq!(
        failure_message(&ApiError::Status { status: 500, message: None }),
        "Registration failed. Please try again."
    );
}

