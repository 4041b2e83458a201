use super::*;

#[test]
fn failure_message_prefers_backend_message() {
    let err = ApiError::Unauthorized { message: Some("Incorrect email or password".to_owned()) };
    assert_eq!(failure_message(&err), "Incorrect email or password");
}

#[test]
fn failure_message_falls_back() {
    assert_eq!(
        failure_message(&ApiError::Status { status: 500, message: None }),
        "Login failed. Please check your credentials."
    );
    assert_eq!(failure_message(&ApiError::Decode("no token".to_owned())), "Login failed. Please check your credentials.");
}

#[test]
fn registered_flag_requires_exact_value() {
    assert!(just_registered(Some("1")));
    assert!(!just_registered(Some("true")));
    assert!(!just_registered(None));
}
