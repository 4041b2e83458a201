use super::*;
use crate::net::types::{OwnerRef, PostOwner};

fn token_for(claims: &serde_json::Value) -> String {
    format!("eyJhbGciOiJIUzI1NiJ9.{}.signature", URL_SAFE_NO_PAD.encode(claims.to_string()))
}

fn post_owned_by(owner: Option<OwnerRef>) -> MediaPost {
    MediaPost {
        id: "m1".to_owned(),
        title: "t".to_owned(),
        content: "c".to_owned(),
        image_url: None,
        description: None,
        created_at: None,
        user: owner,
    }
}

// =============================================================
// Decoding
// =============================================================

#[test]
fn decode_claims_reads_payload_segment() {
    let token = token_for(&serde_json::json!({ "sub": "u1", "username": "alice", "iat": 1 }));
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.sub.as_deref(), Some("u1"));
    assert_eq!(claims.username.as_deref(), Some("alice"));
}

#[test]
fn decode_claims_tolerates_padding_and_standard_alphabet() {
    let payload = STANDARD_NO_PAD.encode(r#"{"sub":"u>?"}"#);
    let token = format!("h.{payload}==.s");
    assert_eq!(decode_claims(&token).unwrap().sub.as_deref(), Some("u>?"));
}

#[test]
fn decode_claims_accepts_numeric_subject() {
    let token = token_for(&serde_json::json!({ "sub": 42 }));
    assert_eq!(decode_claims(&token).unwrap().sub.as_deref(), Some("42"));
}

#[test]
fn decode_claims_rejects_malformed_tokens() {
    assert!(decode_claims("not-a-jwt").is_none());
    assert!(decode_claims("a..c").is_none());
    assert!(decode_claims("a.!!!.c").is_none());
    assert!(matches!(try_decode_claims("only"), Err(ClaimsError::MissingPayload)));
    let not_json = format!("a.{}.c", URL_SAFE_NO_PAD.encode("plain text"));
    assert!(matches!(try_decode_claims(&not_json), Err(ClaimsError::Json(_))));
}

// =============================================================
// Display name
// =============================================================

#[test]
fn display_name_prefers_username_then_name() {
    let both = TokenClaims { sub: None, username: Some("al".to_owned()), name: Some("Alice".to_owned()) };
    assert_eq!(both.display_name(), "al");
    let name_only = TokenClaims { sub: None, username: Some(String::new()), name: Some("Alice".to_owned()) };
    assert_eq!(name_only.display_name(), "Alice");
    assert_eq!(TokenClaims::default().display_name(), "User");
}

// =============================================================
// Ownership
// =============================================================

#[test]
fn owns_matches_subject_against_populated_owner() {
    let claims = TokenClaims { sub: Some("u1".to_owned()), ..TokenClaims::default() };
    let post = post_owned_by(Some(OwnerRef::User(PostOwner { id: "u1".to_owned(), name: None, username: None })));
    assert!(claims.owns(&post));
}

#[test]
fn owns_matches_subject_against_bare_owner_id() {
    let claims = TokenClaims { sub: Some("u1".to_owned()), ..TokenClaims::default() };
    assert!(claims.owns(&post_owned_by(Some(OwnerRef::Id("u1".to_owned())))));
    assert!(!claims.owns(&post_owned_by(Some(OwnerRef::Id("u2".to_owned())))));
}

#[test]
fn owns_is_false_without_subject_or_owner() {
    let anonymous = TokenClaims::default();
    assert!(!anonymous.owns(&post_owned_by(Some(OwnerRef::Id("u1".to_owned())))));
    let claims = TokenClaims { sub: Some("u1".to_owned()), ..TokenClaims::default() };
    assert!(!claims.owns(&post_owned_by(None)));
}
