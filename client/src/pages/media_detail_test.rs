use super::*;
use crate::net::types::{OwnerRef, PostOwner};

fn post(user: Option<OwnerRef>) -> MediaPost {
    MediaPost {
        id: "m1".to_owned(),
        title: "Sunset".to_owned(),
        content: "<p>warm</p>".to_owned(),
        image_url: None,
        description: None,
        created_at: None,
        user,
    }
}

#[test]
fn detail_from_maps_outcomes() {
    assert_eq!(detail_from(Ok(post(None))), Detail::Loaded(post(None)));
    assert_eq!(
        detail_from(Err(ApiError::Status { status: 404, message: Some("Media not found".to_owned()) })),
        Detail::NotFound
    );
    assert_eq!(
        detail_from(Err(ApiError::Status { status: 500, message: None })),
        Detail::Failed("Failed to fetch media item")
    );
    assert_eq!(detail_from(Err(ApiError::Network("offline".to_owned()))), Detail::Failed("Failed to fetch media item"));
}

#[test]
fn rejected_session_is_unauthorized_not_failed() {
    assert_eq!(detail_from(Err(ApiError::Unauthorized { message: None })), Detail::Unauthorized);
    assert_eq!(
        detail_from(Err(ApiError::from_response(401, r#"{"message":"Token expired"}"#))),
        Detail::Unauthorized
    );
}

#[test]
fn posted_by_prefers_owner_name() {
    let owner = PostOwner { id: "u1".to_owned(), name: Some("Ada".to_owned()), username: Some("ada".to_owned()) };
    assert_eq!(posted_by(&post(Some(OwnerRef::User(owner)))).as_deref(), Some("Ada"));
}

#[test]
fn posted_by_unknown_when_owner_not_populated() {
    assert_eq!(posted_by(&post(Some(OwnerRef::Id("u1".to_owned())))).as_deref(), Some("Unknown"));
}

#[test]
fn posted_by_absent_without_owner() {
    assert_eq!(posted_by(&post(None)), None);
}
