use super::*;

// =============================================================
// MediaPost
// =============================================================

#[test]
fn media_post_accepts_camel_case_fields() {
    let post: MediaPost = serde_json::from_value(serde_json::json!({
        "id": "m1",
        "title": "Sunset",
        "content": "<p>hi</p>",
        "imageUrl": "https://cdn.test/a.png",
        "createdAt": "2024-05-01T10:00:00Z",
        "user": { "_id": "u1", "name": "Alice" }
    }))
    .unwrap();
    assert_eq!(post.id, "m1");
    assert_eq!(post.image_url.as_deref(), Some("https://cdn.test/a.png"));
    assert_eq!(post.created_at.as_deref(), Some("2024-05-01T10:00:00Z"));
    assert_eq!(post.owner_id(), Some("u1"));
    assert_eq!(post.user.as_ref().and_then(OwnerRef::display_name), Some("Alice"));
}

#[test]
fn media_post_accepts_document_store_aliases() {
    let post: MediaPost = serde_json::from_value(serde_json::json!({
        "_id": "m2",
        "title": "Raw",
        "content": "x",
        "created_at": "2024-05-02T00:00:00Z"
    }))
    .unwrap();
    assert_eq!(post.id, "m2");
    assert_eq!(post.created_at.as_deref(), Some("2024-05-02T00:00:00Z"));
    assert!(post.user.is_none());
}

#[test]
fn media_post_owner_may_be_bare_id() {
    let post: MediaPost = serde_json::from_value(serde_json::json!({
        "id": "m3",
        "user": "u9"
    }))
    .unwrap();
    assert_eq!(post.owner_id(), Some("u9"));
    assert_eq!(post.user.as_ref().and_then(OwnerRef::display_name), None);
    assert_eq!(post.title, "");
}

#[test]
fn owner_display_name_falls_back_to_username() {
    let owner = OwnerRef::User(PostOwner { id: "u1".to_owned(), name: None, username: Some("al".to_owned()) });
    assert_eq!(owner.display_name(), Some("al"));
}

// =============================================================
// Listings
// =============================================================

#[test]
fn media_page_parses_pagination_fields() {
    let page: MediaPage = serde_json::from_value(serde_json::json!({
        "results": [{ "id": "a" }, { "id": "b" }],
        "page": 2,
        "limit": 8,
        "totalPages": 3,
        "totalResults": 18
    }))
    .unwrap();
    assert_eq!(page.results.len(), 2);
    assert_eq!(page.page, 2);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.total_results, 18);
}

#[test]
fn media_page_missing_fields_default() {
    let page: MediaPage = serde_json::from_value(serde_json::json!({})).unwrap();
    assert!(page.results.is_empty());
    assert_eq!(page.page, 1);
    assert_eq!(page.total_results, 0);
}

#[test]
fn user_media_requires_results_array() {
    assert!(serde_json::from_value::<UserMedia>(serde_json::json!({ "results": "nope" })).is_err());
    assert!(serde_json::from_value::<UserMedia>(serde_json::json!({})).is_err());
    let ok: UserMedia = serde_json::from_value(serde_json::json!({ "results": [] })).unwrap();
    assert!(ok.results.is_empty());
}

#[test]
fn created_media_accepts_either_id_key() {
    let a: CreatedMedia = serde_json::from_value(serde_json::json!({ "id": "n1" })).unwrap();
    let b: CreatedMedia = serde_json::from_value(serde_json::json!({ "_id": "n2" })).unwrap();
    assert_eq!(a.id, "n1");
    assert_eq!(b.id, "n2");
}

#[test]
fn register_request_serializes_all_fields() {
    let body = serde_json::to_value(RegisterRequest {
        username: "al".to_owned(),
        email: "al@x.io".to_owned(),
        password: "secret1".to_owned(),
    })
    .unwrap();
    assert_eq!(body, serde_json::json!({ "username": "al", "email": "al@x.io", "password": "secret1" }));
}
