#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn images_are_previewable() {
    assert!(is_previewable("image/png"));
    assert!(is_previewable("image/svg+xml"));
}

#[test]
fn other_types_are_not_previewable() {
    assert!(!is_previewable("video/mp4"));
    assert!(!is_previewable(""));
    assert!(!is_previewable("application/image"));
}

#[test]
fn pending_upload_uses_its_mime() {
    let upload = PendingUpload { name: "clip.mp4".to_owned(), mime: "video/mp4".to_owned() };
    assert!(!upload.is_previewable());
}


#[test]
fn draft_requires_title_and_content() {
    let err = MediaDraft::validated(String::new(), "body".to_owned(), None).map(|_| ());
    assert_eq!(err, Err("Title is required"));
    let err = MediaDraft::validated("Title".to_owned(), "  ".to_owned(), None).map(|_| ());
    assert_eq!(err, Err("Content is required"));
}

#[test]
fn draft_keeps_input_verbatim() {
    let upload = PendingUpload { name: "a.png".to_owned(), mime: "image/png".to_owned() };
    let draft = MediaDraft::validated(" Title ".to_owned(), "<p>x</p>".to_owned(), Some(upload));
    let Ok(draft) = draft else {
        panic!("valid draft rejected");
    };
    assert_eq!(draft.title, " Title ");
    assert_eq!(draft.content, "<p>x</p>");
    assert_eq!(draft.upload.map(|u| u.name).as_deref(), Some("a.png"));
}
