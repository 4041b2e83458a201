use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use super::*;

// =============================================================
// MemoryTokenStore
// =============================================================

#[test]
fn memory_store_starts_empty() {
    assert_eq!(MemoryTokenStore::default().load(), None);
}

#[test]
fn memory_store_save_then_clear() {
    let store = MemoryTokenStore::default();
    store.save("abc");
    assert_eq!(store.load().as_deref(), Some("abc"));
    store.clear();
    assert_eq!(store.load(), None);
}

#[test]
fn memory_store_treats_empty_token_as_absent() {
    assert_eq!(MemoryTokenStore::with_token("").load(), None);
}

#[test]
fn memory_store_clones_share_state() {
    let store = MemoryTokenStore::default();
    let other = store.clone();
    store.save("shared");
    assert_eq!(other.load().as_deref(), Some("shared"));
}

// =============================================================
// Session lifecycle
// =============================================================

#[test]
fn session_without_token_is_anonymous() {
    let session = Session::new(MemoryTokenStore::default());
    assert!(!session.is_authenticated());
    assert_eq!(session.token(), None);
    assert_eq!(session.claims(), None);
}

#[test]
fn session_sign_in_and_clear() {
    let session = Session::new(MemoryTokenStore::default());
    session.sign_in("t-1");
    assert!(session.is_authenticated());
    assert_eq!(session.token_untracked().as_deref(), Some("t-1"));
    session.clear();
    assert!(!session.is_authenticated());
}

#[test]
fn session_reads_store_on_every_query() {
    let store = MemoryTokenStore::default();
    let session = Session::new(store.clone());
    assert!(!session.is_authenticated());
    // Another writer (e.g. a second tab) mutates storage directly.
    store.save("external");
    assert!(session.is_authenticated());
    store.clear();
    assert!(!session.is_authenticated());
}

#[test]
fn session_claims_decode_current_token() {
    let payload = URL_SAFE_NO_PAD.encode(r#"{"sub":"u7","name":"Grace"}"#);
    let session = Session::new(MemoryTokenStore::with_token(&format!("h.{payload}.s")));
    let claims = session.claims().unwrap();
    assert_eq!(claims.sub.as_deref(), Some("u7"));
    assert_eq!(claims.display_name(), "Grace");
}

#[test]
fn session_for_environment_is_memory_backed_off_browser() {
    let session = Session::for_environment();
    assert!(!session.is_authenticated());
    session.sign_in("x");
    assert!(session.is_authenticated());
}
