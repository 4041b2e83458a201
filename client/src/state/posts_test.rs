use super::*;

fn post(id: &str) -> MediaPost {
    MediaPost {
        id: id.to_owned(),
        title: format!("Post {id}"),
        content: "c".to_owned(),
        image_url: None,
        description: None,
        created_at: None,
        user: None,
    }
}

#[test]
fn posts_state_starts_loading() {
    let state = PostsState::default();
    assert!(state.loading);
    assert!(state.posts.is_empty());
}

#[test]
fn apply_posts_clears_loading_and_error() {
    let mut state = PostsState { error: Some("old".to_owned()), ..PostsState::default() };
    state.apply_posts(vec![post("a")]);
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.posts.len(), 1);
}

#[test]
fn remove_drops_only_the_deleted_id() {
    let mut state = PostsState::default();
    state.apply_posts(vec![post("a"), post("b"), post("c")]);
    state.begin_delete("b");
    assert!(state.is_deleting("b"));
    state.remove("b");
    assert_eq!(state.posts.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(), vec!["a", "c"]);
    assert!(!state.is_deleting("b"));
}

#[test]
fn remove_unknown_id_is_noop() {
    let mut state = PostsState::default();
    state.apply_posts(vec![post("a")]);
    state.remove("zzz");
    assert_eq!(state.posts.len(), 1);
}

#[test]
fn delete_failed_keeps_post_and_reports() {
    let mut state = PostsState::default();
    state.apply_posts(vec![post("a")]);
    state.begin_delete("a");
    state.delete_failed("a", "Failed to delete item".to_owned());
    assert_eq!(state.posts.len(), 1);
    assert!(!state.is_deleting("a"));
    assert_eq!(state.error.as_deref(), Some("Failed to delete item"));
}
