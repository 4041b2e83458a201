//! The signed-in user's own posts, as listed on the dashboard.

#[cfg(test)]
#[path = "posts_test.rs"]
mod posts_test;

use std::collections::HashSet;

use crate::net::types::MediaPost;

pub const INVALID_FORMAT_MESSAGE: &str = "Invalid data format received";

/// Dashboard list state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostsState {
    pub posts: Vec<MediaPost>,
    pub loading: bool,
    pub error: Option<String>,
    /// Ids with a delete request in flight.
    pub deleting: HashSet<String>,
}

impl Default for PostsState {
    fn default() -> Self {
        Self { posts: Vec::new(), loading: true, error: None, deleting: HashSet::new() }
    }
}

impl PostsState {
    pub fn apply_posts(&mut self, posts: Vec<MediaPost>) {
        self.posts = posts;
        self.loading = false;
        self.error = None;
    }

    pub fn apply_error(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    pub fn begin_delete(&mut self, id: &str) {
        self.deleting.insert(id.to_owned());
    }

    /// Drop a deleted post from the list in place.
    pub fn remove(&mut self, id: &str) {
        self.deleting.remove(id);
        self.posts.retain(|post| post.id != id);
    }

    pub fn delete_failed(&mut self, id: &str, message: String) {
        self.deleting.remove(id);
        self.error = Some(message);
    }

    pub fn is_deleting(&self, id: &str) -> bool {
        self.deleting.contains(id)
    }
}
