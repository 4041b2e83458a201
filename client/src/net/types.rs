//! Wire DTOs for the media backend's REST API.
//!
//! DESIGN
//! ======
//! The backend is a document store that is not consistent about key naming
//! (`id` vs `_id`, `createdAt` vs `created_at`) or about whether the owning
//! user is populated. Aliases and an untagged owner reference absorb those
//! differences here so pages can work with one shape.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// `POST /auth/login` request body.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /auth/login` success body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// `POST /auth/register` request body.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// The user a media post belongs to, as embedded in the post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostOwner {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

/// Owner field of a post: either the bare user id or the populated user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OwnerRef {
    Id(String),
    User(PostOwner),
}

impl OwnerRef {
    pub fn id(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::User(user) => &user.id,
        }
    }

    /// Name to show in "Posted by", if the backend populated one.
    pub fn display_name(&self) -> Option<&str> {
        match self {
            Self::Id(_) => None,
            Self::User(user) => user.name.as_deref().or(user.username.as_deref()),
        }
    }
}

/// A single media post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaPost {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "created_at")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub user: Option<OwnerRef>,
}

impl MediaPost {
    pub fn owner_id(&self) -> Option<&str> {
        self.user.as_ref().map(OwnerRef::id)
    }
}

/// `GET /media` paginated listing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaPage {
    #[serde(default)]
    pub results: Vec<MediaPost>,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u64,
}

fn first_page() -> u32 {
    1
}

/// `GET /media/user` listing of the caller's own posts.
///
/// `results` is required: a body without it is a format error, not an empty list.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UserMedia {
    pub results: Vec<MediaPost>,
}

/// `POST /media` creation result.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CreatedMedia {
    #[serde(alias = "_id")]
    pub id: String,
}
