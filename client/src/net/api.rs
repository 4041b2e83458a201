//! REST client for the media backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable`, since every
//! call depends on the browser's session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ApiClient` plays the role of a shared HTTP client configuration: one base
//! URL for every endpoint and an "interceptor" that attaches
//! `Authorization: Bearer <token>` whenever the session holds a token.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. A 401 is classified as
//! `ApiError::Unauthorized` here so callers can run the forced-logout flow
//! without looking at status codes.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{CreatedMedia, LoginRequest, LoginResponse, MediaPage, MediaPost, RegisterRequest, UserMedia};
use crate::config::ClientConfig;
use crate::state::gallery::GalleryQuery;
use crate::state::session::Session;
use crate::util::upload::MediaDraft;

const REGISTER_PATH: &str = "/auth/register";
const LOGIN_PATH: &str = "/auth/login";
const LOGOUT_PATH: &str = "/auth/logout";
const MEDIA_PATH: &str = "/media";
const USER_MEDIA_PATH: &str = "/media/user";

fn media_list_path(query: &GalleryQuery) -> String {
    format!("{MEDIA_PATH}?{}", query.to_query_string())
}

fn media_item_path(id: &str) -> String {
    format!("{MEDIA_PATH}/{}", urlencoding::encode(id))
}

/// Shared HTTP client: base URL plus bearer-token interceptor.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    session: Session,
}

#[cfg(feature = "hydrate")]
#[derive(Clone, Copy)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, session: Session) -> Self {
        Self { base_url: config.api_base_url.clone(), session }
    }

    /// Absolute (or host-relative) URL for an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `Authorization` header value for the current session, if any.
    pub fn authorization(&self) -> Option<String> {
        self.session.token_untracked().map(|token| format!("Bearer {token}"))
    }

    /// `POST /auth/register`.
    ///
    /// # Errors
    ///
    /// Returns the classified backend or transport error.
    pub async fn register(&self, body: &RegisterRequest) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = self.builder(Verb::Post, REGISTER_PATH).json(body);
            dispatch(request).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (body, REGISTER_PATH);
            Err(ApiError::Unavailable)
        }
    }

    /// `POST /auth/login`, returning the issued token.
    ///
    /// # Errors
    ///
    /// Returns the classified backend or transport error, or `Decode` when the
    /// body carries no token.
    pub async fn login(&self, body: &LoginRequest) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = self.builder(Verb::Post, LOGIN_PATH).json(body);
            decode(dispatch(request).await?).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (body, LOGIN_PATH);
            Err(ApiError::Unavailable)
        }
    }

    /// `POST /auth/logout`.
    ///
    /// # Errors
    ///
    /// Returns the classified backend or transport error.
    pub async fn logout(&self) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = self.builder(Verb::Post, LOGOUT_PATH).build();
            dispatch(request).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = LOGOUT_PATH;
            Err(ApiError::Unavailable)
        }
    }

    /// `GET /media?page&limit[&title]`.
    ///
    /// # Errors
    ///
    /// Returns the classified backend or transport error.
    pub async fn list_media(&self, query: &GalleryQuery) -> Result<MediaPage, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = self.builder(Verb::Get, &media_list_path(query)).build();
            decode(dispatch(request).await?).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = media_list_path(query);
            Err(ApiError::Unavailable)
        }
    }

    /// `GET /media/user`: the caller's own posts.
    ///
    /// # Errors
    ///
    /// Returns the classified backend or transport error, or `Decode` when the
    /// body has no `results` array.
    pub async fn list_user_media(&self) -> Result<UserMedia, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = self.builder(Verb::Get, USER_MEDIA_PATH).build();
            decode(dispatch(request).await?).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = USER_MEDIA_PATH;
            Err(ApiError::Unavailable)
        }
    }

    /// `GET /media/:id`.
    ///
    /// # Errors
    ///
    /// Returns the classified backend or transport error.
    pub async fn get_media(&self, id: &str) -> Result<MediaPost, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = self.builder(Verb::Get, &media_item_path(id)).build();
            decode(dispatch(request).await?).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = media_item_path(id);
            Err(ApiError::Unavailable)
        }
    }

    /// `POST /media` as multipart (`title`, `content`, optional `file`).
    ///
    /// # Errors
    ///
    /// Returns the classified backend or transport error, or `Decode` when the
    /// response does not name the created id.
    pub async fn create_media(&self, draft: &MediaDraft) -> Result<CreatedMedia, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let form = form_data(draft)?;
            let request = self.builder(Verb::Post, MEDIA_PATH).body(form);
            decode(dispatch(request).await?).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (draft, MEDIA_PATH);
            Err(ApiError::Unavailable)
        }
    }

    /// `PUT /media/:id` as multipart (`title`, `content`, optional `file`).
    ///
    /// # Errors
    ///
    /// Returns the classified backend or transport error.
    pub async fn update_media(&self, id: &str, draft: &MediaDraft) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let form = form_data(draft)?;
            let request = self.builder(Verb::Put, &media_item_path(id)).body(form);
            dispatch(request).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (media_item_path(id), draft);
            Err(ApiError::Unavailable)
        }
    }

    /// `DELETE /media/:id`.
    ///
    /// # Errors
    ///
    /// Returns the classified backend or transport error.
    pub async fn delete_media(&self, id: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = self.builder(Verb::Delete, &media_item_path(id)).build();
            dispatch(request).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = media_item_path(id);
            Err(ApiError::Unavailable)
        }
    }

    #[cfg(feature = "hydrate")]
    fn builder(&self, verb: Verb, path: &str) -> gloo_net::http::RequestBuilder {
        use gloo_net::http::Request;

        let url = self.url(path);
        let builder = match verb {
            Verb::Get => Request::get(&url),
            Verb::Post => Request::post(&url),
            Verb::Put => Request::put(&url),
            Verb::Delete => Request::delete(&url),
        };
        match self.authorization() {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }
}

#[cfg(feature = "hydrate")]
async fn dispatch(
    request: Result<gloo_net::http::Request, gloo_net::Error>,
) -> Result<gloo_net::http::Response, ApiError> {
    let request = request.map_err(|e| ApiError::Network(e.to_string()))?;
    let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    leptos::logging::warn!("api {} -> {status}", resp.url());
    Err(ApiError::from_response(status, &body))
}

#[cfg(feature = "hydrate")]
async fn decode<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
fn form_data(draft: &MediaDraft) -> Result<web_sys::FormData, ApiError> {
    let js_error = |e: wasm_bindgen::JsValue| ApiError::Network(format!("could not build form data: {e:?}"));
    let form = web_sys::FormData::new().map_err(js_error)?;
    form.append_with_str("title", &draft.title).map_err(js_error)?;
    form.append_with_str("content", &draft.content).map_err(js_error)?;
    if let Some(upload) = &draft.upload {
        form.append_with_blob_and_filename("file", &upload.file, &upload.name)
            .map_err(js_error)?;
    }
    Ok(form)
}
