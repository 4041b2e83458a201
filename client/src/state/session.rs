//! Session token storage and lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bearer token issued by the backend is the client's only notion of
//! identity: presence means "authenticated". Route guards, the nav bar, the
//! REST client and the forced-logout flow all go through `Session`, which
//! reads the injected `TokenStore` on every query instead of caching.
//!
//! TRADE-OFFS
//! ==========
//! A reactive trigger lets same-tab components re-render after `sign_in` or
//! `clear`. Changes made in another tab are only seen on the next render.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex, PoisonError};

use leptos::prelude::*;

use crate::util::token::{TokenClaims, decode_claims};

/// Local-storage key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Backing storage for the session token.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// `window.localStorage` under [`TOKEN_STORAGE_KEY`].
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

#[cfg(feature = "hydrate")]
impl BrowserTokenStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(feature = "hydrate")]
impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        Self::storage()?
            .get_item(TOKEN_STORAGE_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }

    fn save(&self, token: &str) {
        let Some(storage) = Self::storage() else {
            leptos::logging::warn!("localStorage unavailable; session not persisted");
            return;
        };
        if storage.set_item(TOKEN_STORAGE_KEY, token).is_err() {
            leptos::logging::warn!("failed to persist session token");
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_STORAGE_KEY);
        }
    }
}

/// Process-local store used during server rendering and in tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        store.save(token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .filter(|token| !token.is_empty())
    }

    fn save(&self, token: &str) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// Shared handle to the current session, provided through context.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
    changed: ArcTrigger,
}

impl Session {
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self { store: Arc::new(store), changed: ArcTrigger::new() }
    }

    /// Session backed by the store appropriate for the current build:
    /// `localStorage` in the browser, memory during server rendering.
    pub fn for_environment() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self::new(BrowserTokenStore)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::new(MemoryTokenStore::default())
        }
    }

    /// Current token; subscribes the caller to sign-in/sign-out changes.
    pub fn token(&self) -> Option<String> {
        self.changed.track();
        self.store.load()
    }

    /// Current token without reactive tracking (for request headers).
    pub fn token_untracked(&self) -> Option<String> {
        self.store.load()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Decoded payload of the current token, if any.
    pub fn claims(&self) -> Option<TokenClaims> {
        self.token().as_deref().and_then(decode_claims)
    }

    pub fn sign_in(&self, token: &str) {
        self.store.save(token);
        self.changed.notify();
    }

    pub fn clear(&self) {
        self.store.clear();
        self.changed.notify();
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.store.load().is_some())
            .finish_non_exhaustive()
    }
}
