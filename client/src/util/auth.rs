//! Logout, forced logout, and deferred navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The nav bar's Logout button and every authenticated fetch that comes back
//! 401 end the session the same way: a best-effort `POST /auth/logout`, then
//! the local token is dropped and the app navigates to `/login`.
//!
//! Async tasks and callbacks do not hold the router's navigate function.
//! They write a path into a page-owned redirect signal instead, and
//! `install_redirect` performs the navigation from an effect.
//!
//! ERROR HANDLING
//! ==============
//! A failed logout request is logged and otherwise ignored; the local
//! session is cleared regardless.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::api::ApiClient;
use crate::state::session::Session;
use crate::util::guard::LOGIN_PATH;

/// Pending client-side navigation target.
pub type PendingRedirect = RwSignal<Option<String>>;

/// Navigate whenever `redirect` receives a path, then reset it.
pub fn install_redirect<F>(redirect: PendingRedirect, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        if let Some(path) = redirect.get() {
            redirect.set(None);
            navigate(&path, NavigateOptions::default());
        }
    });
}

/// Tell the backend, then drop the local token.
pub async fn logout(api: &ApiClient, session: &Session) {
    if let Err(e) = api.logout().await {
        leptos::logging::warn!("logout request failed: {e}");
    }
    session.clear();
}

/// End the session and send the visitor to the login page.
pub async fn force_logout(api: &ApiClient, session: &Session, redirect: PendingRedirect) {
    logout(api, session).await;
    redirect.set(Some(LOGIN_PATH.to_owned()));
}
