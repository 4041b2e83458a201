//! Dashboard (`/dashboard`, signed-in only): the visitor's own posts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads `GET /media/user` once on mount. Deleting a post removes it from
//! the local list on success, without a reload. A 401 on either call ends
//! the session via the forced-logout flow.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::alert::Alert;
use crate::components::post_card::PostCard;
use crate::components::spinner::Spinner;
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::state::posts::{INVALID_FORMAT_MESSAGE, PostsState};
use crate::state::session::Session;
use crate::util::auth::{PendingRedirect, install_redirect};

const FETCH_FAILED: &str = "Failed to fetch media posts";
const DELETE_FAILED: &str = "Failed to delete item";
const DELETE_CONFIRM: &str = "Are you sure you want to delete this item?";
const POST_PATH: &str = "/post";

/// Banner text for a failed listing.
fn fetch_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Decode(_) => INVALID_FORMAT_MESSAGE.to_owned(),
        other => other.message_or(FETCH_FAILED),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<Session>();
    let redirect: PendingRedirect = RwSignal::new(None);
    install_redirect(redirect, use_navigate());

    let state = RwSignal::new(PostsState::default());

    {
        let api = api.clone();
        let session = session.clone();
        Effect::new(move || {
            #[cfg(feature = "hydrate")]
            {
                let api = api.clone();
                let session = session.clone();
                leptos::task::spawn_local(async move {
                    match api.list_user_media().await {
                        Ok(media) => state.update(|s| s.apply_posts(media.results)),
                        Err(e) => {
                            leptos::logging::error!("dashboard fetch failed: {e}");
                            state.update(|s| s.apply_error(fetch_error_message(&e)));
                            if e.is_unauthorized() {
                                crate::util::auth::force_logout(&api, &session, redirect).await;
                            }
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (&api, &session);
        });
    }

    let on_edit = Callback::new(move |id: String| redirect.set(Some(format!("/edit/{id}"))));
    let on_add = move |_: leptos::ev::MouseEvent| redirect.set(Some(POST_PATH.to_owned()));
    let on_retry = Callback::new(|()| crate::util::browser::reload());

    let on_delete = Callback::new(move |id: String| {
        if !crate::util::browser::confirm(DELETE_CONFIRM) {
            return;
        }
        state.update(|s| s.begin_delete(&id));
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let session = session.clone();
            leptos::task::spawn_local(async move {
                match api.delete_media(&id).await {
                    Ok(()) => state.update(|s| s.remove(&id)),
                    Err(e) if e.is_unauthorized() => {
                        state.update(|s| s.delete_failed(&id, e.message_or(DELETE_FAILED)));
                        crate::util::auth::force_logout(&api, &session, redirect).await;
                    }
                    Err(e) => {
                        leptos::logging::error!("delete {id} failed: {e}");
                        state.update(|s| s.delete_failed(&id, e.message_or(DELETE_FAILED)));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&api, &session);
    });

    let content = move || {
        let current = state.get();
        if current.loading {
            return view! { <Spinner /> }.into_any();
        }
        if let Some(message) = current.error {
            return view! { <Alert message=message on_retry=on_retry /> }.into_any();
        }
        if current.posts.is_empty() {
            return view! {
                <div class="dashboard__empty">
                    <p>"No media items found"</p>
                    <button class="dashboard__add" type="button" on:click=on_add>
                        "Add Your First Media Item"
                    </button>
                </div>
            }
            .into_any();
        }
        view! {
            <div class="dashboard__grid">
                {current
                    .posts
                    .into_iter()
                    .map(|post| {
                        let id = post.id.clone();
                        let deleting = Signal::derive(move || state.with(|s| s.is_deleting(&id)));
                        view! { <PostCard post=post deleting=deleting on_edit=on_edit on_delete=on_delete /> }
                    })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <div class="dashboard">
            <div class="dashboard__header">
                <h1>"Your Media Dashboard"</h1>
                <button class="dashboard__add" type="button" on:click=on_add>
                    "Add New Media"
                </button>
            </div>
            {content}
        </div>
    }
}
