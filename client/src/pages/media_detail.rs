//! Single media item page (`/media/:id`).
//!
//! Public. The owner, as judged from the decoded session token, also gets
//! Edit and Delete. That check only decides what to render; the backend
//! enforces ownership on the actual requests.

#[cfg(test)]
#[path = "media_detail_test.rs"]
mod media_detail_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::alert::Alert;
use crate::components::spinner::Spinner;
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::MediaPost;
use crate::state::session::Session;
use crate::util::auth::{PendingRedirect, install_redirect};
use crate::util::format::{display_date, display_title};
use crate::util::mounted::use_mounted;

const FETCH_FAILED: &str = "Failed to fetch media item";
const NOT_FOUND: &str = "Media item not found";
const DELETE_FAILED: &str = "Failed to delete media item";
const DELETE_CONFIRM: &str = "Are you sure you want to delete this item?";

#[derive(Clone, Debug, PartialEq, Eq)]
enum Detail {
    Loading,
    Loaded(MediaPost),
    NotFound,
    /// The session was rejected; the page ends it.
    Unauthorized,
    Failed(&'static str),
}

fn detail_from(result: Result<MediaPost, ApiError>) -> Detail {
    match result {
        Ok(post) => Detail::Loaded(post),
        Err(ApiError::Status { status: 404, .. }) => Detail::NotFound,
        Err(ApiError::Unauthorized { .. }) => Detail::Unauthorized,
        Err(e) => {
            leptos::logging::error!("media fetch failed: {e}");
            Detail::Failed(FETCH_FAILED)
        }
    }
}

/// "Posted by" text: the owner's name, `Unknown` when the owner is not
/// populated, nothing when the post has no owner at all.
fn posted_by(post: &MediaPost) -> Option<String> {
    let owner = post.user.as_ref()?;
    Some(owner.display_name().unwrap_or("Unknown").to_owned())
}

#[component]
pub fn MediaDetailPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<Session>();
    let params = use_params_map();
    let mounted = use_mounted();
    let redirect: PendingRedirect = RwSignal::new(None);
    install_redirect(redirect, use_navigate());

    let id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));
    let detail = RwSignal::new(Detail::Loading);
    let delete_error = RwSignal::new(None::<String>);

    {
        let api = api.clone();
        let session = session.clone();
        Effect::new(move || {
            let id = id.get();
            detail.set(Detail::Loading);
            #[cfg(feature = "hydrate")]
            {
                let api = api.clone();
                let session = session.clone();
                leptos::task::spawn_local(async move {
                    let outcome = detail_from(api.get_media(&id).await);
                    let rejected = outcome == Detail::Unauthorized;
                    detail.set(outcome);
                    if rejected {
                        crate::util::auth::force_logout(&api, &session, redirect).await;
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (&api, &session, id);
        });
    }

    let is_owner = {
        let session = session.clone();
        move || {
            mounted.get()
                && detail.with(|d| match d {
                    Detail::Loaded(post) => session.claims().is_some_and(|claims| claims.owns(post)),
                    _ => false,
                })
        }
    };

    let on_delete = move |_: leptos::ev::MouseEvent| {
        if !crate::util::browser::confirm(DELETE_CONFIRM) {
            return;
        }
        delete_error.set(None);
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let session = session.clone();
            let id = id.get_untracked();
            leptos::task::spawn_local(async move {
                match api.delete_media(&id).await {
                    Ok(()) => redirect.set(Some(crate::util::guard::HOME_PATH.to_owned())),
                    Err(e) if e.is_unauthorized() => {
                        crate::util::auth::force_logout(&api, &session, redirect).await;
                    }
                    Err(e) => {
                        leptos::logging::error!("media delete failed: {e}");
                        delete_error.set(Some(e.message_or(DELETE_FAILED)));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&api, &session);
    };

    let body = move || match detail.get() {
        Detail::Loading | Detail::Unauthorized => view! { <Spinner full_height=true /> }.into_any(),
        Detail::Failed(message) => view! { <p class="media-detail__status media-detail__status--error">{message}</p> }.into_any(),
        Detail::NotFound => view! { <p class="media-detail__status">{NOT_FOUND}</p> }.into_any(),
        Detail::Loaded(post) => {
            let edit_href = format!("/edit/{}", post.id);
            let title = display_title(&post.title).to_owned();
            let alt = title.clone();
            let date = display_date(post.created_at.as_deref());
            let owner = posted_by(&post);
            let is_owner = is_owner.clone();
            let on_delete = on_delete.clone();
            view! {
                <article class="media-detail__card">
                    <Show when=is_owner>
                        <div class="media-detail__actions">
                            <A href=edit_href.clone() attr:class="media-detail__edit">"Edit"</A>
                            <button class="media-detail__delete" type="button" on:click=on_delete.clone()>
                                "Delete"
                            </button>
                        </div>
                    </Show>
                    {post.image_url.clone().filter(|url| !url.trim().is_empty()).map(|src| {
                        view! {
                            <div class="media-detail__image">
                                <img src=src alt=alt />
                            </div>
                        }
                    })}
                    <div class="media-detail__body">
                        <h1 class="media-detail__title">{title}</h1>
                        <div class="media-detail__meta">
                            <span>{date}</span>
                            {owner.map(|name| view! { <span class="media-detail__owner">"Posted by: " {name}</span> })}
                        </div>
                        {post.description.clone().filter(|d| !d.is_empty()).map(|description| {
                            view! { <p class="media-detail__description">{description}</p> }
                        })}
                        {(!post.content.is_empty()).then(|| {
                            view! { <div class="media-detail__content" inner_html=post.content.clone()></div> }
                        })}
                    </div>
                </article>
            }
            .into_any()
        }
    };

    view! {
        <div class="media-detail">
            <A href="/home" attr:class="media-detail__back">"\u{2190} Back to Home"</A>
            {move || delete_error.get().map(|message| view! { <Alert message=message /> })}
            {body}
        </div>
    }
}
