//! Edit page (`/edit/:id`, signed-in only).
//!
//! Pre-fills the form from `GET /media/:id`. Submitting sends the same
//! multipart fields as a new post via `PUT /media/:id`; leaving the file
//! empty keeps the stored media.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::alert::Alert;
use crate::components::media_fields::MediaFields;
use crate::net::api::ApiClient;
use crate::state::session::Session;
use crate::util::auth::{PendingRedirect, install_redirect};
use crate::util::browser::go_back;
use crate::util::upload::{MediaDraft, PendingUpload};

const LOAD_FAILED: &str = "Failed to load blog post";
const UPDATE_FAILED: &str = "Failed to update blog post. Please try again.";

#[component]
pub fn EditPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<Session>();
    let params = use_params_map();
    let redirect: PendingRedirect = RwSignal::new(None);
    install_redirect(redirect, use_navigate());

    let id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));
    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let upload = RwSignal::new_local(None::<PendingUpload>);
    let preview = RwSignal::new(None::<String>);
    let current_image = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    {
        let api = api.clone();
        let session = session.clone();
        Effect::new(move || {
            let id = id.get();
            #[cfg(feature = "hydrate")]
            {
                let api = api.clone();
                let session = session.clone();
                leptos::task::spawn_local(async move {
                    match api.get_media(&id).await {
                        Ok(post) => {
                            title.set(post.title);
                            content.set(post.content);
                            current_image.set(post.image_url.filter(|url| !url.trim().is_empty()));
                        }
                        Err(e) if e.is_unauthorized() => {
                            crate::util::auth::force_logout(&api, &session, redirect).await;
                        }
                        Err(e) => {
                            leptos::logging::error!("load {id} for edit failed: {e}");
                            error.set(Some(LOAD_FAILED.to_owned()));
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (&api, &session, id);
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(None);
        let draft = match MediaDraft::validated(title.get_untracked(), content.get_untracked(), upload.get_untracked()) {
            Ok(draft) => draft,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        let id = id.get_untracked();

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let session = session.clone();
            leptos::task::spawn_local(async move {
                match api.update_media(&id, &draft).await {
                    Ok(()) => redirect.set(Some(format!("/media/{id}"))),
                    Err(e) if e.is_unauthorized() => {
                        crate::util::auth::force_logout(&api, &session, redirect).await;
                    }
                    Err(e) => {
                        leptos::logging::error!("update {id} failed: {e}");
                        error.set(Some(e.message_or(UPDATE_FAILED)));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, &session, draft, id);
            busy.set(false);
        }
    };

    view! {
        <div class="media-form-page">
            <div class="media-form-page__card">
                <h1 class="media-form-page__title">"Edit Blog Post"</h1>
                {move || error.get().map(|message| view! { <Alert message=message /> })}
                <form class="media-form" on:submit=on_submit novalidate=true>
                    <MediaFields
                        title=title
                        content=content
                        upload=upload
                        preview=preview
                        current_image=current_image
                        file_label="Update Media (Optional)"
                    />
                    <div class="media-form__actions">
                        <button
                            class="media-form__cancel"
                            type="button"
                            disabled=move || busy.get()
                            on:click=move |_| go_back()
                        >
                            "Cancel"
                        </button>
                        <button class="media-form__submit" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Updating..." } else { "Update Post" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
