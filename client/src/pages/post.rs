//! New post page (`/post`, signed-in only).

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::alert::Alert;
use crate::components::media_fields::MediaFields;
use crate::net::api::ApiClient;
use crate::state::session::Session;
use crate::util::auth::{PendingRedirect, install_redirect};
use crate::util::browser::go_back;
use crate::util::upload::{MediaDraft, PendingUpload};

const POST_FAILED: &str = "Failed to post media. Please try again.";

#[component]
pub fn PostPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<Session>();
    let redirect: PendingRedirect = RwSignal::new(None);
    install_redirect(redirect, use_navigate());

    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let upload = RwSignal::new_local(None::<PendingUpload>);
    let preview = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

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

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let session = session.clone();
            leptos::task::spawn_local(async move {
                match api.create_media(&draft).await {
                    Ok(created) => redirect.set(Some(format!("/media/{}", created.id))),
                    Err(e) if e.is_unauthorized() => {
                        crate::util::auth::force_logout(&api, &session, redirect).await;
                    }
                    Err(e) => {
                        leptos::logging::error!("create media failed: {e}");
                        error.set(Some(e.message_or(POST_FAILED)));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, &session, draft);
            busy.set(false);
        }
    };

    view! {
        <div class="media-form-page">
            <div class="media-form-page__card">
                <h1 class="media-form-page__title">"Create New Post"</h1>
                {move || error.get().map(|message| view! { <Alert message=message /> })}
                <form class="media-form" on:submit=on_submit novalidate=true>
                    <MediaFields
                        title=title
                        content=content
                        upload=upload
                        preview=preview
                        file_label="Upload Media (Optional)"
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
                            {move || if busy.get() { "Posting..." } else { "Post" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
