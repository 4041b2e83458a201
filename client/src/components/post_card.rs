//! Cards for media posts: the gallery tile and the dashboard card.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::MediaPost;
use crate::util::format::{display_date, display_title};

/// Gallery tile: thumbnail, title, date and a View link.
///
/// A missing image or one that fails to load shows a "Media Preview"
/// placeholder instead.
#[component]
pub fn MediaCard(post: MediaPost) -> impl IntoView {
    let broken = RwSignal::new(false);
    let image = post.image_url.clone().filter(|url| !url.trim().is_empty());
    let title = display_title(&post.title).to_owned();
    let alt = if post.title.trim().is_empty() { "Media item".to_owned() } else { post.title.clone() };
    let date = display_date(post.created_at.as_deref());
    let href = format!("/media/{}", post.id);

    view! {
        <div class="media-card">
            <div class="media-card__thumb">
                {move || match image.clone() {
                    Some(src) if !broken.get() => {
                        view! {
                            <img
                                class="media-card__image"
                                src=src
                                alt=alt.clone()
                                on:error=move |_| broken.set(true)
                            />
                        }
                            .into_any()
                    }
                    _ => view! { <MediaPlaceholder /> }.into_any(),
                }}
            </div>
            <div class="media-card__body">
                <h3 class="media-card__title">{title}</h3>
                <div class="media-card__meta">
                    <span class="media-card__date">{date}</span>
                    <A href=href attr:class="media-card__view">"View"</A>
                </div>
            </div>
        </div>
    }
}

#[component]
fn MediaPlaceholder() -> impl IntoView {
    view! {
        <div class="media-card__placeholder">
            <span>"Media Preview"</span>
        </div>
    }
}

/// Dashboard card with Edit and Delete actions.
#[component]
pub fn PostCard(
    post: MediaPost,
    #[prop(into)] deleting: Signal<bool>,
    on_edit: Callback<String>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let edit_id = post.id.clone();
    let delete_id = post.id.clone();

    view! {
        <div class="post-card">
            <div class="post-card__body">
                <h3 class="post-card__title">{post.title}</h3>
                <p class="post-card__excerpt">{post.content}</p>
            </div>
            <div class="post-card__actions">
                <button
                    class="post-card__edit"
                    type="button"
                    disabled=move || deleting.get()
                    on:click=move |_| on_edit.run(edit_id.clone())
                >
                    "Edit"
                </button>
                <button
                    class="post-card__delete"
                    type="button"
                    disabled=move || deleting.get()
                    on:click=move |_| on_delete.run(delete_id.clone())
                >
                    {move || if deleting.get() { "Deleting..." } else { "Delete" }}
                </button>
            </div>
        </div>
    }
}
