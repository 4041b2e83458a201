//! Gallery page: search, paginated grid, call to action.
//!
//! SYSTEM CONTEXT
//! ==============
//! The URL query (`page`, `limit`, `title`) drives everything. An effect
//! re-fetches `GET /media` whenever the parsed query changes; typing and
//! paging only ever rewrite the URL.
//!
//! DESIGN
//! ======
//! The search box updates immediately. Each keystroke re-arms a
//! `Debouncer`; only the last keystroke inside the quiet window commits
//! `page=1&limit=<current>&title=<text>`. Leaving the page cancels any
//! pending commit, and so does paging. Back/Forward re-syncs the box from
//! the URL.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::alert::Alert;
use crate::components::pagination::Pagination;
use crate::components::post_card::MediaCard;
use crate::components::spinner::Spinner;
use crate::net::api::ApiClient;
use crate::state::gallery::{GalleryQuery, GalleryState, empty_message};
use crate::state::session::Session;
use crate::util::auth::{PendingRedirect, install_redirect};
use crate::util::browser::scroll_to_top;
use crate::util::debounce::Debouncer;

const FETCH_FAILED: &str = "Failed to fetch media items";

#[component]
pub fn HomePage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<Session>();
    let query_map = use_query_map();
    let redirect: PendingRedirect = RwSignal::new(None);
    install_redirect(redirect, use_navigate());

    let query = Memo::new(move |_| query_map.with(|params| GalleryQuery::from_lookup(|key| params.get(key))));
    let state = RwSignal::new(GalleryState::default());
    let search = RwSignal::new(query.get_untracked().title.unwrap_or_default());

    let debouncer = Debouncer::default();
    on_cleanup({
        let debouncer = debouncer.clone();
        move || debouncer.cancel()
    });

    // Back/Forward rewrites the query without touching the input.
    Effect::new(move || {
        if let Some(text) = query.with(|q| search.with_untracked(|typed| q.resync_search(typed))) {
            search.set(text);
        }
    });

    Effect::new(move || {
        let requested = query.get();
        state.update(GalleryState::begin_fetch);
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let session = session.clone();
            leptos::task::spawn_local(async move {
                match api.list_media(&requested).await {
                    Ok(page) => state.update(|s| s.apply_page(page, &requested)),
                    Err(e) => {
                        leptos::logging::error!("gallery fetch failed: {e}");
                        state.update(|s| s.apply_error(e.message_or(FETCH_FAILED)));
                        if e.is_unauthorized() {
                            crate::util::auth::force_logout(&api, &session, redirect).await;
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&api, &session, requested);
    });

    let on_search = {
        let debouncer = debouncer.clone();
        move |ev: leptos::ev::Event| {
            let text = event_target_value(&ev);
            search.set(text.clone());
            #[cfg(feature = "hydrate")]
            debouncer.schedule(crate::util::debounce::SEARCH_DEBOUNCE, move || {
                let next = query.get_untracked().with_search(&text);
                redirect.set(Some(next.href()));
            });
            #[cfg(not(feature = "hydrate"))]
            let _ = (&debouncer, text);
        }
    };

    let on_page = Callback::new(move |page: u32| {
        debouncer.cancel();
        redirect.set(Some(query.get_untracked().with_page(page).href()));
        scroll_to_top();
    });

    let gallery = move || {
        let current = state.get();
        if current.loading {
            return view! { <Spinner /> }.into_any();
        }
        if let Some(message) = current.error.clone() {
            return view! { <Alert message=message /> }.into_any();
        }
        if current.is_empty() {
            let searching = query.with(|q| q.title.is_some());
            return view! {
                <div class="gallery__empty">
                    <p>{empty_message(searching)}</p>
                </div>
            }
            .into_any();
        }
        let pagination = current.pagination;
        view! {
            <div class="gallery__grid">
                {current.items.into_iter().map(|post| view! { <MediaCard post=post /> }).collect_view()}
            </div>
            <Pagination info=Signal::derive(move || pagination) on_page=on_page />
        }
        .into_any()
    };

    view! {
        <div class="home">
            <section class="home__hero">
                <h1>"Welcome to Our Media Platform"</h1>
                <p>"Discover amazing media content and creative works"</p>
            </section>
            <section class="home__search">
                <input
                    class="home__search-input"
                    type="text"
                    placeholder="Search by title..."
                    prop:value=move || search.get()
                    on:input=on_search
                />
            </section>
            <section class="gallery">
                <h2 class="gallery__heading">"EXPLORE"</h2>
                {gallery}
            </section>
            <section class="home__cta">
                <h2>"Ready to share your media?"</h2>
                <p>"Join our community and showcase your creative work"</p>
                <A href="/post" attr:class="home__cta-button">"Upload Your Media"</A>
            </section>
        </div>
    }
}
