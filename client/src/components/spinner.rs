//! Loading indicator.

use leptos::prelude::*;

#[component]
pub fn Spinner(#[prop(optional)] full_height: bool) -> impl IntoView {
    view! {
        <div class="spinner" class:spinner--full=full_height role="status" aria-label="Loading">
            <div class="spinner__ring"></div>
        </div>
    }
}
