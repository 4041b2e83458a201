//! Gallery pagination controls.
//!
//! Hidden entirely with a single page. Otherwise Previous, one button per
//! page with the current one marked, and Next.

use leptos::prelude::*;

use crate::state::gallery::PaginationInfo;

#[component]
pub fn Pagination(#[prop(into)] info: Signal<PaginationInfo>, on_page: Callback<u32>) -> impl IntoView {
    view! {
        <Show when=move || info.get().shows_controls()>
            <nav class="pagination" aria-label="Pagination">
                <button
                    class="pagination__step"
                    type="button"
                    disabled=move || !info.get().has_previous()
                    on:click=move |_| on_page.run(info.get_untracked().page.saturating_sub(1))
                >
                    "Previous"
                </button>
                {move || {
                    info.get()
                        .page_buttons()
                        .into_iter()
                        .map(|button| {
                            view! {
                                <button
                                    class="pagination__page"
                                    class:pagination__page--current=button.current
                                    type="button"
                                    aria-current=button.current.then_some("page")
                                    on:click=move |_| on_page.run(button.number)
                                >
                                    {button.number}
                                </button>
                            }
                        })
                        .collect_view()
                }}
                <button
                    class="pagination__step"
                    type="button"
                    disabled=move || !info.get().has_next()
                    on:click=move |_| on_page.run(info.get_untracked().page + 1)
                >
                    "Next"
                </button>
            </nav>
        </Show>
    }
}
