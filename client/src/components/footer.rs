//! Site footer.

use leptos::prelude::*;

use crate::util::format::{copyright_line, current_year};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p class="footer__copy">{copyright_line(current_year())}</p>
        </footer>
    }
}
