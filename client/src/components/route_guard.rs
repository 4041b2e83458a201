//! Route guard wrappers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ProtectedRoute` and `AuthRoute` wrap a page and apply
//! `util::guard::decide` to the session on every render. Redirects replace
//! the current history entry so Back does not bounce through the guard.
//!
//! Until the client has mounted, both render a spinner: the server has no
//! access to the browser's token, so deciding earlier would produce markup
//! the hydration pass cannot match.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::components::spinner::Spinner;
use crate::state::session::Session;
use crate::util::guard::{Access, GuardDecision, decide};
use crate::util::mounted::use_mounted;

/// Renders children only for signed-in visitors; others go to `/login`.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    guarded(Access::Authenticated, children)
}

/// Renders children only for guests; signed-in visitors go to `/dashboard`.
#[component]
pub fn AuthRoute(children: ChildrenFn) -> impl IntoView {
    guarded(Access::GuestOnly, children)
}

fn guarded(access: Access, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<Session>();
    let mounted = use_mounted();

    move || {
        if !mounted.get() {
            return view! { <Spinner full_height=true /> }.into_any();
        }
        match decide(access, session.is_authenticated()) {
            GuardDecision::Render => children().into_any(),
            GuardDecision::Redirect(path) => {
                let options = NavigateOptions { replace: true, ..NavigateOptions::default() };
                view! { <Redirect path=path options=options /> }.into_any()
            }
        }
    }
}
