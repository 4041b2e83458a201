//! Top navigation bar.
//!
//! Shows the visitor's name (decoded from the session token) and a Logout
//! button when signed in, Login/Signup links otherwise. The signed-in
//! section waits for mount so server and client markup agree.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::state::session::Session;
use crate::util::auth::{PendingRedirect, install_redirect};
use crate::util::mounted::use_mounted;

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<Session>();
    let api = expect_context::<ApiClient>();
    let mounted = use_mounted();
    let redirect: PendingRedirect = RwSignal::new(None);
    install_redirect(redirect, use_navigate());

    let signed_in = {
        let session = session.clone();
        move || mounted.get() && session.is_authenticated()
    };
    let username = {
        let session = session.clone();
        move || {
            session
                .claims()
                .map_or_else(|| "User".to_owned(), |claims| claims.display_name().to_owned())
        }
    };

    let on_logout = move |_: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let session = session.clone();
            leptos::task::spawn_local(async move {
                crate::util::auth::force_logout(&api, &session, redirect).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&api, &session);
    };

    view! {
        <nav class="nav-bar">
            <div class="nav-bar__inner">
                <A href="/" attr:class="nav-bar__brand">"DataHex"</A>
                <ul class="nav-bar__links">
                    <li><A href="/home">"Home"</A></li>
                    <li><A href="/dashboard">"Dashboard"</A></li>
                    <Show
                        when=signed_in
                        fallback=|| {
                            view! {
                                <li>
                                    <A href="/login" attr:class="nav-bar__button nav-bar__button--login">"Login"</A>
                                </li>
                                <li>
                                    <A href="/register" attr:class="nav-bar__button nav-bar__button--signup">"Signup"</A>
                                </li>
                            }
                        }
                    >
                        <li class="nav-bar__user">
                            <span class="nav-bar__user-icon" aria-hidden="true">"\u{1f464}"</span>
                            <span class="nav-bar__username">{username.clone()}</span>
                        </li>
                        <li>
                            <button class="nav-bar__button nav-bar__button--logout" type="button" on:click=on_logout.clone()>
                                "Logout"
                            </button>
                        </li>
                    </Show>
                </ul>
            </div>
        </nav>
    }
}
