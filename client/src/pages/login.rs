//! Login page (`/login`, guests only).
//!
//! Field errors and the server error clear as soon as the user edits a
//! field. On success the token goes into the session; `AuthRoute` then
//! re-renders and sends the visitor on to `/dashboard`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

use crate::components::alert::{Alert, AlertTone};
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::LoginRequest;
use crate::state::session::Session;
use crate::util::validation::{FieldErrors, validate_login};

const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";
const REGISTERED_NOTICE: &str = "Registration successful. Please log in.";

fn failure_message(err: &ApiError) -> String {
    err.message_or(LOGIN_FAILED)
}

/// `?registered=1` marks a redirect from a successful registration.
fn just_registered(flag: Option<&str>) -> bool {
    flag == Some("1")
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<Session>();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let server_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let registered = move || query.with(|q| just_registered(q.get("registered").as_deref()));

    let edit = move |field: &'static str, target: RwSignal<String>, value: String| {
        target.set(value);
        errors.update(|e| {
            e.remove(field);
        });
        server_error.set(None);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        let found = validate_login(&email_value, &password_value);
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let session = session.clone();
            leptos::task::spawn_local(async move {
                let body = LoginRequest { email: email_value, password: password_value };
                match api.login(&body).await {
                    Ok(resp) => session.sign_in(&resp.token),
                    Err(e) => {
                        leptos::logging::warn!("login failed: {e}");
                        server_error.set(Some(failure_message(&e)));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, &session, LoginRequest { email: email_value, password: password_value });
            busy.set(false);
        }
    };

    let field_error = move |field: &'static str| {
        move || errors.with(|e| e.get(field).map(|message| view! { <p class="auth-form__error">{*message}</p> }))
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Login"</h1>
                <Show when=registered>
                    <Alert message=REGISTERED_NOTICE tone=AlertTone::Success />
                </Show>
                {move || server_error.get().map(|message| view! { <Alert message=message /> })}
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <label class="auth-form__label" for="email">"Email"</label>
                    <input
                        id="email"
                        class="auth-form__input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| edit("email", email, event_target_value(&ev))
                    />
                    {field_error("email")}
                    <label class="auth-form__label" for="password">"Password"</label>
                    <input
                        id="password"
                        class="auth-form__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| edit("password", password, event_target_value(&ev))
                    />
                    {field_error("password")}
                    <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Don't have an account? " <A href="/register">"Sign up"</A>
                </p>
            </div>
        </div>
    }
}
