//! Registration page (`/register`, guests only).

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::alert::Alert;
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::RegisterRequest;
use crate::util::auth::{PendingRedirect, install_redirect};
use crate::util::validation::{FieldErrors, validate_registration};

const REGISTER_FAILED: &str = "Registration failed. Please try again.";

/// Where a successful registration lands.
pub const REGISTERED_PATH: &str = "/login?registered=1";

fn failure_message(err: &ApiError) -> String {
    err.message_or(REGISTER_FAILED)
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let redirect: PendingRedirect = RwSignal::new(None);
    install_redirect(redirect, use_navigate());

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let server_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

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
        let body = RegisterRequest {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let found = validate_registration(&body.username, &body.email, &body.password);
        errors.set(found.clone());
        if !found.is_empty() {
            return;
        }
        server_error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.register(&body).await {
                    Ok(()) => redirect.set(Some(REGISTERED_PATH.to_owned())),
                    Err(e) => {
                        leptos::logging::warn!("registration failed: {e}");
                        server_error.set(Some(failure_message(&e)));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, body);
            busy.set(false);
        }
    };

    let field_error = move |field: &'static str| {
        move || errors.with(|e| e.get(field).map(|message| view! { <p class="auth-form__error">{*message}</p> }))
    };
    let invalid = move |field: &'static str| move || errors.with(|e| e.contains_key(field));

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"SignUp"</h1>
                {move || server_error.get().map(|message| view! { <Alert message=message /> })}
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <label class="auth-form__label" for="username">"Username"</label>
                    <input
                        id="username"
                        class="auth-form__input"
                        class:auth-form__input--invalid=invalid("username")
                        type="text"
                        placeholder="Enter username"
                        prop:value=move || username.get()
                        on:input=move |ev| edit("username", username, event_target_value(&ev))
                    />
                    {field_error("username")}
                    <label class="auth-form__label" for="email">"Email"</label>
                    <input
                        id="email"
                        class="auth-form__input"
                        class:auth-form__input--invalid=invalid("email")
                        type="email"
                        placeholder="Enter email"
                        prop:value=move || email.get()
                        on:input=move |ev| edit("email", email, event_target_value(&ev))
                    />
                    {field_error("email")}
                    <label class="auth-form__label" for="password">"Password"</label>
                    <input
                        id="password"
                        class="auth-form__input"
                        class:auth-form__input--invalid=invalid("password")
                        type="password"
                        placeholder="Enter password"
                        prop:value=move || password.get()
                        on:input=move |ev| edit("password", password, event_target_value(&ev))
                    />
                    {field_error("password")}
                    <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing up..." } else { "Sign Up" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already have an account? " <A href="/login">"Login"</A>
                </p>
            </div>
        </div>
    }
}
