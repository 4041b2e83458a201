//! Inline banners for errors and notices.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertTone {
    #[default]
    Error,
    Success,
}

impl AlertTone {
    fn class(self) -> &'static str {
        match self {
            Self::Error => "alert alert--error",
            Self::Success => "alert alert--success",
        }
    }
}

/// A banner with an optional Retry button.
#[component]
pub fn Alert(
    #[prop(into)] message: String,
    #[prop(optional)] tone: AlertTone,
    #[prop(optional)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    let role = if tone == AlertTone::Error { "alert" } else { "status" };
    view! {
        <div class=tone.class() role=role>
            <p class="alert__message">{message}</p>
            {on_retry.map(|retry| {
                view! {
                    <button class="alert__retry" type="button" on:click=move |_| retry.run(())>
                        "Retry"
                    </button>
                }
            })}
        </div>
    }
}
