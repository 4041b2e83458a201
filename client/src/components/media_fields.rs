//! Title, content and file fields shared by the post and edit pages.
//!
//! DESIGN
//! ======
//! Pages own the `<form>`, its submit handler and all signals; this
//! component only binds inputs to those signals. Picking an image starts an
//! asynchronous data-URL read whose result lands in `preview`. Remove is
//! purely client-side: it forgets the selection, the preview and the
//! current image, and the next submit simply omits the file.

use leptos::prelude::*;

use crate::util::upload::{ACCEPT, PendingUpload};

pub const TITLE_MAX_LEN: usize = 100;

#[component]
pub fn MediaFields(
    title: RwSignal<String>,
    content: RwSignal<String>,
    upload: RwSignal<Option<PendingUpload>, LocalStorage>,
    preview: RwSignal<Option<String>>,
    /// Image already attached to the post being edited.
    #[prop(optional)]
    current_image: Option<RwSignal<Option<String>>>,
    #[prop(into)] file_label: String,
) -> impl IntoView {
    let file_ref = NodeRef::<leptos::html::Input>::new();

    let shown_image = move || preview.get().or_else(|| current_image.and_then(|img| img.get()));
    let selected_name = move || {
        upload.with(|u| u.as_ref().filter(|u| !u.is_previewable()).map(|u| u.name.clone()))
    };

    let on_file_change = move |_ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let Some(input) = file_ref.get_untracked() else {
                return;
            };
            let picked = PendingUpload::from_input(&input);
            preview.set(None);
            if let Some(picked) = picked.as_ref().filter(|p| p.is_previewable()) {
                crate::util::upload::read_preview(&picked.file, move |url| preview.set(Some(url)));
            }
            upload.set(picked);
        }
    };

    let on_remove = move |_: leptos::ev::MouseEvent| {
        upload.set(None);
        preview.set(None);
        if let Some(current_image) = current_image {
            current_image.set(None);
        }
        #[cfg(feature = "hydrate")]
        if let Some(input) = file_ref.get_untracked() {
            input.set_value("");
        }
    };

    view! {
        <div class="media-form__field">
            <label class="media-form__label" for="title">"Title"</label>
            <input
                id="title"
                class="media-form__input"
                type="text"
                placeholder="Enter your post title"
                maxlength=TITLE_MAX_LEN.to_string()
                prop:value=move || title.get()
                on:input=move |ev| title.set(event_target_value(&ev))
            />
        </div>
        <div class="media-form__field">
            <label class="media-form__label" for="content">"Content"</label>
            <textarea
                id="content"
                class="media-form__textarea"
                rows="8"
                placeholder="Write your content here..."
                prop:value=move || content.get()
                on:input=move |ev| content.set(event_target_value(&ev))
            ></textarea>
        </div>
        <div class="media-form__field">
            <label class="media-form__label" for="file">{file_label}</label>
            <Show when=move || shown_image().is_some()>
                <div class="media-form__preview">
                    <img class="media-form__preview-image" src=shown_image alt="Selected media" />
                    <button class="media-form__remove" type="button" on:click=on_remove>
                        "Remove"
                    </button>
                </div>
            </Show>
            <input
                id="file"
                class="media-form__file"
                type="file"
                accept=ACCEPT
                node_ref=file_ref
                on:change=on_file_change
            />
            {move || selected_name().map(|name| view! { <p class="media-form__file-name">{name}</p> })}
        </div>
    }
}
