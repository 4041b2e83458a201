//! File selection for the post and edit forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! The selected `File` travels to `ApiClient::create_media`/`update_media`
//! inside a `MediaDraft`. Image files additionally get a data-URL preview,
//! read asynchronously with `FileReader`. There is no size or type check
//! beyond the input's `accept` filter.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use crate::util::validation::validate_post;

/// Value for the file input's `accept` attribute.
pub const ACCEPT: &str = "image/*,video/*";

/// A file picked in the form, not yet uploaded.
#[derive(Clone, Debug)]
pub struct PendingUpload {
    pub name: String,
    pub mime: String,
    #[cfg(feature = "hydrate")]
    pub file: web_sys::File,
}

impl PendingUpload {
    /// Only images get an inline preview.
    pub fn is_previewable(&self) -> bool {
        is_previewable(&self.mime)
    }

    /// First file selected in `input`, if any.
    #[cfg(feature = "hydrate")]
    pub fn from_input(input: &web_sys::HtmlInputElement) -> Option<Self> {
        let file = input.files()?.get(0)?;
        Some(Self { name: file.name(), mime: file.type_(), file })
    }
}

pub fn is_previewable(mime: &str) -> bool {
    mime.starts_with("image/")
}

/// Multipart payload for creating or updating a post.
#[derive(Clone, Debug)]
pub struct MediaDraft {
    pub title: String,
    pub content: String,
    pub upload: Option<PendingUpload>,
}

impl MediaDraft {
    /// Build a draft from form input, refusing blank titles or content.
    ///
    /// # Errors
    ///
    /// Returns the form banner message from `validate_post`.
    pub fn validated(title: String, content: String, upload: Option<PendingUpload>) -> Result<Self, &'static str> {
        validate_post(&title, &content)?;
        Ok(Self { title, content, upload })
    }
}

/// Read `file` as a data URL and hand it to `on_load`. Failures are logged
/// and leave the preview empty.
#[cfg(feature = "hydrate")]
pub fn read_preview<F>(file: &web_sys::File, on_load: F)
where
    F: FnOnce(String) + 'static,
{
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let reader = match web_sys::FileReader::new() {
        Ok(reader) => reader,
        Err(e) => {
            leptos::logging::warn!("preview: FileReader unavailable: {e:?}");
            return;
        }
    };
    let handle = reader.clone();
    let callback = Closure::once_into_js(move || match handle.result().ok().and_then(|v| v.as_string()) {
        Some(url) => on_load(url),
        None => leptos::logging::warn!("preview: reader produced no data URL"),
    });
    reader.set_onload(Some(callback.unchecked_ref()));
    if let Err(e) = reader.read_as_data_url(file) {
        leptos::logging::warn!("preview: read failed: {e:?}");
    }
}
