//! Thin wrappers over `window` used by pages.
//!
//! Each helper is a no-op (or the safe answer) outside the browser build.

/// Native confirm dialog. Declines when no window is available.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

/// Full page reload; the dashboard's Retry action.
pub fn reload() {
    #[cfg(feature = "hydrate")]
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().reload() {
            leptos::logging::warn!("reload failed: {e:?}");
        }
    }
}

pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Step back in session history (form Cancel buttons).
pub fn go_back() {
    #[cfg(feature = "hydrate")]
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        let _ = history.back();
    }
}
