//! Hydration-safe "has the client mounted" flag.
//!
//! Effects never run during server rendering and run only after hydration
//! in the browser, so anything gated on this signal renders identically on
//! both sides of the first pass.

use leptos::prelude::*;

pub fn use_mounted() -> ReadSignal<bool> {
    let (mounted, set_mounted) = signal(false);
    Effect::new(move || set_mounted.set(true));
    mounted
}
