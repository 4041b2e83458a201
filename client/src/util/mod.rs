//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic. Everything except `browser`, `mounted` and the preview reader in
//! `upload` is plain Rust, tested natively.

pub mod auth;
pub mod browser;
pub mod debounce;
pub mod format;
pub mod guard;
pub mod mounted;
pub mod token;
pub mod upload;
pub mod validation;
