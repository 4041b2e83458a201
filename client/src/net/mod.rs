//! Networking modules for the media backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` mirrors the backend's JSON, `error` classifies failures, and
//! `api` owns the shared HTTP client every page calls through.

pub mod api;
pub mod error;
pub mod types;
