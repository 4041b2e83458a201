//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome (nav bar, footer), route guards and the
//! building blocks shared between pages. They read `Session` and `ApiClient`
//! from context; page-specific orchestration stays in `pages`.

pub mod alert;
pub mod footer;
pub mod media_fields;
pub mod nav_bar;
pub mod pagination;
pub mod post_card;
pub mod route_guard;
pub mod spinner;
