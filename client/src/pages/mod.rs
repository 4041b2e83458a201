//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, submitting,
//! navigation) and delegates rendering details to `components`. Access
//! control is applied around pages by the route guards in `app`.

pub mod dashboard;
pub mod edit;
pub mod home;
pub mod login;
pub mod media_detail;
pub mod post;
pub mod register;
