//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `gallery`, `posts`) so pages depend
//! on small focused models whose transitions are plain methods, testable
//! without a browser.

pub mod gallery;
pub mod posts;
pub mod session;
