//! Cancellable time-windowed dispatch.
//!
//! DESIGN
//! ======
//! A `Debouncer` is a generation counter. Every `arm` bumps the generation
//! and hands back a `Ticket`; once its delay has elapsed a ticket only fires
//! if no later `arm` or `cancel` happened meanwhile. The waiting itself is
//! injected (`settle`) so the dispatch rule can be tested without timers;
//! `schedule` wires it to `gloo-timers` in the browser.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Quiet period after the last keystroke before a search is committed.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Handle for one armed dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Debug, Default)]
pub struct Debouncer {
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    /// Supersede any pending dispatch and start a new one.
    pub fn arm(&self) -> Ticket {
        Ticket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Drop any pending dispatch without starting a new one.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Wait via `sleep`, then report whether `ticket` is still the latest.
    pub async fn settle<F, Fut>(&self, ticket: Ticket, sleep: F) -> bool
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        sleep().await;
        self.is_current(ticket)
    }

    /// Run `action` after `delay` unless superseded in the meantime.
    #[cfg(feature = "hydrate")]
    pub fn schedule<F>(&self, delay: Duration, action: F)
    where
        F: FnOnce() + 'static,
    {
        let ticket = self.arm();
        let debouncer = self.clone();
        leptos::task::spawn_local(async move {
            if debouncer.settle(ticket, || gloo_timers::future::sleep(delay)).await {
                action();
            }
        });
    }
}
