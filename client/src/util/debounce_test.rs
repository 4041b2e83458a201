use super::*;
use crate::state::gallery::GalleryQuery;

// =============================================================
// Ticket bookkeeping
// =============================================================

#[test]
fn latest_ticket_is_current() {
    let debouncer = Debouncer::default();
    let first = debouncer.arm();
    assert!(debouncer.is_current(first));
    let second = debouncer.arm();
    assert!(!debouncer.is_current(first));
    assert!(debouncer.is_current(second));
}

#[test]
fn cancel_invalidates_pending_ticket() {
    let debouncer = Debouncer::default();
    let ticket = debouncer.arm();
    debouncer.cancel();
    assert!(!debouncer.is_current(ticket));
}

#[test]
fn clones_share_generation() {
    let debouncer = Debouncer::default();
    let ticket = debouncer.arm();
    debouncer.clone().arm();
    assert!(!debouncer.is_current(ticket));
}

// =============================================================
// Search dispatch
// =============================================================

#[test]
fn rapid_keystrokes_dispatch_once_with_final_text() {
    let debouncer = Debouncer::default();
    let current = GalleryQuery { page: 3, limit: 12, title: None };
    let keystrokes = ["c", "ca", "cat", "cats"];

    // Every keystroke lands inside the quiet window, so all are armed
    // before any of their delays elapse.
    let armed: Vec<(Ticket, &str)> = keystrokes.iter().map(|text| (debouncer.arm(), *text)).collect();

    let dispatched: Vec<String> = futures::executor::block_on(async {
        let mut out = Vec::new();
        for (ticket, text) in armed {
            if debouncer.settle(ticket, || async {}).await {
                out.push(current.with_search(text).to_query_string());
            }
        }
        out
    });

    assert_eq!(dispatched, vec!["page=1&limit=12&title=cats".to_owned()]);
}

#[test]
fn keystrokes_spaced_beyond_window_each_dispatch() {
    let debouncer = Debouncer::default();
    let dispatched = futures::executor::block_on(async {
        let mut count = 0;
        for _ in 0..2 {
            let ticket = debouncer.arm();
            if debouncer.settle(ticket, || async {}).await {
                count += 1;
            }
        }
        count
    });
    assert_eq!(dispatched, 2);
}

#[test]
fn cancelled_search_never_dispatches() {
    let debouncer = Debouncer::default();
    let ticket = debouncer.arm();
    let fired = futures::executor::block_on(debouncer.settle(ticket, || {
        debouncer.cancel();
        async {}
    }));
    assert!(!fired);
}

#[test]
fn page_change_inside_window_drops_pending_search() {
    let debouncer = Debouncer::default();
    let current = GalleryQuery { page: 1, limit: 8, title: None };

    let keystroke = debouncer.arm();
    debouncer.cancel();
    let paged = current.with_page(2).to_query_string();

    let fired = futures::executor::block_on(debouncer.settle(keystroke, || async {}));
    assert!(!fired);
    assert_eq!(paged, "page=2&limit=8");
}
