//! Gallery listing state and its URL query representation.
//!
//! DESIGN
//! ======
//! The query string (`page`, `limit`, `title`) is the single source of truth
//! for what the gallery shows: it is bookmarkable, survives reloads, and its
//! changes are the only thing that triggers a re-fetch. `GalleryQuery`
//! parses and renders that string; `GalleryState` holds what the last fetch
//! returned.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use crate::net::types::{MediaPage, MediaPost};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 8;

const EMPTY_MESSAGE: &str = "No media items found";
const EMPTY_SEARCH_MESSAGE: &str = "No media items found matching your search";

/// Gallery view parameters as carried in the URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryQuery {
    pub page: u32,
    pub limit: u32,
    pub title: Option<String>,
}

impl Default for GalleryQuery {
    fn default() -> Self {
        Self { page: DEFAULT_PAGE, limit: DEFAULT_PAGE_SIZE, title: None }
    }
}

impl GalleryQuery {
    /// Build from a query-parameter lookup. Missing, unparsable or zero
    /// numbers fall back to defaults; blank titles are dropped.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            page: parse_positive(lookup("page").as_deref()).unwrap_or(DEFAULT_PAGE),
            limit: parse_positive(lookup("limit").as_deref()).unwrap_or(DEFAULT_PAGE_SIZE),
            title: normalize_title(lookup("title").as_deref()),
        }
    }

    /// New search from the first page, keeping the page size.
    pub fn with_search(&self, text: &str) -> Self {
        Self { page: DEFAULT_PAGE, limit: self.limit, title: normalize_title(Some(text)) }
    }

    /// Same search and page size on another page.
    pub fn with_page(&self, page: u32) -> Self {
        Self { page: page.max(1), ..self.clone() }
    }

    /// `page=..&limit=..[&title=..]`, percent-encoded.
    pub fn to_query_string(&self) -> String {
        let mut out = format!("page={}&limit={}", self.page, self.limit);
        if let Some(title) = &self.title {
            out.push_str("&title=");
            out.push_str(&urlencoding::encode(title));
        }
        out
    }

    /// Text the search box should switch to for this query, or `None` when
    /// `typed` already matches the URL title.
    pub fn resync_search(&self, typed: &str) -> Option<String> {
        let title = self.title.as_deref().unwrap_or_default();
        (typed.trim() != title).then(|| title.to_owned())
    }

    /// Gallery route carrying this query.
    pub fn href(&self) -> String {
        format!("/home?{}", self.to_query_string())
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u32> {
    raw?.trim().parse::<u32>().ok().filter(|n| *n > 0)
}

fn normalize_title(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim).filter(|t| !t.is_empty()).map(str::to_owned)
}

/// One numbered pagination button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageButton {
    pub number: u32,
    pub current: bool,
}

/// Pagination metadata returned alongside a gallery page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaginationInfo {
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
    pub total_results: u64,
}

impl Default for PaginationInfo {
    fn default() -> Self {
        Self { page: DEFAULT_PAGE, limit: DEFAULT_PAGE_SIZE, total_pages: 1, total_results: 0 }
    }
}

impl PaginationInfo {
    /// Controls are only worth rendering with more than one page.
    pub fn shows_controls(&self) -> bool {
        self.total_pages > 1
    }

    /// Exactly `total_pages` buttons, with the current page marked.
    pub fn page_buttons(&self) -> Vec<PageButton> {
        (1..=self.total_pages)
            .map(|number| PageButton { number, current: number == self.page })
            .collect()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Result of the most recent gallery fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryState {
    pub items: Vec<MediaPost>,
    pub pagination: PaginationInfo,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self { items: Vec::new(), pagination: PaginationInfo::default(), loading: true, error: None }
    }
}

impl GalleryState {
    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Replace items and pagination with a fetched page.
    pub fn apply_page(&mut self, page: MediaPage, requested: &GalleryQuery) {
        self.pagination = PaginationInfo {
            page: if page.page == 0 { requested.page } else { page.page },
            limit: if page.limit == 0 { requested.limit } else { page.limit },
            total_pages: page.total_pages,
            total_results: page.total_results,
        };
        self.items = page.results;
        self.loading = false;
        self.error = None;
    }

    pub fn apply_error(&mut self, message: String) {
        self.items.clear();
        self.loading = false;
        self.error = Some(message);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty() || self.pagination.total_results == 0
    }
}

/// Empty-state text, depending on whether a search is active.
pub fn empty_message(searching: bool) -> &'static str {
    if searching { EMPTY_SEARCH_MESSAGE } else { EMPTY_MESSAGE }
}
