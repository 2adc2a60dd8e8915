//! Paginated listing backing infinite-scroll pages.
//!
//! DESIGN
//! ======
//! `begin_next` is the single gate for page fetches: it hands out the next
//! page number only when no fetch is in flight and more pages exist, so
//! sentinel callbacks firing in bursts never overlap requests.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use contracts::Page;

#[derive(Clone, Debug, PartialEq)]
pub struct Listing<T> {
    pub items: Vec<T>,
    /// Last page successfully appended; `0` before the first fetch.
    pub page: u32,
    pub has_more: bool,
    pub loading_more: bool,
    pub error: Option<String>,
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self { items: Vec::new(), page: 0, has_more: true, loading_more: false, error: None }
    }
}

impl<T> Listing<T> {
    /// Claim the next page to fetch, or `None` if a fetch is running or the
    /// listing is exhausted.
    pub fn begin_next(&mut self) -> Option<u32> {
        if self.loading_more || !self.has_more {
            return None;
        }
        self.loading_more = true;
        self.error = None;
        Some(self.page + 1)
    }

    /// `true` when a visible sentinel should ask for another page: more pages
    /// exist, nothing is in flight, and the last fetch did not fail.
    #[must_use]
    pub fn wants_more(&self) -> bool {
        self.has_more && !self.loading_more && self.error.is_none()
    }

    /// Append a fetched page. Pages that do not follow the last one are dropped.
    pub fn finish(&mut self, page: Page<T>) {
        self.loading_more = false;
        if page.page != self.page + 1 {
            return;
        }
        self.has_more = page.has_more();
        self.page = page.page;
        self.items.extend(page.items);
    }

    /// Record a failed fetch; the same page can be retried.
    pub fn fail(&mut self, message: String) {
        self.loading_more = false;
        self.error = Some(message);
    }

    /// `true` before the first page arrived.
    #[must_use]
    pub fn is_initial_load(&self) -> bool {
        self.page == 0 && self.loading_more
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && !self.has_more
    }
}
