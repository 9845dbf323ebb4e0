//! Pagination types
//!
//! State carried between page requests and the result of a fetch loop.

use crate::error::Error;

/// Result of processing one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPage {
    /// Follow this link next
    Continue {
        /// Absolute URL of the next page
        url: String,
    },
    /// No more pages
    Done,
}

impl NextPage {
    /// Create a continuation with a new URL
    pub fn with_url(url: impl Into<String>) -> Self {
        Self::Continue { url: url.into() }
    }

    /// Check if this is a continue result
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue { .. })
    }
}

/// Tracks pagination state during iteration
///
/// The loop is in `HAVE_NEXT_URL` while `next_url` is set and the fetched
/// count is below the limit; anything else is terminal.
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    /// Link to request next, `None` once the server stops supplying one
    pub next_url: Option<String>,
    /// Records accumulated so far
    pub fetched: usize,
    /// Pages fetched so far
    pub pages: u32,
}

impl PaginationState {
    /// Start paginating from `url`
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            next_url: Some(url.into()),
            ..Default::default()
        }
    }

    /// The link to request next, if pagination should continue under `limit`
    pub fn next_request(&self, limit: i64) -> Option<&str> {
        if (self.fetched as i64) < limit {
            self.next_url.as_deref()
        } else {
            None
        }
    }

    /// Record a fetched page
    pub fn record_page(&mut self, records: usize, next: Option<String>) {
        self.pages += 1;
        self.fetched += records;
        self.next_url = next.filter(|url| !url.is_empty());
    }
}

/// Records accumulated by a fetch loop
///
/// `error` is set when the loop ended because a page failed; `records` then
/// holds whatever was fetched before the failure.
#[derive(Debug)]
pub struct FetchOutcome<T> {
    /// Records in server order across pages
    pub records: Vec<T>,
    /// Number of pages fetched successfully
    pub pages: u32,
    /// The error that stopped pagination, if any
    pub error: Option<Error>,
}

impl<T> FetchOutcome<T> {
    /// Whether pagination stopped because of an error
    pub fn is_partial(&self) -> bool {
        self.error.is_some()
    }
}
