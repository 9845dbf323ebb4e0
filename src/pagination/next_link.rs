//! Next-link paginator

use super::types::{FetchOutcome, NextPage, PaginationState};
use crate::error::Result;
use crate::http::HttpClient;
use crate::models::PageResponse;
use crate::query::QueryFilters;
use crate::types::{Collection, JsonValue};
use tracing::debug;
use url::Url;

/// Query parameter carrying the page size
pub const PAGE_SIZE_PARAM: &str = "page_size";

/// Follows server-supplied `next` links until exhausted or the limit is met
#[derive(Debug, Clone)]
pub struct NextLinkPaginator {
    /// Records requested per page
    pub page_size: i64,
    /// Filter parameters applied to every request
    pub filters: QueryFilters,
}

impl NextLinkPaginator {
    /// Create a new next-link paginator
    pub fn new(page_size: i64, filters: QueryFilters) -> Self {
        Self { page_size, filters }
    }

    /// Build the request URL for a link
    ///
    /// `page_size` is set first, then every filter, each overwriting any
    /// value the link already carries.
    pub fn request_url(&self, link: &str) -> Result<Url> {
        let mut url = Url::parse(link)?;
        let page_size = self.page_size.to_string();
        let params = std::iter::once((PAGE_SIZE_PARAM, page_size.as_str())).chain(self.filters.iter());
        set_query_params(&mut url, params);
        Ok(url)
    }

    /// Append a page's records and advance the state
    pub fn process_page<T>(
        &self,
        page: PageResponse<T>,
        records: &mut Vec<T>,
        state: &mut PaginationState,
    ) -> NextPage {
        state.record_page(page.results.len(), page.next);
        records.extend(page.results);

        match &state.next_url {
            Some(url) => NextPage::with_url(url.clone()),
            None => NextPage::Done,
        }
    }

    /// Fetch pages starting at `start_url` until the link is exhausted or
    /// at least `limit` records have been accumulated
    ///
    /// Records are kept exactly as the server sent them. The last page is
    /// not truncated, so the result may exceed `limit`.
    pub async fn fetch_all(
        &self,
        client: &HttpClient,
        collection: Collection,
        start_url: &Url,
        limit: i64,
    ) -> FetchOutcome<JsonValue> {
        let mut state = PaginationState::new(start_url.as_str());
        let mut records = Vec::new();

        let error = loop {
            let Some(link) = state.next_request(limit).map(str::to_string) else {
                break None;
            };

            let page = match self.fetch_page(client, collection, &link).await {
                Ok(page) => page,
                Err(e) => break Some(e),
            };

            let in_page = page.results.len();
            let next = self.process_page(page, &mut records, &mut state);
            debug!(
                "{collection} page {}: {in_page} records ({} total), next: {}",
                state.pages,
                state.fetched,
                if next.is_continue() { "yes" } else { "no" }
            );
        };

        FetchOutcome {
            records,
            pages: state.pages,
            error,
        }
    }

    async fn fetch_page(
        &self,
        client: &HttpClient,
        collection: Collection,
        link: &str,
    ) -> Result<PageResponse<JsonValue>> {
        let url = self.request_url(link)?;
        debug!("Requesting {url}");
        client
            .get_json(&url, collection.reports_error_body())
            .await
    }
}

/// Set query parameters with replace-in-place semantics
///
/// For each pair, the first existing occurrence of the name gets the new
/// value and later duplicates are dropped; unknown names are appended.
pub fn set_query_params<'a>(url: &mut Url, params: impl IntoIterator<Item = (&'a str, &'a str)>) {
    let mut pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

    for (name, value) in params {
        let mut seen = false;
        pairs.retain_mut(|(key, existing)| {
            if key.as_str() != name {
                return true;
            }
            if seen {
                return false;
            }
            seen = true;
            *existing = value.to_string();
            true
        });
        if !seen {
            pairs.push((name.to_string(), value.to_string()));
        }
    }

    if pairs.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(&pairs);
    }
}
