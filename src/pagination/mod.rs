//! Pagination module
//!
//! Next-link pagination: every page response carries the absolute URL of
//! the following page, so the client never computes offsets itself.
//!
//! # Overview
//!
//! `NextLinkPaginator` builds each request URL (page size and filters set on
//! top of the server-supplied link), fetches pages strictly in sequence, and
//! stops once the link runs out or enough records have been accumulated.
//! A failing page ends the loop early; the records fetched before it are
//! kept and the error is returned alongside them in `FetchOutcome`.

mod next_link;
mod types;

pub use next_link::{set_query_params, NextLinkPaginator, PAGE_SIZE_PARAM};
pub use types::{FetchOutcome, NextPage, PaginationState};

#[cfg(test)]
mod tests;
