//! Query translation module
//!
//! Turns the host's declarative query into what the remote API understands.
//!
//! # Overview
//!
//! - `Query` - the host query object (`filter`, `limit`, plus pass-through clauses)
//! - `extract_filters` - flattens a conjunction of simple comparisons into
//!   API query parameters, silently skipping anything it cannot express
//! - `resolve_limit` / `page_size` - how many records to fetch and how many
//!   to ask for per request

mod filter;
mod limit;
mod types;

pub use filter::extract_filters;
pub use limit::{page_size, resolve_limit};
pub use types::{Comparison, Operator, Query, QueryFilters};
