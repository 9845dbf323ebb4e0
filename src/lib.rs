// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Readwise Query Provider
//!
//! Answers a note-taking host's declarative queries with books and
//! highlights pulled from the Readwise export API.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use readwise_provider::host::{EnvSecretStore, LiteralEvaluator, PassthroughApplier};
//! use readwise_provider::{ProviderConfig, Query, ReadwiseProvider, Result};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let provider = ReadwiseProvider::new(
//!         ProviderConfig::default(),
//!         Arc::new(EnvSecretStore::new()),
//!         Arc::new(LiteralEvaluator),
//!         Arc::new(PassthroughApplier),
//!     );
//!
//!     let query: Query = serde_json::from_str(
//!         r#"{"filter": ["and", [">", ["attr", "num_highlights"], ["number", 5]]]}"#,
//!     )?;
//!     let books = provider.get_books(&query).await?;
//!     println!("{} books", books.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                ReadwiseProvider (per invocation)             │
//! │   get_books(query)              get_highlights(query)        │
//! └──────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────┬────────────┬──────┴───────┬────────────┬──────────┐
//! │  Secret  │   Limit    │    Filter    │ Next-link  │  Query   │
//! │  store   │  resolver  │  extractor   │ paginator  │ applier  │
//! └──────────┴────────────┴──────────────┴────────────┴──────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Remote API models
pub mod models;

/// Host query translation (filters, limits)
pub mod query;

/// Injected host collaborators
pub mod host;

/// Token authentication
pub mod auth;

/// HTTP client
pub mod http;

/// Next-link pagination
pub mod pagination;

/// Provider configuration
pub mod config;

/// Query entry points
pub mod provider;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ProviderConfig;
pub use error::{Error, Result};
pub use models::{Book, Highlight, PageResponse};
pub use provider::ReadwiseProvider;
pub use query::Query;
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
