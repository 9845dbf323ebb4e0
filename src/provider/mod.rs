//! Query provider module
//!
//! Entry points the host calls to answer a query against Readwise.
//!
//! # Pipeline
//!
//! Each invocation runs, in order:
//! 1. read the API token from the secret store
//! 2. resolve the limit (host expression or default) and the page size
//! 3. extract API filter parameters from the query's filter expression
//! 4. follow next-page links until exhausted or the limit is met
//! 5. hand the accumulated records and the full query to the query applier
//!
//! Failures in steps 1, 2 and 5 abort the invocation. Failures in step 4
//! are logged and the records fetched so far continue to step 5.

use crate::auth::AuthConfig;
use crate::config::ProviderConfig;
use crate::error::{Error, Result};
use crate::host::{ExpressionEvaluator, HostContext, QueryApplier, SecretStore};
use crate::http::HttpClient;
use crate::pagination::{FetchOutcome, NextLinkPaginator};
use crate::query::{extract_filters, page_size, resolve_limit, Query};
use crate::types::{Collection, JsonValue};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Readwise data provider
///
/// Holds only configuration and collaborator handles; every call builds its
/// own HTTP client and re-reads the token.
#[derive(Clone)]
pub struct ReadwiseProvider {
    config: ProviderConfig,
    secrets: Arc<dyn SecretStore>,
    evaluator: Arc<dyn ExpressionEvaluator>,
    applier: Arc<dyn QueryApplier>,
}

impl ReadwiseProvider {
    /// Create a provider from its collaborators
    pub fn new(
        config: ProviderConfig,
        secrets: Arc<dyn SecretStore>,
        evaluator: Arc<dyn ExpressionEvaluator>,
        applier: Arc<dyn QueryApplier>,
    ) -> Self {
        Self {
            config,
            secrets,
            evaluator,
            applier,
        }
    }

    /// Provider configuration
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Answer `query` from the books collection
    pub async fn get_books(&self, query: &Query) -> Result<Vec<JsonValue>> {
        self.run(Collection::Books, query).await
    }

    /// Answer `query` from the highlights collection
    pub async fn get_highlights(&self, query: &Query) -> Result<Vec<JsonValue>> {
        self.run(Collection::Highlights, query).await
    }

    /// Answer `query` from the given collection
    pub async fn query(&self, collection: Collection, query: &Query) -> Result<Vec<JsonValue>> {
        match collection {
            Collection::Books => self.get_books(query).await,
            Collection::Highlights => self.get_highlights(query).await,
        }
    }

    /// Fetch raw records for `query` without post-processing
    ///
    /// Records are the API's JSON objects, untouched. Pagination errors are
    /// logged and left in `FetchOutcome::error`; only token, limit and
    /// setup failures are returned as `Err`.
    pub async fn fetch_records(
        &self,
        collection: Collection,
        query: &Query,
    ) -> Result<FetchOutcome<JsonValue>> {
        let token = self.read_token().await?;
        let limit =
            resolve_limit(query, self.evaluator.as_ref(), self.config.default_limit).await?;
        let page_size = page_size(limit, self.config.max_page_size);
        let filters = extract_filters(query.filter.as_ref());
        debug!(
            "Fetching {collection}: limit {limit}, page size {page_size}, {} filter params",
            filters.len()
        );

        let client = HttpClient::with_auth(self.config.http_config(), AuthConfig::token(token))?;
        let start_url = self.config.collection_url(collection)?;
        let outcome = NextLinkPaginator::new(page_size, filters)
            .fetch_all(&client, collection, &start_url, limit)
            .await;

        if let Some(err) = &outcome.error {
            error!("{}", fetch_failure_message(collection, err));
        }

        info!(
            "Fetched {} {collection} in {} pages{}",
            outcome.records.len(),
            outcome.pages,
            if outcome.is_partial() { " (partial)" } else { "" }
        );

        Ok(outcome)
    }

    async fn run(&self, collection: Collection, query: &Query) -> Result<Vec<JsonValue>> {
        let outcome = self.fetch_records(collection, query).await?;

        self.applier
            .apply(query, outcome.records, &HostContext::default())
            .await
    }

    async fn read_token(&self) -> Result<String> {
        let name = self.config.secret_name.as_str();
        let values = self.secrets.read_secrets(&[name]).await?;

        match values.as_slice() {
            [token] if !token.trim().is_empty() => Ok(token.clone()),
            [_] => Err(Error::secret(name, "secret is empty")),
            _ => Err(Error::secret(
                name,
                format!("expected exactly one value, got {}", values.len()),
            )),
        }
    }
}

/// Log line for an error that ended pagination
///
/// Books and highlights word their failures differently.
fn fetch_failure_message(collection: Collection, err: &Error) -> String {
    match (collection, err.has_message()) {
        (Collection::Books, true) => format!("Error: {err}"),
        (Collection::Books, false) => "An unknown error occurred".to_string(),
        (Collection::Highlights, true) => format!("Error fetching highlights: {err}"),
        (Collection::Highlights, false) => {
            "An unknown error occurred while fetching highlights".to_string()
        }
    }
}

impl std::fmt::Debug for ReadwiseProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReadwiseProvider")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
