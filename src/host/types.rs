//! Host collaborator traits

use crate::error::Result;
use crate::query::Query;
use crate::types::{JsonObject, JsonValue};
use async_trait::async_trait;

/// Auxiliary arguments forwarded to host evaluation calls
///
/// The provider always passes these empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostContext {
    /// Object the expression is evaluated against
    pub object: JsonObject,
    /// Query variables
    pub variables: JsonObject,
    /// Callable functions exposed to expressions
    pub functions: JsonObject,
}

/// Reads named secrets (API tokens) from the host
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Read the given secrets, returning one value per name in order
    async fn read_secrets(&self, names: &[&str]) -> Result<Vec<String>>;
}

/// Evaluates host query expressions
#[async_trait]
pub trait ExpressionEvaluator: Send + Sync {
    /// Evaluate `expression` to a JSON value
    async fn evaluate(&self, expression: &JsonValue, context: &HostContext) -> Result<JsonValue>;
}

/// Applies a full declarative query to already-fetched records
#[async_trait]
pub trait QueryApplier: Send + Sync {
    /// Filter, sort, limit and project `records` according to `query`
    async fn apply(
        &self,
        query: &Query,
        records: Vec<JsonValue>,
        context: &HostContext,
    ) -> Result<Vec<JsonValue>>;
}
