//! Standalone collaborator implementations
//!
//! Used by the CLI and by tests. They deliberately cover only what a
//! standalone run needs; the host's real engines are far richer.

use super::types::{ExpressionEvaluator, HostContext, QueryApplier, SecretStore};
use crate::error::{Error, Result};
use crate::query::Query;
use crate::types::JsonValue;
use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt;

// ============================================================================
// Secret Stores
// ============================================================================

/// Secrets read from environment variables
///
/// `readwiseToken` is looked up as `READWISE_TOKEN` unless an explicit
/// variable name was registered for it.
#[derive(Debug, Clone, Default)]
pub struct EnvSecretStore {
    overrides: HashMap<String, String>,
}

impl EnvSecretStore {
    /// Create a store using the derived variable names
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `secret` from `variable` instead of the derived name
    #[must_use]
    pub fn with_variable(mut self, secret: impl Into<String>, variable: impl Into<String>) -> Self {
        self.overrides.insert(secret.into(), variable.into());
        self
    }

    /// Environment variable consulted for `secret`
    pub fn variable_for(&self, secret: &str) -> String {
        self.overrides
            .get(secret)
            .cloned()
            .unwrap_or_else(|| env_var_name(secret))
    }
}

#[async_trait]
impl SecretStore for EnvSecretStore {
    async fn read_secrets(&self, names: &[&str]) -> Result<Vec<String>> {
        names
            .iter()
            .map(|name| {
                let variable = self.variable_for(name);
                match std::env::var(&variable) {
                    Ok(value) if !value.trim().is_empty() => Ok(value),
                    _ => Err(Error::secret(
                        *name,
                        format!("environment variable {variable} is not set"),
                    )),
                }
            })
            .collect()
    }
}

/// Convert a camelCase secret name to SCREAMING_SNAKE_CASE
fn env_var_name(secret: &str) -> String {
    let mut out = String::with_capacity(secret.len() + 4);
    for (i, ch) in secret.chars().enumerate() {
        if ch.is_ascii_uppercase() && i > 0 {
            out.push('_');
        }
        if ch == '-' || ch == '.' {
            out.push('_');
        } else {
            out.push(ch.to_ascii_uppercase());
        }
    }
    out
}

/// In-memory secrets
#[derive(Clone, Default)]
pub struct StaticSecretStore {
    secrets: HashMap<String, String>,
}

impl StaticSecretStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a secret
    #[must_use]
    pub fn with_secret(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.secrets.insert(name.into(), value.into());
        self
    }
}

impl fmt::Debug for StaticSecretStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticSecretStore")
            .field("names", &self.secrets.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl SecretStore for StaticSecretStore {
    async fn read_secrets(&self, names: &[&str]) -> Result<Vec<String>> {
        names
            .iter()
            .map(|name| {
                self.secrets
                    .get(*name)
                    .cloned()
                    .ok_or_else(|| Error::secret(*name, "secret not found"))
            })
            .collect()
    }
}

// ============================================================================
// Expression Evaluation
// ============================================================================

/// Evaluates literal expressions
///
/// Accepts bare JSON numbers and strings as well as the tagged literal nodes
/// `["number", n]`, `["string", s]`, `["boolean", b]` and `["null"]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralEvaluator;

#[async_trait]
impl ExpressionEvaluator for LiteralEvaluator {
    async fn evaluate(&self, expression: &JsonValue, _context: &HostContext) -> Result<JsonValue> {
        match expression {
            JsonValue::Number(_) | JsonValue::String(_) | JsonValue::Bool(_) => {
                Ok(expression.clone())
            }
            JsonValue::Array(node) => match node.as_slice() {
                [tag] if tag == "null" => Ok(JsonValue::Null),
                [tag, value] => match (tag.as_str(), value) {
                    (Some("number"), JsonValue::Number(_))
                    | (Some("string"), JsonValue::String(_))
                    | (Some("boolean"), JsonValue::Bool(_)) => Ok(value.clone()),
                    _ => Err(unsupported(expression)),
                },
                _ => Err(unsupported(expression)),
            },
            _ => Err(unsupported(expression)),
        }
    }
}

fn unsupported(expression: &JsonValue) -> Error {
    Error::evaluation(format!("unsupported expression: {expression}"))
}

// ============================================================================
// Query Application
// ============================================================================

/// Returns records exactly as fetched
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughApplier;

#[async_trait]
impl QueryApplier for PassthroughApplier {
    async fn apply(
        &self,
        _query: &Query,
        records: Vec<JsonValue>,
        _context: &HostContext,
    ) -> Result<Vec<JsonValue>> {
        Ok(records)
    }
}
