//! Host collaborator module
//!
//! The provider runs inside a note-taking host that owns the secret store,
//! the query-expression evaluator and the generic query engine. Those are
//! injected through the traits defined here so the pipeline can run (and be
//! tested) without the host present.
//!
//! # Implementations
//!
//! - `EnvSecretStore` / `StaticSecretStore` - secrets from the environment or memory
//! - `LiteralEvaluator` - resolves literal expressions only
//! - `PassthroughApplier` - returns fetched records unchanged

mod local;
mod types;

pub use local::{EnvSecretStore, LiteralEvaluator, PassthroughApplier, StaticSecretStore};
pub use types::{ExpressionEvaluator, HostContext, QueryApplier, SecretStore};

#[cfg(test)]
mod tests;
