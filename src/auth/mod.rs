//! Authentication module
//!
//! The Readwise API authenticates with a static access token sent as
//! `Authorization: Token <token>`. The token is re-read from the secret
//! store on every invocation; nothing here caches it.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::AuthConfig;

#[cfg(test)]
mod tests;
