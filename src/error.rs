//! Error types for the Readwise provider
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Whether an error aborts an invocation or only ends pagination early is
//! decided by the caller in `provider`, not by the variant itself.

use thiserror::Error;

/// The main error type for the provider
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Host Collaborator Errors
    // ============================================================================
    #[error("Failed to read secret '{name}': {message}")]
    Secret { name: String, message: String },

    #[error("Expression evaluation failed: {message}")]
    Evaluation { message: String },

    #[error("Limit expression did not resolve to a number: {value}")]
    InvalidLimit { value: String },

    #[error("Query application failed: {message}")]
    QueryApplication { message: String },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API request failed: {status}{}", body_suffix(.body))]
    ApiStatus { status: u16, body: Option<String> },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Host Errors
    // ============================================================================
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

fn body_suffix(body: &Option<String>) -> String {
    match body {
        Some(text) => format!(" {text}"),
        None => String::new(),
    }
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a secret retrieval error
    pub fn secret(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Secret {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create an expression evaluation error
    pub fn evaluation(message: impl Into<String>) -> Self {
        Self::Evaluation {
            message: message.into(),
        }
    }

    /// Create a query application error
    pub fn query_application(message: impl Into<String>) -> Self {
        Self::QueryApplication {
            message: message.into(),
        }
    }

    /// Create an API status error without a body
    pub fn api_status(status: u16) -> Self {
        Self::ApiStatus { status, body: None }
    }

    /// Create an API status error carrying the response body
    pub fn api_status_with_body(status: u16, body: impl Into<String>) -> Self {
        Self::ApiStatus {
            status,
            body: Some(body.into()),
        }
    }

    /// Whether the error has any message text worth reporting
    pub fn has_message(&self) -> bool {
        !self.to_string().trim().is_empty()
    }
}

/// Result type alias for the provider
pub type Result<T> = std::result::Result<T, Error>;
