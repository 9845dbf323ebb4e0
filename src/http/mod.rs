//! HTTP client module
//!
//! Thin wrapper over reqwest for the Readwise API.
//!
//! # Features
//!
//! - **Single attempt**: one request per call, no retries or backoff
//! - **Authentication**: integration with the auth module
//! - **Status classification**: non-success responses become `Error::ApiStatus`

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
