//! Common types used throughout the provider
//!
//! This module contains shared type definitions and type aliases used
//! across multiple modules.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Collections
// ============================================================================

/// Remote collections exposed by the Readwise export API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    /// `/api/v2/books/`
    Books,
    /// `/api/v2/highlights/`
    Highlights,
}

impl Collection {
    /// Path of the collection relative to the API base URL
    pub fn path(self) -> &'static str {
        match self {
            Self::Books => "books/",
            Self::Highlights => "highlights/",
        }
    }

    /// Human-readable collection name
    pub fn name(self) -> &'static str {
        match self {
            Self::Books => "books",
            Self::Highlights => "highlights",
        }
    }

    /// Whether non-success responses should carry the response body text
    pub fn reports_error_body(self) -> bool {
        matches!(self, Self::Highlights)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
