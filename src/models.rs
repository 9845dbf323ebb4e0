//! Remote API models
//!
//! Pages are accumulated as raw JSON objects so the host sees exactly what
//! the API returned. `Book` and `Highlight` are lenient typed views over
//! those objects; every field the API may null or omit is optional, and
//! anything else the server sends lands in `extra`.

use crate::types::{Collection, JsonObject, JsonValue};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// A typed view over one record of a remote collection
pub trait Record: DeserializeOwned + Serialize + Send + 'static {
    /// Collection the record is fetched from
    const COLLECTION: Collection;

    /// One-line human readable description
    fn summary(&self) -> String;

    /// Read a record from an API object, `None` if it does not fit the view
    fn from_json(value: &JsonValue) -> Option<Self> {
        Self::deserialize(value).ok()
    }
}

/// A book (or article, tweet, podcast...) with highlights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub num_highlights: Option<u64>,
    #[serde(default)]
    pub last_highlight_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub highlights_url: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub asin: Option<String>,
    #[serde(default, deserialize_with = "tag_names")]
    pub tags: Vec<String>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Record for Book {
    const COLLECTION: Collection = Collection::Books;

    fn summary(&self) -> String {
        let title = self.title.as_deref().unwrap_or("(untitled)");
        let mut line = format!("[{}] {title}", self.id);
        if let Some(author) = self.author.as_deref().filter(|a| !a.is_empty()) {
            line.push_str(&format!(" by {author}"));
        }
        if let Some(count) = self.num_highlights {
            line.push_str(&format!(" ({count} highlights)"));
        }
        line
    }
}

/// A single highlight, pointing at its book by id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub id: u64,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub location: Option<i64>,
    #[serde(default)]
    pub location_type: Option<String>,
    #[serde(default)]
    pub highlighted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub book_id: Option<u64>,
    #[serde(default, deserialize_with = "tag_names")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Record for Highlight {
    const COLLECTION: Collection = Collection::Highlights;

    fn summary(&self) -> String {
        let mut line = format!("[{}]", self.id);
        if let Some(book_id) = self.book_id {
            line.push_str(&format!(" book {book_id}"));
        }
        if let Some(location) = self.location {
            line.push_str(&format!(" @{location}"));
        }
        line.push_str(&format!(": {}", self.text.as_deref().unwrap_or_default()));
        line
    }
}

/// One page of a next-link paginated listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResponse<T> {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// Tags arrive either as plain names or as `{ "id": .., "name": .. }` objects
fn tag_names<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TagRepr {
        Name(String),
        Object { name: String },
    }

    let tags = Option::<Vec<TagRepr>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(tags
        .into_iter()
        .map(|tag| match tag {
            TagRepr::Name(name) | TagRepr::Object { name } => name,
        })
        .collect())
}
