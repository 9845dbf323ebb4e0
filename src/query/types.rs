//! Query types
//!
//! The host query object and the comparison AST the filter extractor
//! builds from it.

use crate::types::{JsonObject, JsonValue};
use serde::{Deserialize, Serialize};

/// Conjunction marker heading a multi-clause filter
pub const AND_MARKER: &str = "and";

/// Tag identifying an attribute reference node
pub const ATTR_TAG: &str = "attr";

/// Declarative query handed over by the host
///
/// Only `filter` and `limit` are interpreted here. Every other clause
/// (`orderBy`, `select`, ...) is kept verbatim for the query applier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Query {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<JsonValue>,
    #[serde(flatten)]
    pub clauses: JsonObject,
}

impl Query {
    /// Create an empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter expression
    #[must_use]
    pub fn with_filter(mut self, filter: JsonValue) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Set the limit expression
    #[must_use]
    pub fn with_limit(mut self, limit: JsonValue) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Add a pass-through clause
    #[must_use]
    pub fn with_clause(mut self, name: impl Into<String>, value: JsonValue) -> Self {
        self.clauses.insert(name.into(), value);
        self
    }

    /// The limit expression, if one is present
    ///
    /// Falsy values (`null`, `false`, `0`, `""`) count as absent.
    pub fn limit_expression(&self) -> Option<&JsonValue> {
        self.limit.as_ref().filter(|expr| is_truthy(expr))
    }
}

fn is_truthy(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => false,
        JsonValue::Bool(b) => *b,
        JsonValue::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        JsonValue::String(s) => !s.is_empty(),
        JsonValue::Array(_) | JsonValue::Object(_) => true,
    }
}

/// Comparison operators the remote API can express
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `=` - exact match, parameter named after the attribute
    Eq,
    /// `>` - `<attribute>__gt`
    Gt,
    /// `<` - `<attribute>__lt`
    Lt,
}

impl Operator {
    /// Parse an operator token, `None` for anything unsupported
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "=" => Some(Self::Eq),
            ">" => Some(Self::Gt),
            "<" => Some(Self::Lt),
            _ => None,
        }
    }

    /// API query parameter name for a comparison on `attribute`
    pub fn parameter_name(self, attribute: &str) -> String {
        match self {
            Self::Eq => attribute.to_string(),
            Self::Gt => format!("{attribute}__gt"),
            Self::Lt => format!("{attribute}__lt"),
        }
    }
}

/// A single `[operator, ["attr", name], [tag, value]]` clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub operator: Operator,
    pub attribute: String,
    pub literal: String,
}

impl Comparison {
    /// Parse one clause, returning `None` for anything malformed or unsupported
    pub fn parse(clause: &JsonValue) -> Option<Self> {
        let [operator, attribute, value] = clause.as_array()?.as_slice() else {
            return None;
        };

        let attribute = match attribute.as_array()?.as_slice() {
            [tag, name, ..] if tag.as_str() == Some(ATTR_TAG) => name.as_str()?.to_string(),
            _ => return None,
        };

        let literal = literal_text(value.as_array()?.get(1)?);
        let operator = Operator::parse(operator.as_str()?)?;

        Some(Self {
            operator,
            attribute,
            literal,
        })
    }

    /// The `(parameter, value)` pair this comparison maps to
    pub fn to_parameter(&self) -> (String, String) {
        (
            self.operator.parameter_name(&self.attribute),
            self.literal.clone(),
        )
    }
}

/// Render a literal the way it would appear in a query string
fn literal_text(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        JsonValue::Null => "null".to_string(),
        JsonValue::Bool(b) => b.to_string(),
        JsonValue::Number(n) => n.to_string(),
        JsonValue::Array(_) | JsonValue::Object(_) => value.to_string(),
    }
}

/// Flat API parameter mapping, insertion ordered with overwrite semantics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryFilters {
    params: Vec<(String, String)>,
}

impl QueryFilters {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter, replacing the value in place if it already exists
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.params.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.params.push((name, value)),
        }
    }

    /// Look up a parameter value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether the mapping is empty
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate over `(name, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryFilters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut filters = Self::new();
        for (key, value) in iter {
            filters.set(key, value);
        }
        filters
    }
}
