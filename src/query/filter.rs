//! Filter extraction
//!
//! Only a flat conjunction of `=`, `>` and `<` comparisons against plain
//! attributes can be pushed down to the API. Everything else is left for the
//! query applier to evaluate on the fetched records.

use super::types::{Comparison, QueryFilters, AND_MARKER};
use crate::types::JsonValue;
use tracing::trace;

/// Extract API query parameters from a host filter expression
///
/// Non-array (or absent) expressions yield an empty mapping. A leading
/// `"and"` marker is dropped; the remaining elements are treated as
/// individual clauses. Clauses that do not parse are skipped, and later
/// clauses win when two target the same parameter.
pub fn extract_filters(expression: Option<&JsonValue>) -> QueryFilters {
    let mut filters = QueryFilters::new();

    let Some(elements) = expression.and_then(JsonValue::as_array) else {
        return filters;
    };

    let clauses = match elements.first() {
        Some(first) if first.as_str() == Some(AND_MARKER) => &elements[1..],
        _ => elements.as_slice(),
    };

    for clause in clauses {
        match Comparison::parse(clause) {
            Some(comparison) => {
                let (name, value) = comparison.to_parameter();
                filters.set(name, value);
            }
            None => trace!("Skipping filter clause the API cannot express: {clause}"),
        }
    }

    filters
}
