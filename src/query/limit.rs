//! Limit resolution
//!
//! The limit clause is an arbitrary host expression, so it is handed to the
//! host evaluator. Evaluation failures are returned to the caller untouched.

use super::types::Query;
use crate::error::{Error, Result};
use crate::host::{ExpressionEvaluator, HostContext};
use crate::types::JsonValue;
use tracing::debug;

/// Resolve how many records to fetch for `query`
///
/// Returns `default_limit` when the query has no limit clause.
pub async fn resolve_limit(
    query: &Query,
    evaluator: &dyn ExpressionEvaluator,
    default_limit: i64,
) -> Result<i64> {
    let Some(expression) = query.limit_expression() else {
        return Ok(default_limit);
    };

    let value = evaluator
        .evaluate(expression, &HostContext::default())
        .await?;
    let limit = limit_from_value(&value)?;
    debug!("Resolved limit expression {expression} to {limit}");
    Ok(limit)
}

/// Per-request page size: the limit, capped at the API maximum
pub fn page_size(limit: i64, max_page_size: i64) -> i64 {
    limit.min(max_page_size)
}

/// Coerce an evaluated limit to a record count
///
/// Fractional limits are truncated toward zero, so `12.9` fetches with
/// `page_size=12` and stops once 12 records are held.
fn limit_from_value(value: &JsonValue) -> Result<i64> {
    let invalid = || Error::InvalidLimit {
        value: value.to_string(),
    };

    match value {
        JsonValue::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            .ok_or_else(invalid),
        JsonValue::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| {
                    s.parse::<f64>()
                        .ok()
                        .filter(|f| f.is_finite())
                        .map(|f| f.trunc() as i64)
                })
                .ok_or_else(invalid)
        }
        _ => Err(invalid()),
    }
}
