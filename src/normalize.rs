//! Total normalization of persisted records.
//!
//! Saved data may come from an older schema, a foreign writer, or plain
//! corruption. Every field is coerced independently; anything unusable
//! degrades to a default instead of erroring, so loading never fails on
//! a record-by-record basis.

use crate::clock::Clock;
use crate::models::{Priority, Task, DEFAULT_CATEGORY, DEFAULT_START_DATE};
use serde_json::Value;

/// Coerces an arbitrary decoded record into a well-formed [`Task`].
///
/// Never fails. Normalizing an already well-formed task yields an
/// identical task.
pub fn normalize_task(record: &Value, clock: &dyn Clock) -> Task {
    let now = clock.now();

    Task {
        id: coerce_id(record.get("id"), now.timestamp_millis()),
        text: coerce_string(record.get("text")),
        completed: record.get("completed").map(truthy).unwrap_or(false),
        created_at: match record.get("createdAt") {
            Some(Value::String(s)) => s.clone(),
            _ => now.to_rfc3339(),
        },
        start_date: match record.get("startDate") {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            _ => DEFAULT_START_DATE.to_string(),
        },
        category: match record.get("category") {
            Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
            _ => DEFAULT_CATEGORY.to_string(),
        },
        priority: match record.get("priority") {
            Some(Value::String(s)) => Priority::from_token(s).unwrap_or_default(),
            _ => Priority::default(),
        },
        due_date: coerce_string(record.get("dueDate")),
        tags: match record.get("tags") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|v| v.as_str().map(|s| s.to_string()))
                .collect(),
            _ => Vec::new(),
        },
    }
}

/// Coerces an id to a positive integer, substituting `fallback_ms`
/// (the current epoch-millisecond timestamp) when the stored value is
/// missing, non-numeric or not positive.
fn coerce_id(value: Option<&Value>, fallback_ms: i64) -> u64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(n) if n.is_finite() && n > 0.0 => n as u64,
        _ => fallback_ms.max(0) as u64,
    }
}

fn coerce_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

/// JavaScript-style truthiness, matching how the original treated the
/// `completed` flag read back from storage.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
