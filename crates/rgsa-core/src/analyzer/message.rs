//! Human-readable message from a backend error response.

use serde_json::Value;

/// Picks the message to show for a non-2xx response.
///
/// The body is read as a JSON object (anything else counts as `{}`); `detail`
/// wins over `error`, and `reason` is the fallback. Empty strings, `null`,
/// `false` and `0` are treated as absent. Non-string values such as FastAPI's
/// validation-error arrays are shown as compact JSON.
pub fn backend_error_message(reason: &str, body: &[u8]) -> String {
    let fields = match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => map,
        _ => return reason.to_string(),
    };

    ["detail", "error"]
        .iter()
        .filter_map(|key| fields.get(*key))
        .find_map(present)
        .unwrap_or_else(|| reason.to_string())
}

fn present(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
