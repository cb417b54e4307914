//! # Shared Utility Functions
//!
//! ## Payload Rendering
//!
//! Chat clients may send any JSON value as an event payload. The relay never
//! rejects a payload; it renders it as text instead:
//!
//! ```rust
//! use serde_json::json;
//! use shared::utils::render_payload;
//!
//! assert_eq!(render_payload(&json!("hello")), "hello");
//! assert_eq!(render_payload(&json!(null)), "");
//! assert_eq!(render_payload(&json!(42)), "42");
//! assert_eq!(render_payload(&json!({"a": 1})), r#"{"a":1}"#);
//! ```

use serde_json::Value;

/// Render a JSON payload as display text.
///
/// Strings are used verbatim, `null` becomes the empty string and every other
/// value is rendered as compact JSON.
pub fn render_payload(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
