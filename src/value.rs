//! Type predicates for values of dynamic origin
//!
//! Statically typed callers never need these; they exist for input that
//! arrives as JSON and has to be sorted before it reaches a string rule.

use serde_json::Value;

pub fn is_string(value: &Value) -> bool {
    matches!(value, Value::String(_))
}

/// Whether the value is a sequence; objects and strings are not.
pub fn is_array(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}
