//! # Value Normalization
//!
//! Converts arbitrary serializable values into the canonical structural
//! tree (null / bool / number / string / sequence / mapping) that the
//! validation engine evaluates. Records are reflected into mappings via
//! their `Serialize` implementations.
//!
//! ## Totality
//!
//! Normalization never fails: values with no structural representation
//! (non-finite floats, non-string map keys) degrade to `Value::Null`,
//! which downstream not-null rules then reject.

use serde::Serialize;
use serde_json::Value;

/// Normalizes any serializable value into a structural JSON tree.
pub fn normalize<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}
