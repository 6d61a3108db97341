//! # Built-in Guard Schemas
//!
//! The schema literals the implicit-rule path applies when a call-site
//! declares shape constraints (`allow_null` / `allow_empty`) instead of
//! an explicit schema. These literals are also the cache keys under
//! which their compiled forms live, so they are deliberately `const`
//! strings rather than built `serde_json::Value`s.

/// Rejects only the null value.
pub const NOT_NULL: &str = r#"{
  "not": {
    "type": "null"
  }
}"#;

/// Requires an array-shaped value with at least one element.
pub const NON_EMPTY_ARRAY: &str = r#"{
  "type": "array",
  "minItems": 1
}"#;

/// Requires an object-shaped value with at least one property.
pub const NON_EMPTY_OBJECT: &str = r#"{
  "type": "object",
  "minProperties": 1
}"#;

/// Requires a string-shaped value with at least one character.
pub const NON_EMPTY_STRING: &str = r#"{
  "type": "string",
  "minLength": 1
}"#;
