//! # Fallback Default Resolution
//!
//! Computes the canonical "empty" value for a type descriptor. Used by
//! the interception layer to substitute a return value when validation
//! fails and the call-site is configured not to raise.
//!
//! ## Totality Invariant
//!
//! [`default_for`] always returns some value. Record constructors that
//! fail degrade to `Value::Null`; defaulting is never itself a source
//! of failure.

use serde_json::{Map, Value};

use crate::descriptor::TypeDescriptor;

/// Returns the canonical default value for the given type descriptor.
///
/// Policy:
///
/// | Category                | Default                       |
/// |-------------------------|-------------------------------|
/// | signed/unsigned integer | `0`                           |
/// | floating point          | `0.0`                         |
/// | boolean                 | `false`                       |
/// | text                    | `""`                          |
/// | sequence, set           | `[]`                          |
/// | mapping                 | `{}`                          |
/// | constructible record    | freshly constructed instance  |
/// | anything else           | `null`                        |
pub fn default_for(descriptor: &TypeDescriptor) -> Value {
    match descriptor {
        TypeDescriptor::SignedInteger | TypeDescriptor::UnsignedInteger => Value::from(0),
        TypeDescriptor::Float => Value::from(0.0),
        TypeDescriptor::Boolean => Value::Bool(false),
        TypeDescriptor::Text => Value::String(String::new()),
        TypeDescriptor::Sequence(_) | TypeDescriptor::Set(_) => Value::Array(Vec::new()),
        TypeDescriptor::Mapping(_, _) => Value::Object(Map::new()),
        TypeDescriptor::Record {
            constructor: Some(construct),
        } => construct().unwrap_or(Value::Null),
        TypeDescriptor::Record { constructor: None } | TypeDescriptor::Unit => Value::Null,
    }
}
