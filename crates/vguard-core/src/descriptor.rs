//! # Type Descriptors
//!
//! Abstract descriptions of a call's declared return type, used only to
//! compute a fallback value when validation fails and the call is
//! configured not to raise. Descriptors are carried separately from the
//! failing argument: defaults are computed for *return types*.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// A zero-argument factory producing a structural value for a record type.
///
/// Fallible: a constructor that fails degrades to the absence-of-value
/// marker during default resolution rather than surfacing an error.
pub type ConstructFn =
    Arc<dyn Fn() -> Result<Value, Box<dyn std::error::Error + Send + Sync>> + Send + Sync>;

/// Abstract description of a target type for default-value resolution.
#[derive(Clone)]
pub enum TypeDescriptor {
    /// Signed integer of any width.
    SignedInteger,
    /// Unsigned integer of any width.
    UnsignedInteger,
    /// Floating point of any width.
    Float,
    /// Boolean.
    Boolean,
    /// Text / string.
    Text,
    /// Ordered sequence of the element type.
    Sequence(Box<TypeDescriptor>),
    /// Unordered set of the element type.
    Set(Box<TypeDescriptor>),
    /// Mapping from keys to values.
    Mapping(Box<TypeDescriptor>, Box<TypeDescriptor>),
    /// A record type, constructible when a zero-argument factory exists.
    Record {
        /// Zero-argument factory, absent for unconstructible records.
        constructor: Option<ConstructFn>,
    },
    /// Void / no return value.
    Unit,
}

impl TypeDescriptor {
    /// Convenience for a sequence descriptor.
    pub fn sequence_of(element: TypeDescriptor) -> Self {
        TypeDescriptor::Sequence(Box::new(element))
    }

    /// Convenience for a set descriptor.
    pub fn set_of(element: TypeDescriptor) -> Self {
        TypeDescriptor::Set(Box::new(element))
    }

    /// Convenience for a mapping descriptor.
    pub fn mapping_of(key: TypeDescriptor, value: TypeDescriptor) -> Self {
        TypeDescriptor::Mapping(Box::new(key), Box::new(value))
    }

    /// A record with a zero-argument constructor.
    pub fn constructible_record<F>(constructor: F) -> Self
    where
        F: Fn() -> Result<Value, Box<dyn std::error::Error + Send + Sync>>
            + Send
            + Sync
            + 'static,
    {
        TypeDescriptor::Record {
            constructor: Some(Arc::new(constructor)),
        }
    }

    /// A record without a zero-argument constructor.
    pub fn unconstructible_record() -> Self {
        TypeDescriptor::Record { constructor: None }
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::SignedInteger => write!(f, "SignedInteger"),
            TypeDescriptor::UnsignedInteger => write!(f, "UnsignedInteger"),
            TypeDescriptor::Float => write!(f, "Float"),
            TypeDescriptor::Boolean => write!(f, "Boolean"),
            TypeDescriptor::Text => write!(f, "Text"),
            TypeDescriptor::Sequence(t) => write!(f, "Sequence({t:?})"),
            TypeDescriptor::Set(t) => write!(f, "Set({t:?})"),
            TypeDescriptor::Mapping(k, v) => write!(f, "Mapping({k:?}, {v:?})"),
            TypeDescriptor::Record { constructor } => f
                .debug_struct("Record")
                .field("constructible", &constructor.is_some())
                .finish(),
            TypeDescriptor::Unit => write!(f, "Unit"),
        }
    }
}
