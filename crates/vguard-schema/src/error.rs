//! # Schema Error Taxonomy
//!
//! Two failure classes with deliberately different handling:
//!
//! - [`SchemaError::Compilation`] — the schema text itself is malformed.
//!   Fatal to the attempt, never cached, always propagated to the caller.
//! - [`SchemaError::ValidationFailed`] — the value did not satisfy a
//!   compiled schema. This is the only error the interception layer is
//!   allowed to convert into a fallback default.

use thiserror::Error;

use vguard_core::Violations;

/// Error from schema compilation or validation.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The schema text was rejected by the compiler.
    #[error("schema compilation failed for '{schema_text}': {reason}")]
    Compilation {
        /// The offending schema text.
        schema_text: String,
        /// Reason the compiler rejected it.
        reason: String,
    },

    /// The value did not satisfy the compiled schema.
    #[error("validation failed against schema '{schema_text}':\n{violations}")]
    ValidationFailed {
        /// The schema text the value was validated against.
        schema_text: String,
        /// Structured list of individual violations, in reported order.
        violations: Violations,
    },
}

impl SchemaError {
    /// Returns true for the interceptable class of failure.
    pub fn is_validation_failure(&self) -> bool {
        matches!(self, SchemaError::ValidationFailed { .. })
    }
}
