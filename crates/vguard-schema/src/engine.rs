//! # Validation Engine
//!
//! Evaluates one structural value against one compiled schema and
//! normalizes the result into a [`ValidationOutcome`].
//!
//! ## Purity Invariant
//!
//! Evaluation is a pure function of its inputs: no shared mutable
//! state, safe to call concurrently from any number of threads against
//! the same compiled schema. Violations pass through in the order the
//! compiled schema reported them.

use serde_json::Value;

use vguard_core::ValidationOutcome;

use crate::compiler::CompiledSchema;

/// Stateless evaluation of compiled schemas.
#[derive(Debug)]
pub struct ValidationEngine;

impl ValidationEngine {
    /// Evaluates an instance against a compiled schema.
    ///
    /// A malformed schema can never reach this point: compilation
    /// failures are a distinct error class surfaced by the registry,
    /// never reported as violations.
    pub fn evaluate(schema: &dyn CompiledSchema, instance: &Value) -> ValidationOutcome {
        ValidationOutcome::from_violations(schema.violations(instance))
    }
}
