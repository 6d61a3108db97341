//! # Interception Policy
//!
//! Per-call orchestration: validate the declared rules in order, then
//! either invoke the wrapped logic, raise, or substitute a default
//! return value.
//!
//! ## Short-Circuit Rules
//!
//! - Method-level stage: the first failing argument stops validation of
//!   the remaining arguments. Fast-fail is deliberate; violations are
//!   not aggregated across arguments.
//! - Parameter-level stage: each annotated parameter is handled
//!   independently in declaration order; a failure is resolved
//!   immediately and later parameters are never evaluated.
//! - If the method-level stage short-circuits, the parameter-level
//!   stage never runs.
//!
//! ## Propagation Rules
//!
//! Only a validation failure is ever converted into a default, and only
//! when the failing rule's raise flag is off. Compilation errors and
//! errors from the wrapped logic itself always reach the caller.

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use vguard_core::{default_for, NOT_NULL};
use vguard_schema::{SchemaError, SchemaRegistry};

use crate::call::{CallError, InterceptedCall};
use crate::rule::implicit_schema_for;

/// Error surfaced by [`InterceptionPolicy::invoke`].
#[derive(Error, Debug)]
pub enum InterceptError {
    /// Schema compilation or validation failure.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// The wrapped logic itself failed. Never intercepted.
    #[error("call '{name}' failed: {source}")]
    Call {
        /// Diagnostic name of the call.
        name: String,
        /// The underlying error from the wrapped logic.
        #[source]
        source: CallError,
    },
}

/// Decides, per call, whether to validate, raise, or substitute.
#[derive(Debug, Clone)]
pub struct InterceptionPolicy {
    registry: Arc<SchemaRegistry>,
}

impl InterceptionPolicy {
    /// Creates a policy validating through the given registry.
    pub fn new(registry: Arc<SchemaRegistry>) -> Self {
        Self { registry }
    }

    /// The registry this policy compiles and validates through.
    pub fn registry(&self) -> &Arc<SchemaRegistry> {
        &self.registry
    }

    /// Runs the full interception pipeline for one call.
    ///
    /// Returns the wrapped logic's result when every rule passes, the
    /// substituted default when a non-raising rule fails, or an error.
    ///
    /// # Errors
    ///
    /// - [`InterceptError::Schema`] with a compilation failure whenever
    ///   a declared schema is rejected, regardless of raise flags;
    /// - [`InterceptError::Schema`] with a validation failure when the
    ///   failing rule has its raise flag set;
    /// - [`InterceptError::Call`] when the wrapped logic fails.
    pub fn invoke(&self, call: &mut dyn InterceptedCall) -> Result<Value, InterceptError> {
        if let Some(rules) = call.method_rules() {
            let args = call.arguments().to_vec();
            // A call with no arguments has nothing to validate.
            for arg in &args {
                let schema = if !rules.allow_empty {
                    Some(implicit_schema_for(arg))
                } else if !rules.allow_null {
                    Some(NOT_NULL)
                } else {
                    None
                };
                let Some(schema) = schema else { continue };
                if let Err(err) = self.registry.validate(schema, arg) {
                    // First failing argument short-circuits the rest,
                    // and the parameter-level stage never runs.
                    return self.raise_or_substitute(call, rules.raise_on_failure, err);
                }
            }
        }

        let args = call.arguments().to_vec();
        for (index, arg) in args.iter().enumerate() {
            let Some(rule) = call.param_rule(index).cloned() else {
                continue;
            };
            if let Err(err) = self.registry.validate(&rule.schema, arg) {
                // Independent per-parameter short-circuit: earlier
                // parameters have already been validated, later ones
                // are never evaluated.
                return self.raise_or_substitute(call, rule.raise_on_failure, err);
            }
        }

        match call.proceed() {
            Ok(result) => Ok(result),
            Err(source) => Err(InterceptError::Call {
                name: call.name().to_string(),
                source,
            }),
        }
    }

    /// Resolves a failed rule: propagate, or substitute the default for
    /// the call's declared return type without invoking the wrapped logic.
    fn raise_or_substitute(
        &self,
        call: &dyn InterceptedCall,
        raise_on_failure: bool,
        err: SchemaError,
    ) -> Result<Value, InterceptError> {
        if err.is_validation_failure() && !raise_on_failure {
            warn!(call = call.name(), error = %err, "validation failed, substituting default return value");
            return Ok(default_for(call.return_type()));
        }
        Err(InterceptError::Schema(err))
    }
}
