//! # Validation Rules
//!
//! The metadata a call-site declares: method-level shape flags and
//! parameter-level explicit schemas, plus the implicit-rule
//! classification that maps a runtime value shape to a built-in schema.

use serde_json::Value;

use vguard_core::{NON_EMPTY_ARRAY, NON_EMPTY_OBJECT, NON_EMPTY_STRING, NOT_NULL};

/// Method-level validation flags, applied to every argument of a call.
///
/// All flags default to `false`: reject null, reject empty, substitute
/// a default instead of raising.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MethodRules {
    /// Permit null arguments.
    pub allow_null: bool,
    /// Permit empty strings, sequences, and mappings.
    pub allow_empty: bool,
    /// Propagate the validation failure instead of substituting a default.
    pub raise_on_failure: bool,
}

impl MethodRules {
    /// Rules that reject null and empty and substitute on failure.
    pub fn strict() -> Self {
        Self::default()
    }

    /// Permit null arguments.
    pub fn allow_null(mut self) -> Self {
        self.allow_null = true;
        self
    }

    /// Permit empty strings, sequences, and mappings.
    pub fn allow_empty(mut self) -> Self {
        self.allow_empty = true;
        self
    }

    /// Propagate failures to the caller instead of substituting.
    pub fn raise_on_failure(mut self) -> Self {
        self.raise_on_failure = true;
        self
    }
}

/// An explicit schema rule declared for a single parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamRule {
    /// The schema text the parameter is validated against.
    pub schema: String,
    /// Propagate the validation failure instead of substituting a default.
    pub raise_on_failure: bool,
}

impl ParamRule {
    /// Rule that substitutes a default on failure.
    pub fn new(schema: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            raise_on_failure: false,
        }
    }

    /// Rule that propagates the failure to the caller.
    pub fn raising(schema: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            raise_on_failure: true,
        }
    }
}

/// Classifies a value by runtime shape and returns the matching
/// implicit non-empty schema.
///
/// Structural, not nominal: a string is anything string-shaped after
/// normalization, regardless of the host type it came from.
pub fn implicit_schema_for(value: &Value) -> &'static str {
    match value {
        Value::String(_) => NON_EMPTY_STRING,
        Value::Array(_) => NON_EMPTY_ARRAY,
        Value::Object(_) => NON_EMPTY_OBJECT,
        _ => NOT_NULL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_method_rules_defaults_match_strict() {
        let rules = MethodRules::default();
        assert!(!rules.allow_null);
        assert!(!rules.allow_empty);
        assert!(!rules.raise_on_failure);
        assert_eq!(rules, MethodRules::strict());
    }

    #[test]
    fn test_method_rules_builders() {
        let rules = MethodRules::strict().allow_null().raise_on_failure();
        assert!(rules.allow_null);
        assert!(!rules.allow_empty);
        assert!(rules.raise_on_failure);
    }

    #[test]
    fn test_implicit_classification_by_shape() {
        assert_eq!(implicit_schema_for(&json!("s")), NON_EMPTY_STRING);
        assert_eq!(implicit_schema_for(&json!([1])), NON_EMPTY_ARRAY);
        assert_eq!(implicit_schema_for(&json!({"k": 1})), NON_EMPTY_OBJECT);
        assert_eq!(implicit_schema_for(&json!(42)), NOT_NULL);
        assert_eq!(implicit_schema_for(&json!(1.5)), NOT_NULL);
        assert_eq!(implicit_schema_for(&json!(true)), NOT_NULL);
        assert_eq!(implicit_schema_for(&json!(null)), NOT_NULL);
    }
}
