//! # Compiler Seam
//!
//! Abstract interface over the schema dialect. The registry and engine
//! only ever see [`SchemaCompiler`] and [`CompiledSchema`]; the default
//! implementation wraps the `jsonschema` crate.
//!
//! ## Thread Safety
//!
//! Both traits require `Send + Sync`: compiled schemas are shared
//! across worker threads and evaluated concurrently once constructed.

use std::sync::Arc;

use serde_json::Value;

use vguard_core::Violation;

use crate::error::SchemaError;

/// A compiled, immutable schema ready for repeated evaluation.
///
/// Implementations must be pure: evaluation takes `&self`, holds no
/// mutable state, and is safe to call concurrently.
pub trait CompiledSchema: Send + Sync + std::fmt::Debug {
    /// Evaluates an instance, returning violations in reported order.
    /// An empty vector means the instance is valid.
    fn violations(&self, instance: &Value) -> Vec<Violation>;
}

/// Compiles schema text into a reusable [`CompiledSchema`].
pub trait SchemaCompiler: Send + Sync {
    /// Compiles the given schema text.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Compilation`] if the text is not valid
    /// JSON or is rejected by the underlying schema engine.
    fn compile(&self, schema_text: &str) -> Result<Arc<dyn CompiledSchema>, SchemaError>;
}

/// Default compiler backed by the `jsonschema` crate.
///
/// Pins Draft 2019-09 for schemas that do not declare `$schema`
/// themselves; schemas that do declare a draft keep it.
#[derive(Debug, Default)]
pub struct JsonSchemaCompiler;

impl SchemaCompiler for JsonSchemaCompiler {
    fn compile(&self, schema_text: &str) -> Result<Arc<dyn CompiledSchema>, SchemaError> {
        let schema_value: Value =
            serde_json::from_str(schema_text).map_err(|e| SchemaError::Compilation {
                schema_text: schema_text.to_string(),
                reason: format!("invalid JSON: {e}"),
            })?;

        let mut opts = jsonschema::options();
        opts.with_draft(jsonschema::Draft::Draft201909);

        let validator = opts
            .build(&schema_value)
            .map_err(|e| SchemaError::Compilation {
                schema_text: schema_text.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Arc::new(CompiledJsonSchema { validator }))
    }
}

/// A compiled JSON Schema validator.
#[derive(Debug)]
struct CompiledJsonSchema {
    validator: jsonschema::Validator,
}

impl CompiledSchema for CompiledJsonSchema {
    fn violations(&self, instance: &Value) -> Vec<Violation> {
        self.validator
            .iter_errors(instance)
            .map(|e| Violation {
                instance_path: e.instance_path.to_string(),
                schema_path: e.schema_path.to_string(),
                message: e.to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use vguard_core::{NON_EMPTY_ARRAY, NON_EMPTY_OBJECT, NON_EMPTY_STRING, NOT_NULL};

    #[test]
    fn test_compile_builtin_schemas() {
        let compiler = JsonSchemaCompiler;
        for text in [NOT_NULL, NON_EMPTY_ARRAY, NON_EMPTY_OBJECT, NON_EMPTY_STRING] {
            assert!(
                compiler.compile(text).is_ok(),
                "builtin schema failed to compile: {text}"
            );
        }
    }

    #[test]
    fn test_compile_rejects_malformed_json() {
        let compiler = JsonSchemaCompiler;
        let err = compiler.compile("{not json").unwrap_err();
        assert!(
            matches!(err, SchemaError::Compilation { .. }),
            "expected Compilation error, got: {err}"
        );
        assert!(err.to_string().contains("{not json"));
    }

    #[test]
    fn test_not_null_rejects_only_null() {
        let compiler = JsonSchemaCompiler;
        let schema = compiler.compile(NOT_NULL).unwrap();
        assert!(!schema.violations(&json!(null)).is_empty());
        assert!(schema.violations(&json!(0)).is_empty());
        assert!(schema.violations(&json!("")).is_empty());
        assert!(schema.violations(&json!([])).is_empty());
        assert!(schema.violations(&json!(false)).is_empty());
    }

    #[test]
    fn test_non_empty_string_violation_has_context() {
        let compiler = JsonSchemaCompiler;
        let schema = compiler.compile(NON_EMPTY_STRING).unwrap();
        let violations = schema.violations(&json!(""));
        assert_eq!(violations.len(), 1);
        assert!(violations[0].instance_path.is_empty());
        assert!(!violations[0].message.is_empty());
    }

    #[test]
    fn test_explicit_min_length_schema() {
        let compiler = JsonSchemaCompiler;
        let schema = compiler
            .compile(r#"{"type":"string","minLength":2}"#)
            .unwrap();
        assert!(!schema.violations(&json!("a")).is_empty());
        assert!(schema.violations(&json!("ab")).is_empty());
    }

    #[test]
    fn test_multiple_violations_keep_reported_order() {
        let compiler = JsonSchemaCompiler;
        let schema = compiler
            .compile(
                r#"{
                    "type": "object",
                    "required": ["a", "b"],
                    "properties": {
                        "c": {"type": "string"}
                    }
                }"#,
            )
            .unwrap();
        let violations = schema.violations(&json!({"c": 1}));
        assert!(violations.len() >= 2, "expected several violations");
    }
}
