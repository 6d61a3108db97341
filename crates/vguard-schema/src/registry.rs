//! # Schema Registry
//!
//! Concurrent compile-once cache: schema text → compiled validator.
//!
//! ## Caching Invariants
//!
//! - The cache key is the schema text itself. Two textually distinct
//!   schemas are distinct entries even when semantically equivalent.
//! - Lookup of a cached schema never blocks behind compilation.
//! - A first-use race may compile the same text more than once; the
//!   instance installed first wins and every caller observes it from
//!   then on. Losing compilations are discarded.
//! - Compilation failures are never cached: the next call retries the
//!   compiler, so a transient compiler issue cannot poison a key.
//! - No TTL, no eviction: the schema set is bounded by program source,
//!   not by request data.

use std::sync::Arc;

use dashmap::DashMap;
use serde_json::Value;
use tracing::debug;

use vguard_core::{normalize, ValidationOutcome};

use crate::compiler::{CompiledSchema, JsonSchemaCompiler, SchemaCompiler};
use crate::engine::ValidationEngine;
use crate::error::SchemaError;

/// Concurrent cache of compiled schemas, keyed by schema text.
pub struct SchemaRegistry {
    compiler: Arc<dyn SchemaCompiler>,
    cache: DashMap<String, Arc<dyn CompiledSchema>>,
}

impl SchemaRegistry {
    /// Creates a registry over the default `jsonschema`-backed compiler.
    pub fn new() -> Self {
        Self::with_compiler(Arc::new(JsonSchemaCompiler))
    }

    /// Creates a registry over a caller-supplied compiler.
    pub fn with_compiler(compiler: Arc<dyn SchemaCompiler>) -> Self {
        Self {
            compiler,
            cache: DashMap::new(),
        }
    }

    /// Returns the compiled validator for the given schema text,
    /// compiling it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Compilation`] if the compiler rejects the
    /// text. The failure is not cached.
    pub fn get_or_compile(
        &self,
        schema_text: &str,
    ) -> Result<Arc<dyn CompiledSchema>, SchemaError> {
        if let Some(compiled) = self.cache.get(schema_text) {
            return Ok(compiled.value().clone());
        }

        // Compile outside the map so a slow compilation of one schema
        // never blocks cached lookups. Racing compilations of the same
        // text are possible; or_insert keeps the first one installed.
        let compiled = self.compiler.compile(schema_text)?;
        debug!(schema = schema_text, "compiled schema");

        let entry = self
            .cache
            .entry(schema_text.to_string())
            .or_insert(compiled);
        Ok(entry.value().clone())
    }

    /// Validates a normalized instance against the schema text,
    /// compiling through the cache.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Compilation`] for a rejected schema and
    /// [`SchemaError::ValidationFailed`] with the ordered violations
    /// when the instance does not satisfy it.
    pub fn validate(&self, schema_text: &str, instance: &Value) -> Result<(), SchemaError> {
        debug!(schema = schema_text, "validating instance");
        let compiled = self.get_or_compile(schema_text)?;
        match ValidationEngine::evaluate(compiled.as_ref(), instance) {
            ValidationOutcome::Valid => Ok(()),
            ValidationOutcome::Invalid(violations) => Err(SchemaError::ValidationFailed {
                schema_text: schema_text.to_string(),
                violations,
            }),
        }
    }

    /// Normalizes any serializable value and validates it.
    pub fn validate_value<T: serde::Serialize>(
        &self,
        schema_text: &str,
        value: &T,
    ) -> Result<(), SchemaError> {
        self.validate(schema_text, &normalize(value))
    }

    /// Number of schemas currently cached.
    pub fn cached_count(&self) -> usize {
        self.cache.len()
    }

    /// Returns true if the schema text already has a compiled entry.
    pub fn is_cached(&self, schema_text: &str) -> bool {
        self.cache.contains_key(schema_text)
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SchemaRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaRegistry")
            .field("cached", &self.cache.len())
            .finish()
    }
}
