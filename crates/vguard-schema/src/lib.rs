//! # vguard-schema — Schema Compilation & Validation
//!
//! Compiles JSON Schema text into reusable validators, caches them by
//! schema text, and evaluates structural values against them.
//!
//! ## Compile-Once Cache (`registry`)
//!
//! [`SchemaRegistry`] owns a concurrent map from schema text to compiled
//! validator. Lookup of an already-cached schema never blocks behind
//! compilation; a first-use race may compile the same text twice, but
//! all callers converge on whichever instance was installed first.
//! Compilation failures are never cached; every subsequent attempt
//! retries the compiler.
//!
//! ## Compiler Seam (`compiler`)
//!
//! The concrete evaluator is hidden behind the [`SchemaCompiler`] and
//! [`CompiledSchema`] traits. The default implementation,
//! [`JsonSchemaCompiler`], wraps the `jsonschema` crate; alternative
//! dialects plug in without touching the registry or the engine.
//!
//! ## Validation Engine (`engine`)
//!
//! [`ValidationEngine::evaluate`] is a pure function from a compiled
//! schema and an instance to a [`ValidationOutcome`]; violations are
//! passed through in the evaluator's reported order.

pub mod compiler;
pub mod engine;
pub mod error;
pub mod registry;

pub use compiler::{CompiledSchema, JsonSchemaCompiler, SchemaCompiler};
pub use engine::ValidationEngine;
pub use error::SchemaError;
pub use registry::SchemaRegistry;
