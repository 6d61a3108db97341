//! # vguard-core — Foundational Types for the Validation Guard
//!
//! This crate is the leaf of the vguard workspace. It defines the value
//! types shared by every other crate: structured violations, validation
//! outcomes, type descriptors, the fallback default resolver, and the
//! built-in guard schemas.
//!
//! ## Key Design Principles
//!
//! 1. **Structural values everywhere.** Every value flowing through the
//!    guard is a `serde_json::Value` tree produced by [`normalize`].
//!    Rules classify values by runtime shape, never by nominal type name.
//!
//! 2. **Violations are ordered and lossless.** A [`Violations`] list is
//!    never reordered, deduplicated, or truncated between the evaluator
//!    that produced it and the caller that reads it.
//!
//! 3. **Defaulting is total.** [`default_for`] returns *some* value for
//!    every [`TypeDescriptor`], degrading to `Value::Null` when nothing
//!    better exists. It is never a source of failure.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `vguard-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod default;
pub mod descriptor;
pub mod normalize;
pub mod outcome;
pub mod schemas;

// Re-export primary types for ergonomic imports.
pub use default::default_for;
pub use descriptor::{ConstructFn, TypeDescriptor};
pub use normalize::normalize;
pub use outcome::{ValidationOutcome, Violation, Violations};
pub use schemas::{NON_EMPTY_ARRAY, NON_EMPTY_OBJECT, NON_EMPTY_STRING, NOT_NULL};
