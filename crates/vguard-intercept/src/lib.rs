//! # vguard-intercept — Call Interception & Fallback Policy
//!
//! Orchestrates validation at call boundaries: reads the rules a
//! call-site declares, validates arguments through the schema registry,
//! and on failure either raises or substitutes a type-appropriate
//! default return value. When a default is substituted, the wrapped
//! logic is never invoked.
//!
//! ## Two Rule Shapes
//!
//! - **Method-level** ([`MethodRules`]): shape-derived implicit rules
//!   over every argument, with a single raise-or-substitute flag.
//!   The first failing argument short-circuits the rest.
//! - **Parameter-level** ([`ParamRule`]): an explicit schema per
//!   annotated parameter, each with its own raise flag, validated
//!   independently in declaration order.
//!
//! A call-site may carry both; the method-level stage runs first, and
//! if it short-circuits, parameter-level rules are never evaluated.
//!
//! ## Host Boundary
//!
//! How calls get intercepted (codegen, decorators, manual wrapping) is
//! the host's concern. The policy only sees the [`InterceptedCall`]
//! trait; [`FnCall`] is the bundled manual-wrapping adapter.

pub mod call;
pub mod policy;
pub mod rule;

pub use call::{CallError, FnCall, InterceptedCall};
pub use policy::{InterceptError, InterceptionPolicy};
pub use rule::{implicit_schema_for, MethodRules, ParamRule};
