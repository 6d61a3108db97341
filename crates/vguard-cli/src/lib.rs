//! # vguard-cli — Validation Guard Command-Line Interface
//!
//! Thin clap front-end over the vguard library crates.
//!
//! ## Subcommands
//!
//! - `validate` — Validate JSON/YAML documents against a schema file or
//!   a named built-in guard rule.
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from handler logic.
//! - Handlers delegate to the library crates — no validation logic here.

pub mod validate;
