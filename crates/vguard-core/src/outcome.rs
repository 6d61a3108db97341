//! # Validation Outcomes
//!
//! Structured results of evaluating a value against a compiled schema:
//! individual [`Violation`]s, the ordered [`Violations`] collection, and
//! the [`ValidationOutcome`] the engine hands back to callers.
//!
//! ## Ordering Invariant
//!
//! Violations are kept in the order the underlying evaluator reported
//! them. Nothing in this module reorders, deduplicates, or truncates.

use std::fmt;

/// A single validation violation with structured context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON Pointer path to the violating field in the instance.
    pub instance_path: String,
    /// JSON Pointer path within the schema that triggered the error.
    pub schema_path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "  (root): {}", self.message)
        } else {
            write!(f, "  {}: {}", self.instance_path, self.message)
        }
    }
}

/// Ordered collection of validation violations.
///
/// Constructed from the evaluator's reported sequence and carried
/// through error types unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations {
    violations: Vec<Violation>,
}

impl Violations {
    /// Wraps a reported sequence of violations, preserving order.
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

/// Result of evaluating one value against one compiled schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The value satisfied the schema.
    Valid,
    /// The value did not satisfy the schema. Carries at least one violation.
    Invalid(Violations),
}

impl ValidationOutcome {
    /// Builds an outcome from a reported violation sequence: empty means valid.
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        if violations.is_empty() {
            ValidationOutcome::Valid
        } else {
            ValidationOutcome::Invalid(Violations::new(violations))
        }
    }

    /// Returns true if the value satisfied the schema.
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    /// Returns the violations, if any.
    pub fn violations(&self) -> Option<&Violations> {
        match self {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Invalid(v) => Some(v),
        }
    }
}
