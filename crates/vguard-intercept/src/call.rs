//! # Intercepted Calls
//!
//! The collaborator boundary between the policy and the host's
//! interception mechanism. The policy only needs: the declared rules,
//! the argument values in declaration order, the declared return-type
//! descriptor, and a way to invoke the wrapped logic.

use serde_json::Value;

use vguard_core::TypeDescriptor;

use crate::rule::{MethodRules, ParamRule};

/// Error raised by the wrapped logic itself. Always propagated
/// unmodified; never converted into a default.
pub type CallError = Box<dyn std::error::Error + Send + Sync>;

/// A call-site as seen by the interception policy.
///
/// Supplied per intercepted call by the host mechanism (code
/// generation, decorator registration, or manual wrapping).
pub trait InterceptedCall {
    /// Diagnostic name of the call, for logging.
    fn name(&self) -> &str;

    /// Method-level rules, if the call declares them.
    fn method_rules(&self) -> Option<MethodRules>;

    /// Explicit rule for the parameter at `index`, if declared.
    fn param_rule(&self, index: usize) -> Option<&ParamRule>;

    /// Argument values in declaration order.
    fn arguments(&self) -> &[Value];

    /// Declared return-type descriptor, used for default substitution.
    fn return_type(&self) -> &TypeDescriptor;

    /// Invokes the wrapped logic and returns its result.
    fn proceed(&mut self) -> Result<Value, CallError>;
}

/// Manual-wrapping adapter: a closure plus declared metadata.
///
/// The bundled [`InterceptedCall`] implementation for hosts without a
/// code-generation step, and the harness the tests are built on.
pub struct FnCall<F>
where
    F: FnMut(&[Value]) -> Result<Value, CallError>,
{
    name: String,
    method_rules: Option<MethodRules>,
    param_rules: Vec<Option<ParamRule>>,
    args: Vec<Value>,
    return_type: TypeDescriptor,
    body: F,
}

impl<F> FnCall<F>
where
    F: FnMut(&[Value]) -> Result<Value, CallError>,
{
    /// Wraps `body` as an interceptable call with no arguments and no rules.
    pub fn new(name: impl Into<String>, return_type: TypeDescriptor, body: F) -> Self {
        Self {
            name: name.into(),
            method_rules: None,
            param_rules: Vec::new(),
            args: Vec::new(),
            return_type,
            body,
        }
    }

    /// Declares method-level rules for the call.
    pub fn with_method_rules(mut self, rules: MethodRules) -> Self {
        self.method_rules = Some(rules);
        self
    }

    /// Appends an argument with no explicit parameter rule.
    pub fn arg(mut self, value: Value) -> Self {
        self.args.push(value);
        self.param_rules.push(None);
        self
    }

    /// Appends an argument with an explicit parameter rule.
    pub fn checked_arg(mut self, value: Value, rule: ParamRule) -> Self {
        self.args.push(value);
        self.param_rules.push(Some(rule));
        self
    }
}

impl<F> InterceptedCall for FnCall<F>
where
    F: FnMut(&[Value]) -> Result<Value, CallError>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn method_rules(&self) -> Option<MethodRules> {
        self.method_rules
    }

    fn param_rule(&self, index: usize) -> Option<&ParamRule> {
        self.param_rules.get(index).and_then(|r| r.as_ref())
    }

    fn arguments(&self) -> &[Value] {
        &self.args
    }

    fn return_type(&self) -> &TypeDescriptor {
        &self.return_type
    }

    fn proceed(&mut self) -> Result<Value, CallError> {
        (self.body)(&self.args)
    }
}
