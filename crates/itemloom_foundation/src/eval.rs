//! The evaluation seam: contexts, raw payloads, and the expression engine.
//!
//! The expression language itself is out of scope; it is consumed through
//! the [`ExpressionEvaluator`] trait as an opaque collaborator. Everything a
//! resolution needs travels in the [`EvalContext`]: named variables plus a
//! shared handle to the [`ConstantCache`].

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::registry::ConstantCache;
use crate::value::Value;

/// The unevaluated payload of a template property: either a literal value
/// or an expression to be handed to the evaluator at read time.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum RawValue {
    /// A literal value, returned as-is on resolution.
    Literal(Value),
    /// Unevaluated expression text.
    Expression(Arc<str>),
}

impl fmt::Debug for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => write!(f, "{value:?}"),
            Self::Expression(expr) => write!(f, "expr({expr})"),
        }
    }
}

/// Resolves expression text to a raw value given a context.
///
/// Failures here are genuine faults (unknown variable, bad function call)
/// and propagate to the caller as fatal for that single resolution; they are
/// not part of the soft-fail taxonomy.
pub trait ExpressionEvaluator: Send + Sync {
    /// Evaluates `expression` against `context`.
    ///
    /// # Errors
    ///
    /// Returns an error when the expression cannot be resolved.
    fn evaluate(&self, expression: &str, context: &EvalContext) -> Result<Value>;
}

/// Evaluation context supplied to every resolution call.
///
/// Holds the named variables visible to expressions and a shared handle to
/// the process-wide constant cache. Contexts are cheap to construct per
/// viewer; the cache is meant to be shared across all of them.
#[derive(Clone)]
pub struct EvalContext {
    variables: HashMap<String, Value>,
    constants: Arc<ConstantCache>,
}

impl EvalContext {
    /// Creates an empty context with its own fresh constant cache.
    #[must_use]
    pub fn new() -> Self {
        Self::with_constants(Arc::new(ConstantCache::new()))
    }

    /// Creates an empty context sharing an existing constant cache.
    #[must_use]
    pub fn with_constants(constants: Arc<ConstantCache>) -> Self {
        Self {
            variables: HashMap::new(),
            constants,
        }
    }

    /// Defines a variable, replacing any previous binding.
    pub fn define(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.variables.insert(name.into(), value.into());
    }

    /// Looks up a variable by name.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Returns the constant cache handle.
    #[must_use]
    pub fn constants(&self) -> &ConstantCache {
        &self.constants
    }
}

impl Default for EvalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EvalContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvalContext")
            .field("variables", &self.variables)
            .finish_non_exhaustive()
    }
}

/// Minimal reference evaluator: treats the whole expression as a single
/// variable name and resolves it from the context.
///
/// This stands in for a full expression engine in tests and examples; real
/// deployments plug their own [`ExpressionEvaluator`] implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct VariableEvaluator;

impl ExpressionEvaluator for VariableEvaluator {
    fn evaluate(&self, expression: &str, context: &EvalContext) -> Result<Value> {
        let name = expression.trim();
        context
            .variable(name)
            .cloned()
            .ok_or_else(|| Error::undefined_variable(name))
    }
}
