//! Error types for the itemloom system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Only genuine evaluator faults surface as errors. User-data-shaped
//! problems (unknown constant names, malformed color triples, unresolvable
//! entries) are soft failures expressed as absent results, never as `Error`.

use std::fmt;

use thiserror::Error;

/// Result alias used across all itemloom crates.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for itemloom operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an expression evaluation error.
    #[must_use]
    pub fn evaluation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Evaluation(message.into()))
    }

    /// Creates an undefined variable error.
    #[must_use]
    pub fn undefined_variable(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UndefinedVariable(name.into()))
    }

    /// Attaches the property name being resolved, keeping any expression
    /// context already present.
    #[must_use]
    pub fn for_property(mut self, property: impl Into<String>) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_property(property));
        self
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The expression engine failed to resolve an expression.
    #[error("expression evaluation failed: {0}")]
    Evaluation(String),

    /// A variable referenced by an expression was not defined.
    #[error("undefined variable: {0}")]
    UndefinedVariable(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The property being resolved when the error occurred.
    pub property: Option<String>,
    /// The expression text that failed, if any.
    pub expression: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the property name.
    #[must_use]
    pub fn with_property(mut self, property: impl Into<String>) -> Self {
        self.property = Some(property.into());
        self
    }

    /// Sets the failing expression text.
    #[must_use]
    pub fn with_expression(mut self, expression: impl Into<String>) -> Self {
        self.expression = Some(expression.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(property) = &self.property {
            write!(f, "while resolving {property}")?;
        }
        if let Some(expression) = &self.expression {
            write!(f, " in expression `{expression}`")?;
        }
        Ok(())
    }
}
