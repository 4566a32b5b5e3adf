//! Core values, errors, constant resolution, and text translation for itemloom.
//!
//! This crate provides:
//! - [`Value`] - The raw value type template payloads resolve to
//! - [`Error`] - Rich error types for evaluator faults
//! - [`EvalContext`] / [`ExpressionEvaluator`] - The evaluation seam
//! - [`ConstantCache`] / [`NamedConstant`] - Memoized name-to-constant lookup
//! - Persistent collections ([`ImVec`], [`ImSet`])
//! - [`translate_color_codes`] - Shorthand markup translation

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod eval;
pub mod registry;
pub mod text;
pub mod value;

pub use collections::{ImSet, ImVec};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use eval::{EvalContext, ExpressionEvaluator, RawValue, VariableEvaluator};
pub use registry::{ConstantCache, NamedConstant};
pub use text::{FORMAT_MARKER, translate_color_codes};
pub use value::{Value, ValueType};
