//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Value, Error, the constant cache, persistent
//! collections, and the color-code translator.

mod collections;
mod errors;
mod registry;
mod text;
