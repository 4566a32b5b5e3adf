//! Cross-layer integration tests for itemloom
//!
//! Tests that verify correct interaction between multiple crates.

mod round_trip;
