//! Comparison engine for itemloom.
//!
//! This crate provides:
//! - [`Mismatch`] - The closed taxonomy of comparison failures
//! - [`MatchMode`] / [`GroupPolicy`] / [`MatchPolicy`] - Per-group matching
//!   policies for repeatable entry groups
//! - [`ItemMatcher`] - Compares a concrete item against a description and
//!   produces a mismatch set with non-breaking semantics

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod matcher;
pub mod mismatch;

pub use matcher::{GroupPolicy, ItemMatcher, MatchMode, MatchPolicy};
pub use mismatch::Mismatch;
