//! Templating layer for itemloom.
//!
//! This crate provides:
//! - [`Evaluable`] - A typed, lazily-evaluated property (literal or expression)
//! - [`ItemDescription`] - A partial, optional-everywhere item description
//!   with per-group patch flags
//! - [`ItemBuilder`] - The layered accumulator that resolves descriptions
//!   into concrete items under override/extend semantics

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod builder;
pub mod description;
pub mod evaluable;

pub use builder::ItemBuilder;
pub use description::{
    BaseEffectEntry, EffectEntry, EnchantEntry, ItemDescription, PatchFlag, PatternEntry,
};
pub use evaluable::Evaluable;
