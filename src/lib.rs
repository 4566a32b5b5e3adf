//! Itemloom - Layered item-template engine
//!
//! This crate re-exports all layers of the itemloom system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: itemloom_match      — Mismatch taxonomy, matching modes, comparison
//! Layer 2: itemloom_template   — Evaluables, descriptions, the item builder
//! Layer 1: itemloom_item       — Concrete items, metadata shapes, constants
//! Layer 0: itemloom_foundation — Value, errors, constant cache, color codes
//! ```

pub use itemloom_foundation as foundation;
pub use itemloom_item as item;
pub use itemloom_match as matching;
pub use itemloom_template as template;
