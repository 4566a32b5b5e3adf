//! Concrete item representation for itemloom.
//!
//! This crate provides:
//! - [`Item`] - A concrete item (kind, amount, metadata)
//! - [`ItemMeta`] / [`SubMeta`] - Metadata with shape-dispatched sub-records
//! - The fixed constant universes ([`ItemKind`], [`ItemFlag`], [`Enchant`],
//!   [`EffectKind`], [`PotionKind`], [`PatternShape`], [`DyeColor`])
//! - [`TexturesCodec`] - The texture blob capability seam

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod item;
pub mod kinds;
pub mod meta;
pub mod textures;

pub use item::Item;
pub use kinds::{DyeColor, Enchant, EffectKind, ItemFlag, ItemKind, PatternShape, PotionKind, Rgb};
pub use meta::{BannerPattern, BaseEffect, EffectInstance, ItemMeta, SubMeta};
pub use textures::{ProfileTexturesCodec, TexturesCodec};
