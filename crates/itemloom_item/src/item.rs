//! The concrete item: kind, amount, and optional metadata.

use crate::kinds::ItemKind;
use crate::meta::ItemMeta;

/// A concrete item.
///
/// The amount is a plain integer and is not clamped to any stack size;
/// producers decide what counts as a legal amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    kind: ItemKind,
    amount: i64,
    meta: Option<ItemMeta>,
}

impl Item {
    /// Creates an item with default metadata for its kind.
    #[must_use]
    pub fn new(kind: ItemKind, amount: i64) -> Self {
        Self {
            kind,
            amount,
            meta: Some(ItemMeta::for_kind(kind)),
        }
    }

    /// Creates an item without metadata.
    #[must_use]
    pub fn without_meta(kind: ItemKind, amount: i64) -> Self {
        Self {
            kind,
            amount,
            meta: None,
        }
    }

    /// Returns the item kind.
    #[must_use]
    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    /// Changes the item kind, reshaping existing metadata to fit.
    ///
    /// Generic metadata survives the change; shape-specific metadata survives
    /// only when the new kind has the same shape.
    pub fn set_kind(&mut self, kind: ItemKind) {
        self.kind = kind;
        if let Some(meta) = &self.meta {
            self.meta = Some(meta.reshaped_for(kind));
        }
    }

    /// Returns the amount.
    #[must_use]
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// Sets the amount.
    pub fn set_amount(&mut self, amount: i64) {
        self.amount = amount;
    }

    /// Returns the metadata.
    #[must_use]
    pub fn meta(&self) -> Option<&ItemMeta> {
        self.meta.as_ref()
    }

    /// Returns the metadata mutably.
    pub fn meta_mut(&mut self) -> Option<&mut ItemMeta> {
        self.meta.as_mut()
    }

    /// Replaces the metadata wholesale.
    pub fn set_meta(&mut self, meta: Option<ItemMeta>) {
        self.meta = meta;
    }
}
