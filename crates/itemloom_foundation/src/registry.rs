//! Memoized name-to-constant resolution.
//!
//! Constant universes (item kinds, flags, enchantments, ...) are fixed at
//! process start, so every `(type, normalized name)` lookup is memoized
//! forever, including negative results. The cache is an explicit, injectable
//! service rather than a hidden static; it is typically shared through an
//! [`EvalContext`](crate::eval::EvalContext) behind an `Arc`.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use tracing::trace;

/// A type with a fixed universe of named constants.
///
/// Lookup is case-insensitive over [`NamedConstant::name`]; the slice
/// returned by [`NamedConstant::constants`] must be stable for the lifetime
/// of the process.
pub trait NamedConstant: Copy + 'static {
    /// Returns every constant of this type, in declaration order.
    fn constants() -> &'static [Self];

    /// Returns the canonical name of this constant.
    fn name(&self) -> &'static str;
}

/// Thread-safe memoization of name-to-constant lookups.
///
/// Keys are `(TypeId, lowercased trimmed name)`; values are the index into
/// the type's constant slice, or an explicit not-found marker so repeated
/// misses never re-scan. There is no eviction and no invalidation: the
/// underlying universe never changes mid-process.
#[derive(Debug, Default)]
pub struct ConstantCache {
    entries: RwLock<HashMap<(TypeId, String), Option<usize>>>,
}

impl ConstantCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves a constant of type `T` by name.
    ///
    /// The name is trimmed and lowercased before lookup; a cache miss scans
    /// `T::constants()` case-insensitively and memoizes the outcome, found
    /// or not.
    pub fn resolve<T: NamedConstant>(&self, raw: &str) -> Option<T> {
        let key = (TypeId::of::<T>(), raw.trim().to_lowercase());

        {
            let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(slot) = entries.get(&key) {
                return slot.map(|index| T::constants()[index]);
            }
        }

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);

        // Double-checked: another thread may have scanned while we waited.
        if let Some(slot) = entries.get(&key) {
            return slot.map(|index| T::constants()[index]);
        }

        let found = T::constants()
            .iter()
            .position(|constant| constant.name().eq_ignore_ascii_case(&key.1));
        trace!(
            name = %key.1,
            universe = std::any::type_name::<T>(),
            found = found.is_some(),
            "scanned constant table"
        );

        entries.insert(key, found);
        found.map(|index| T::constants()[index])
    }

    /// Returns the number of memoized lookups, found and not-found alike.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true if nothing has been resolved through this cache yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
