//! Integration tests for the constant resolution cache
//!
//! Exercises the cache against the real item-crate constant universes.

use std::sync::Arc;
use std::thread;

use itemloom_foundation::ConstantCache;
use itemloom_item::{DyeColor, Enchant, ItemKind, PotionKind};

// =============================================================================
// Resolution
// =============================================================================

#[test]
fn resolution_normalizes_case_and_whitespace() {
    let cache = ConstantCache::new();
    assert_eq!(
        cache.resolve::<ItemKind>("  golden_apple  "),
        Some(ItemKind::GoldenApple)
    );
    assert_eq!(
        cache.resolve::<ItemKind>("GOLDEN_APPLE"),
        Some(ItemKind::GoldenApple)
    );
}

#[test]
fn unknown_names_resolve_to_none_repeatedly() {
    let cache = ConstantCache::new();
    assert_eq!(cache.resolve::<Enchant>("tickling"), None);
    assert_eq!(cache.resolve::<Enchant>("tickling"), None);
}

#[test]
fn universes_are_keyed_by_type() {
    let cache = ConstantCache::new();
    // The same name resolves independently per constant universe.
    assert_eq!(cache.resolve::<PotionKind>("LUCK"), Some(PotionKind::Luck));
    assert_eq!(cache.resolve::<DyeColor>("LUCK"), None);
}

// =============================================================================
// Concurrency
// =============================================================================

#[test]
fn concurrent_lookups_agree() {
    let cache = Arc::new(ConstantCache::new());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for _ in 0..200 {
                    assert_eq!(
                        cache.resolve::<ItemKind>("player_head"),
                        Some(ItemKind::PlayerHead)
                    );
                    assert_eq!(cache.resolve::<ItemKind>("nonsense"), None);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("lookup thread should not panic");
    }
}
