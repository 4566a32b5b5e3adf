//! Integration tests for patch layering
//!
//! Descriptions compose as layers; patch flags choose extend or override per
//! group, singleton fields win whenever a later layer provides them.

use itemloom_foundation::EvalContext;
use itemloom_item::{Enchant, Item, ItemFlag, ItemKind};
use itemloom_template::{EnchantEntry, Evaluable, ItemDescription, PatchFlag};

fn ctx() -> EvalContext {
    EvalContext::new()
}

// =============================================================================
// Layering rules
// =============================================================================

#[test]
fn patch_returns_a_new_builder() {
    let original = ItemDescription {
        display_name: Some(Evaluable::literal("First")),
        ..ItemDescription::default()
    }
    .as_builder();
    let before = original.build(&ctx()).unwrap();

    let layer = ItemDescription {
        display_name: Some(Evaluable::literal("Second")),
        ..ItemDescription::default()
    };
    let patched = original.patch(&layer);

    assert_eq!(original.build(&ctx()).unwrap(), before);
    assert_eq!(
        patched.build(&ctx()).unwrap().meta().unwrap().display_name(),
        Some("Second")
    );
}

#[test]
fn later_singletons_win_when_present() {
    let base = ItemDescription {
        amount: Some(Evaluable::literal(1i64)),
        display_name: Some(Evaluable::literal("Kept")),
        ..ItemDescription::default()
    };
    let layer = ItemDescription {
        amount: Some(Evaluable::literal(64i64)),
        ..ItemDescription::default()
    };

    let built = base.as_builder().patch(&layer).build(&ctx()).unwrap();
    assert_eq!(built.amount(), 64);
    assert_eq!(built.meta().unwrap().display_name(), Some("Kept"));
}

#[test]
fn groups_accumulate_without_the_override_flag() {
    let first = ItemDescription {
        lore: Some(Evaluable::literal("layer one")),
        enchantments: vec![EnchantEntry {
            enchant: Some(Evaluable::literal("UNBREAKING")),
            level: Some(Evaluable::literal(3i64)),
        }],
        ..ItemDescription::default()
    };
    let second = ItemDescription {
        lore: Some(Evaluable::literal("layer two")),
        enchantments: vec![EnchantEntry {
            enchant: Some(Evaluable::literal("MENDING")),
            level: None,
        }],
        ..ItemDescription::default()
    };

    let built = first
        .as_builder()
        .patch(&second)
        .build(&ctx())
        .unwrap();
    let meta = built.meta().unwrap();
    assert_eq!(
        meta.lore(),
        Some(&vec!["layer one".to_owned(), "layer two".to_owned()])
    );
    assert_eq!(meta.enchant_level(Enchant::Unbreaking), 3);
    assert_eq!(meta.enchant_level(Enchant::Mending), 1);
}

#[test]
fn override_flags_replace_one_group_wholesale() {
    let first = ItemDescription {
        lore: Some(Evaluable::literal("gone")),
        flags: Some(Evaluable::literal("HIDE_ENCHANTS")),
        ..ItemDescription::default()
    };
    let second = ItemDescription {
        lore: Some(Evaluable::literal(vec!["fresh"])),
        flags: Some(Evaluable::literal("UNBREAKABLE")),
        patch_flags: [PatchFlag::OverrideLore].into_iter().collect(),
        ..ItemDescription::default()
    };

    let built = first.as_builder().patch(&second).build(&ctx()).unwrap();
    let meta = built.meta().unwrap();

    // Lore carried the override flag; flags did not.
    assert_eq!(meta.lore(), Some(&vec!["fresh".to_owned()]));
    assert!(meta.flags().contains(&ItemFlag::HideEnchants));
    assert!(meta.flags().contains(&ItemFlag::Unbreakable));
}

#[test]
fn override_flag_without_a_value_clears_the_group() {
    let mut base = Item::new(ItemKind::Book, 1);
    base.meta_mut().unwrap().set_lore(Some(vec!["doomed".into()]));

    let layer = ItemDescription {
        patch_flags: [PatchFlag::OverrideLore].into_iter().collect(),
        ..ItemDescription::default()
    };

    let built = itemloom_template::ItemBuilder::new(base)
        .patch(&layer)
        .build(&ctx())
        .unwrap();
    assert_eq!(built.meta().unwrap().lore(), None);
}

// =============================================================================
// Description seeding
// =============================================================================

#[test]
fn as_builder_seeds_from_the_fallback_base() {
    let built = ItemDescription::default().as_builder().build(&ctx()).unwrap();
    assert_eq!(built.kind(), ItemKind::Barrier);
    assert_eq!(built.amount(), 1);
}
