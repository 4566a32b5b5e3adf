//! Build-then-match consistency
//!
//! An item built from a description should satisfy a matcher over the same
//! description, and stop satisfying it once the item drifts.

use itemloom_foundation::EvalContext;
use itemloom_item::{Enchant, ItemKind};
use itemloom_match::{GroupPolicy, ItemMatcher, MatchMode, MatchPolicy, Mismatch};
use itemloom_template::{EnchantEntry, Evaluable, ItemDescription};

fn ctx() -> EvalContext {
    EvalContext::new()
}

fn reward_description() -> ItemDescription {
    ItemDescription {
        kind: Some(Evaluable::literal("DIAMOND_SWORD")),
        amount: Some(Evaluable::literal(1i64)),
        display_name: Some(Evaluable::literal("&6Champion's Edge")),
        lore: Some(Evaluable::literal(vec!["&7Forged for the arena"])),
        flags: Some(Evaluable::literal("HIDE_ATTRIBUTES")),
        enchantments: vec![
            EnchantEntry {
                enchant: Some(Evaluable::literal("SHARPNESS")),
                level: Some(Evaluable::literal(5i64)),
            },
            EnchantEntry {
                enchant: Some(Evaluable::literal("FIRE_ASPECT")),
                level: Some(Evaluable::literal(2i64)),
            },
        ],
        ..ItemDescription::default()
    }
}

#[test]
fn built_items_satisfy_their_own_description() {
    let description = reward_description();
    let built = description.as_builder().build(&ctx()).unwrap();

    let matcher = ItemMatcher::new(description).with_policy(MatchPolicy {
        enchantments: GroupPolicy {
            mode: MatchMode::Exact,
            disallow: false,
        },
        ..MatchPolicy::default()
    });
    assert!(matcher.matches(Some(&built), &ctx()).unwrap());
}

#[test]
fn drifted_items_report_exactly_what_changed() {
    let description = reward_description();
    let mut drifted = description.as_builder().build(&ctx()).unwrap();
    drifted.set_amount(64);
    drifted
        .meta_mut()
        .unwrap()
        .add_enchant(Enchant::Knockback, 2);

    let matcher = ItemMatcher::new(description).with_policy(MatchPolicy {
        enchantments: GroupPolicy {
            mode: MatchMode::Exact,
            disallow: false,
        },
        ..MatchPolicy::default()
    });
    let set = matcher
        .mismatches(Some(&drifted), &Mismatch::all(), &ctx())
        .unwrap();

    assert!(set.contains(&Mismatch::Amount));
    assert!(set.contains(&Mismatch::Enchantments));
    assert_eq!(set.len(), 2);
}

#[test]
fn copies_of_one_builder_match_identically() {
    let description = reward_description();
    let builder = description.as_builder();
    let original = builder.build(&ctx()).unwrap();
    let copied = builder.copy().build(&ctx()).unwrap();

    assert_eq!(original, copied);

    let matcher = ItemMatcher::new(description);
    assert!(matcher.matches(Some(&original), &ctx()).unwrap());
    assert!(matcher.matches(Some(&copied), &ctx()).unwrap());
}

#[test]
fn kind_drift_is_caught_first() {
    let description = reward_description();
    let mut drifted = description.as_builder().build(&ctx()).unwrap();
    drifted.set_kind(ItemKind::IronPickaxe);

    let matcher = ItemMatcher::new(description);
    let set = matcher
        .mismatches(Some(&drifted), &itemloom_foundation::ImSet::new(), &ctx())
        .unwrap();
    assert_eq!(set.len(), 1);
    assert!(set.contains(&Mismatch::Kind));
}
