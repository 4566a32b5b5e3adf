//! Integration tests for matching modes
//!
//! Covers AtLeast, Exact, NoneOf, and the per-group disallow toggle over
//! the three entry-record groups.

use itemloom_foundation::EvalContext;
use itemloom_item::{BannerPattern, DyeColor, Enchant, Item, ItemKind, PatternShape};
use itemloom_match::{GroupPolicy, ItemMatcher, MatchMode, MatchPolicy, Mismatch};
use itemloom_template::{EnchantEntry, Evaluable, ItemDescription, PatternEntry};

fn ctx() -> EvalContext {
    EvalContext::new()
}

fn entry(name: &str, level: Option<i64>) -> EnchantEntry {
    EnchantEntry {
        enchant: Some(Evaluable::literal(name)),
        level: level.map(Evaluable::literal),
    }
}

fn enchanted_sword(levels: &[(Enchant, i32)]) -> Item {
    let mut item = Item::new(ItemKind::DiamondSword, 1);
    for (enchant, level) in levels {
        item.meta_mut().unwrap().add_enchant(*enchant, *level);
    }
    item
}

fn enchant_policy(mode: MatchMode, disallow: bool) -> MatchPolicy {
    MatchPolicy {
        enchantments: GroupPolicy { mode, disallow },
        ..MatchPolicy::default()
    }
}

// =============================================================================
// AtLeast vs Exact
// =============================================================================

#[test]
fn at_least_ignores_surplus_entries() {
    let description = ItemDescription {
        enchantments: vec![entry("SHARPNESS", Some(5))],
        ..ItemDescription::default()
    };
    let item = enchanted_sword(&[(Enchant::Sharpness, 5), (Enchant::Looting, 3)]);

    let matcher = ItemMatcher::new(description);
    assert!(matcher.matches(Some(&item), &ctx()).unwrap());
}

#[test]
fn exact_requires_matching_counts() {
    let description = || ItemDescription {
        enchantments: vec![entry("SHARPNESS", Some(5))],
        ..ItemDescription::default()
    };
    let surplus = enchanted_sword(&[(Enchant::Sharpness, 5), (Enchant::Looting, 3)]);
    let precise = enchanted_sword(&[(Enchant::Sharpness, 5)]);

    let exact =
        ItemMatcher::new(description()).with_policy(enchant_policy(MatchMode::Exact, false));
    let set = exact
        .mismatches(Some(&surplus), &Mismatch::all(), &ctx())
        .unwrap();
    assert!(set.contains(&Mismatch::Enchantments));
    assert!(exact.matches(Some(&precise), &ctx()).unwrap());

    let at_least =
        ItemMatcher::new(description()).with_policy(enchant_policy(MatchMode::AtLeast, false));
    assert!(at_least.matches(Some(&surplus), &ctx()).unwrap());
}

#[test]
fn exact_does_not_count_unresolvable_entries() {
    let description = ItemDescription {
        enchantments: vec![entry("SHARPNESS", Some(5)), entry("PHANTOM_EDGE", None)],
        ..ItemDescription::default()
    };
    let item = enchanted_sword(&[(Enchant::Sharpness, 5)]);

    let matcher =
        ItemMatcher::new(description).with_policy(enchant_policy(MatchMode::Exact, false));
    assert!(matcher.matches(Some(&item), &ctx()).unwrap());
}

// =============================================================================
// NoneOf and disallow
// =============================================================================

#[test]
fn none_of_forbids_described_entries() {
    let description = ItemDescription {
        enchantments: vec![entry("SHARPNESS", None)],
        ..ItemDescription::default()
    };
    let matcher =
        ItemMatcher::new(description).with_policy(enchant_policy(MatchMode::NoneOf, false));

    assert!(!matcher
        .matches(Some(&enchanted_sword(&[(Enchant::Sharpness, 1)])), &ctx())
        .unwrap());
    assert!(matcher
        .matches(Some(&enchanted_sword(&[(Enchant::Mending, 1)])), &ctx())
        .unwrap());
}

#[test]
fn disallow_requires_zero_concrete_entries() {
    let matcher = ItemMatcher::new(ItemDescription::default())
        .with_policy(enchant_policy(MatchMode::AtLeast, true));

    assert!(!matcher
        .matches(Some(&enchanted_sword(&[(Enchant::Thorns, 1)])), &ctx())
        .unwrap());
    assert!(matcher.matches(Some(&enchanted_sword(&[])), &ctx()).unwrap());
}

// =============================================================================
// Patterns group
// =============================================================================

#[test]
fn pattern_entries_follow_the_same_modes() {
    let mut banner = Item::new(ItemKind::RedBanner, 1);
    banner.meta_mut().unwrap().add_pattern(BannerPattern {
        shape: PatternShape::Skull,
        color: DyeColor::Black,
    });

    let description = || ItemDescription {
        patterns: vec![PatternEntry {
            shape: Some(Evaluable::literal("SKULL")),
            color: Some(Evaluable::literal("BLACK")),
        }],
        ..ItemDescription::default()
    };

    assert!(ItemMatcher::new(description())
        .matches(Some(&banner), &ctx())
        .unwrap());

    let none_of = ItemMatcher::new(description()).with_policy(MatchPolicy {
        patterns: GroupPolicy {
            mode: MatchMode::NoneOf,
            disallow: false,
        },
        ..MatchPolicy::default()
    });
    assert!(!none_of.matches(Some(&banner), &ctx()).unwrap());
}
