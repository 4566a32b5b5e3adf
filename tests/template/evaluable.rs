//! Integration tests for Evaluable resolution
//!
//! Exercises typed reads against the item-crate constant universes, with
//! both literal and expression payloads.

use std::sync::Arc;

use itemloom_foundation::{ConstantCache, EvalContext, Value, VariableEvaluator};
use itemloom_item::{DyeColor, ItemFlag, ItemKind, Rgb};
use itemloom_template::Evaluable;

// =============================================================================
// Literals
// =============================================================================

#[test]
fn strings_always_get_color_translation() {
    let ev = Evaluable::literal("&cAlert");
    let ctx = EvalContext::new();
    assert_eq!(ev.as_string(&ctx).unwrap().as_deref(), Some("\u{a7}cAlert"));
}

#[test]
fn typed_reads_from_one_payload() {
    let ev = Evaluable::literal("3");
    let ctx = EvalContext::new();
    assert_eq!(ev.as_int(&ctx).unwrap(), Some(3));
    assert_eq!(ev.as_string(&ctx).unwrap().as_deref(), Some("3"));
}

#[test]
fn constants_resolve_through_the_shared_cache() {
    let cache = Arc::new(ConstantCache::new());
    let ctx = EvalContext::with_constants(Arc::clone(&cache));

    let ev = Evaluable::literal("iron_pickaxe");
    assert_eq!(ev.as_item_kind(&ctx).unwrap(), Some(ItemKind::IronPickaxe));

    // The cache now answers directly, through either handle.
    assert_eq!(
        cache.resolve::<ItemKind>("IRON_PICKAXE"),
        Some(ItemKind::IronPickaxe)
    );
}

#[test]
fn colors_accept_names_and_triples() {
    let ctx = EvalContext::new();
    assert_eq!(
        Evaluable::literal("CYAN").as_rgb(&ctx).unwrap(),
        Some(DyeColor::Cyan.rgb())
    );
    assert_eq!(
        Evaluable::literal("0 128 255").as_rgb(&ctx).unwrap(),
        Some(Rgb::new(0, 128, 255))
    );
    assert_eq!(Evaluable::literal("0 128").as_rgb(&ctx).unwrap(), None);
}

// =============================================================================
// Expressions
// =============================================================================

#[test]
fn expressions_resolve_lazily_per_context() {
    let ev = Evaluable::expression("rank", Arc::new(VariableEvaluator));

    let mut gold = EvalContext::new();
    gold.define("rank", "&6Gold");
    let mut iron = EvalContext::new();
    iron.define("rank", "&7Iron");

    assert_eq!(ev.as_string(&gold).unwrap().as_deref(), Some("\u{a7}6Gold"));
    assert_eq!(ev.as_string(&iron).unwrap().as_deref(), Some("\u{a7}7Iron"));
}

#[test]
fn expression_lists_resolve_to_lines() {
    let ev = Evaluable::expression("lore", Arc::new(VariableEvaluator));
    let mut ctx = EvalContext::new();
    ctx.define("lore", Value::from(vec!["&7one", "&7two"]));

    assert_eq!(
        ev.as_string_list(&ctx).unwrap(),
        vec!["\u{a7}7one".to_owned(), "\u{a7}7two".to_owned()]
    );
}

#[test]
fn expression_faults_are_errors_not_soft_fails() {
    let ev = Evaluable::expression("absent", Arc::new(VariableEvaluator));
    assert!(ev.as_string(&EvalContext::new()).is_err());
}

// =============================================================================
// Soft failure
// =============================================================================

#[test]
fn unknown_names_are_soft_failures() {
    let ctx = EvalContext::new();
    assert_eq!(
        Evaluable::literal("EXCALIBUR").as_enchantment(&ctx).unwrap(),
        None
    );

    let flags = Evaluable::literal(vec!["UNBREAKABLE", "bogus"])
        .as_flag_set(&ctx)
        .unwrap();
    assert_eq!(flags.len(), 1);
    assert!(flags.contains(&ItemFlag::Unbreakable));
}
