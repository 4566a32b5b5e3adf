//! The description-vs-item comparison engine.
//!
//! Every property category is checked independently: a category the
//! description does not constrain is satisfied vacuously. Failures collect
//! into a mismatch set; a failing tag listed in the caller's non-breakers
//! set lets the comparison continue, any other failure returns the set
//! immediately. An absent item or unreadable metadata is terminal either
//! way.
//!
//! Description entries that cannot be used (no field present, or a named
//! constant that does not resolve) are excluded from the comparison and from
//! the `Exact` expected count. That exclusion is deliberate and matches the
//! builder's soft-fail skip of the same entries.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use itemloom_foundation::{EvalContext, ImSet, Result};
use itemloom_item::{Enchant, Item, ItemMeta, ProfileTexturesCodec, TexturesCodec};
use itemloom_template::{EffectEntry, ItemDescription, PatternEntry};

use crate::mismatch::Mismatch;

/// Policy for how a repeatable group's description entries must relate to a
/// concrete item's entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Every usable description entry must find at least one satisfying
    /// concrete entry.
    #[default]
    AtLeast,
    /// As [`MatchMode::AtLeast`], plus the concrete entry count must equal
    /// the usable description entry count.
    Exact,
    /// No usable description entry may find a satisfying concrete entry.
    NoneOf,
}

/// Per-group matching policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GroupPolicy {
    /// The matching mode for the group.
    pub mode: MatchMode,
    /// Independently requires the concrete item to have zero entries in the
    /// group, regardless of the description's own entries.
    pub disallow: bool,
}

/// Matching policies for the three entry-record groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchPolicy {
    /// Policy for enchantments.
    pub enchantments: GroupPolicy,
    /// Policy for custom effects.
    pub custom_effects: GroupPolicy,
    /// Policy for banner patterns.
    pub patterns: GroupPolicy,
}

/// Compares concrete items against a description.
#[derive(Clone)]
pub struct ItemMatcher {
    description: ItemDescription,
    policy: MatchPolicy,
    textures_codec: Arc<dyn TexturesCodec>,
}

impl ItemMatcher {
    /// Creates a matcher for a description with the default policy
    /// (`AtLeast` everywhere, nothing disallowed).
    #[must_use]
    pub fn new(description: ItemDescription) -> Self {
        Self {
            description,
            policy: MatchPolicy::default(),
            textures_codec: Arc::new(ProfileTexturesCodec::new()),
        }
    }

    /// Replaces the matching policy.
    #[must_use]
    pub fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replaces the texture codec used to read texture blobs.
    #[must_use]
    pub fn with_textures_codec(mut self, codec: Arc<dyn TexturesCodec>) -> Self {
        self.textures_codec = codec;
        self
    }

    /// Returns true if the item satisfies the description with no mismatch.
    ///
    /// # Errors
    ///
    /// Propagates evaluator faults.
    pub fn matches(&self, item: Option<&Item>, context: &EvalContext) -> Result<bool> {
        Ok(self.mismatches(item, &ImSet::new(), context)?.is_empty())
    }

    /// Compares an item against the description and returns the mismatch
    /// set.
    ///
    /// With an empty `non_breakers` set this is first-failure behavior; with
    /// [`Mismatch::all`] it is a full diagnostic report. An absent item or
    /// unreadable metadata ends the comparison regardless of `non_breakers`.
    ///
    /// # Errors
    ///
    /// Propagates evaluator faults.
    #[allow(clippy::too_many_lines)]
    pub fn mismatches(
        &self,
        item: Option<&Item>,
        non_breakers: &ImSet<Mismatch>,
        context: &EvalContext,
    ) -> Result<ImSet<Mismatch>> {
        let mut found = ImSet::new();

        macro_rules! fail {
            ($tag:expr) => {{
                let tag = $tag;
                found = found.insert(tag);
                if !non_breakers.contains(&tag) {
                    return Ok(found);
                }
            }};
        }

        let Some(item) = item else {
            return Ok(found.insert(Mismatch::Absent));
        };

        // Unreadable metadata is terminal before any constraint is evaluated,
        // even when the description only names kind or amount.
        let Some(meta) = item.meta() else {
            return Ok(found.insert(Mismatch::UnreadableMeta));
        };

        if let Some(kind) = &self.description.kind {
            if let Some(expected) = kind.as_item_kind(context)? {
                if expected != item.kind() {
                    fail!(Mismatch::Kind);
                }
            }
        }

        if let Some(amount) = &self.description.amount {
            if let Some(expected) = amount.as_int(context)? {
                if expected != item.amount() {
                    fail!(Mismatch::Amount);
                }
            }
        }

        if let Some(name) = &self.description.display_name {
            if let Some(expected) = name.as_string(context)? {
                if meta.display_name() != Some(expected.as_str()) {
                    fail!(Mismatch::DisplayName);
                }
            }
        }

        if let Some(lore) = &self.description.lore {
            let expected = lore.as_string_list(context)?;
            let actual = meta.lore().cloned().unwrap_or_default();
            if actual != expected {
                fail!(Mismatch::Lore);
            }
        }

        if let Some(flags) = &self.description.flags {
            let expected = flags.as_flag_set(context)?;
            if *meta.flags() != expected {
                fail!(Mismatch::Flags);
            }
        }

        if let Some(color) = &self.description.color {
            if let Some(expected) = color.as_rgb(context)? {
                if meta.color() != Some(expected) {
                    fail!(Mismatch::Color);
                }
            }
        }

        if !self.enchantments_ok(meta, context)? {
            fail!(Mismatch::Enchantments);
        }

        if let Some(textures) = &self.description.textures {
            if let Some(expected) = textures.as_string(context)? {
                if self.textures_codec.encoded(meta).as_deref() != Some(expected.as_str()) {
                    fail!(Mismatch::Textures);
                }
            }
        }

        if let Some(entry) = &self.description.base_effect {
            let expected_kind = match &entry.kind {
                Some(kind) => kind.as_potion_kind(context)?,
                None => None,
            };
            if let Some(expected_kind) = expected_kind {
                let satisfied = match meta.base_effect() {
                    Some(base) if base.kind == expected_kind => {
                        let mut ok = true;
                        if let Some(extended) = &entry.extended {
                            ok &= extended.as_bool(context)?.unwrap_or(false) == base.extended;
                        }
                        if let Some(upgraded) = &entry.upgraded {
                            ok &= upgraded.as_bool(context)?.unwrap_or(false) == base.upgraded;
                        }
                        ok
                    }
                    _ => false,
                };
                if !satisfied {
                    fail!(Mismatch::BaseEffect);
                }
            }
        }

        if !self.custom_effects_ok(meta, context)? {
            fail!(Mismatch::CustomEffects);
        }

        if !self.patterns_ok(meta, context)? {
            fail!(Mismatch::Patterns);
        }

        Ok(found)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn enchantments_ok(&self, meta: &ItemMeta, context: &EvalContext) -> Result<bool> {
        let policy = self.policy.enchantments;
        let concrete = meta.enchants();
        if policy.disallow && !concrete.is_empty() {
            return Ok(false);
        }

        let mut queries: Vec<(Option<Enchant>, Option<i32>)> = Vec::new();
        for entry in &self.description.enchantments {
            let enchant = match &entry.enchant {
                Some(enchant) => match enchant.as_enchantment(context)? {
                    Some(enchant) => Some(enchant),
                    None => {
                        debug!("enchantment entry did not resolve, excluding from match");
                        continue;
                    }
                },
                None => None,
            };
            let level = match &entry.level {
                Some(level) => level.as_int(context)?.map(|l| l as i32),
                None => None,
            };
            if enchant.is_none() && level.is_none() {
                continue;
            }
            queries.push((enchant, level));
        }

        let mut all = true;
        let mut any = false;
        for (enchant, level) in &queries {
            let satisfied = enchantment_present(concrete, *enchant, *level);
            all &= satisfied;
            any |= satisfied;
        }

        Ok(match policy.mode {
            MatchMode::AtLeast => all,
            MatchMode::Exact => all && concrete.len() == queries.len(),
            MatchMode::NoneOf => !any,
        })
    }

    fn custom_effects_ok(&self, meta: &ItemMeta, context: &EvalContext) -> Result<bool> {
        let policy = self.policy.custom_effects;
        let concrete = meta.custom_effects();
        if policy.disallow && !concrete.is_empty() {
            return Ok(false);
        }

        let mut usable = 0usize;
        let mut all = true;
        let mut any = false;
        for entry in &self.description.custom_effects {
            if !effect_entry_usable(entry, context)? {
                debug!("custom effect entry unusable, excluding from match");
                continue;
            }
            usable += 1;

            let mut satisfied = false;
            for effect in concrete {
                if entry.describes_effect(effect, context)? == Some(true) {
                    satisfied = true;
                    break;
                }
            }
            all &= satisfied;
            any |= satisfied;
        }

        Ok(match policy.mode {
            MatchMode::AtLeast => all,
            MatchMode::Exact => all && concrete.len() == usable,
            MatchMode::NoneOf => !any,
        })
    }

    fn patterns_ok(&self, meta: &ItemMeta, context: &EvalContext) -> Result<bool> {
        let policy = self.policy.patterns;
        let concrete = meta.patterns();
        if policy.disallow && !concrete.is_empty() {
            return Ok(false);
        }

        let mut usable = 0usize;
        let mut all = true;
        let mut any = false;
        for entry in &self.description.patterns {
            if !pattern_entry_usable(entry, context)? {
                debug!("pattern entry unusable, excluding from match");
                continue;
            }
            usable += 1;

            let mut satisfied = false;
            for pattern in concrete {
                if entry.describes_pattern(pattern, context)? == Some(true) {
                    satisfied = true;
                    break;
                }
            }
            all &= satisfied;
            any |= satisfied;
        }

        Ok(match policy.mode {
            MatchMode::AtLeast => all,
            MatchMode::Exact => all && concrete.len() == usable,
            MatchMode::NoneOf => !any,
        })
    }
}

impl fmt::Debug for ItemMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemMatcher")
            .field("description", &self.description)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

/// Whether a single enchantment query is satisfied by a concrete enchant
/// table.
///
/// A query with both parts absent is vacuously satisfied. An enchant without
/// a level asks for presence at any level; a level without an enchant asks
/// for any enchantment at that level.
fn enchantment_present(
    concrete: &BTreeMap<Enchant, i32>,
    enchant: Option<Enchant>,
    level: Option<i32>,
) -> bool {
    match (enchant, level) {
        (Some(enchant), Some(level)) => concrete.get(&enchant) == Some(&level),
        (Some(enchant), None) => concrete.contains_key(&enchant),
        (None, Some(level)) => concrete.values().any(|v| *v == level),
        (None, None) => true,
    }
}

/// An effect entry is usable when it constrains something and its kind, if
/// given, names a known effect.
fn effect_entry_usable(entry: &EffectEntry, context: &EvalContext) -> Result<bool> {
    let has_any = entry.kind.is_some()
        || entry.duration.is_some()
        || entry.amplifier.is_some()
        || entry.ambient.is_some()
        || entry.particles.is_some()
        || entry.icon.is_some();
    if !has_any {
        return Ok(false);
    }
    if let Some(kind) = &entry.kind {
        if kind.as_effect_kind(context)?.is_none() {
            return Ok(false);
        }
    }
    Ok(true)
}

/// A pattern entry is usable when it constrains something and each present
/// field names a known constant.
fn pattern_entry_usable(entry: &PatternEntry, context: &EvalContext) -> Result<bool> {
    if entry.shape.is_none() && entry.color.is_none() {
        return Ok(false);
    }
    if let Some(shape) = &entry.shape {
        if shape.as_pattern_shape(context)?.is_none() {
            return Ok(false);
        }
    }
    if let Some(color) = &entry.color {
        if color.as_dye_color(context)?.is_none() {
            return Ok(false);
        }
    }
    Ok(true)
}
