//! The layered item builder.
//!
//! A builder accumulates description layers and resolves them into a
//! concrete [`Item`] at `build` time. Repeatable groups (lore, flags,
//! enchantments, custom effects, patterns) each carry an extend/override
//! state: extending appends to the accumulated list, overriding discards it
//! and replaces it with the incoming value. Overriding with nothing is the
//! explicit "clear" case, distinct from leaving the property untouched.
//!
//! Builders are not thread-shared. `copy` produces an independent instance;
//! the group lists are persistent vectors and the evaluables are Arc-backed,
//! so a copy shares everything structurally until one side diverges.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use itemloom_foundation::{EvalContext, ImVec, Result};
use itemloom_item::{
    BannerPattern, BaseEffect, EffectInstance, Item, ProfileTexturesCodec, TexturesCodec,
};

use crate::description::{
    BaseEffectEntry, EffectEntry, EnchantEntry, ItemDescription, PatchFlag, PatternEntry,
};
use crate::evaluable::Evaluable;

/// Extend/override state for one repeatable group.
#[derive(Debug, Clone)]
struct Group<T: Clone> {
    entries: ImVec<T>,
    overriding: bool,
}

impl<T: Clone> Default for Group<T> {
    fn default() -> Self {
        Self {
            entries: ImVec::new(),
            overriding: false,
        }
    }
}

impl<T: Clone> Group<T> {
    fn extend(&mut self, values: impl IntoIterator<Item = T>) {
        self.entries = self.entries.append(values);
        self.overriding = false;
    }

    fn override_with(&mut self, values: impl IntoIterator<Item = T>) {
        self.entries = ImVec::new().append(values);
        self.overriding = true;
    }
}

/// Accumulates description layers and resolves them into a concrete item.
#[derive(Clone)]
pub struct ItemBuilder {
    base: Item,
    kind: Option<Evaluable>,
    amount: Option<Evaluable>,
    display_name: Option<Evaluable>,
    color: Option<Evaluable>,
    textures: Option<Evaluable>,
    base_effect: Option<BaseEffectEntry>,
    lore: Group<Evaluable>,
    flags: Group<Evaluable>,
    enchants: Group<EnchantEntry>,
    effects: Group<EffectEntry>,
    patterns: Group<PatternEntry>,
    textures_codec: Arc<dyn TexturesCodec>,
}

impl ItemBuilder {
    /// Creates a builder over a base item. An untouched property resolves to
    /// whatever the base item has.
    #[must_use]
    pub fn new(base: Item) -> Self {
        Self {
            base,
            kind: None,
            amount: None,
            display_name: None,
            color: None,
            textures: None,
            base_effect: None,
            lore: Group::default(),
            flags: Group::default(),
            enchants: Group::default(),
            effects: Group::default(),
            patterns: Group::default(),
            textures_codec: Arc::new(ProfileTexturesCodec::new()),
        }
    }

    /// Replaces the texture codec used when applying texture blobs.
    #[must_use]
    pub fn with_textures_codec(mut self, codec: Arc<dyn TexturesCodec>) -> Self {
        self.textures_codec = codec;
        self
    }

    /// Returns an independent copy of this builder.
    ///
    /// Group lists and flags are cloned; the evaluables themselves are
    /// shared by reference since they are immutable.
    #[must_use]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    // ---- singleton fields --------------------------------------------------

    /// Sets the item kind.
    pub fn set_kind(&mut self, kind: Evaluable) {
        self.kind = Some(kind);
    }

    /// Sets the stack amount.
    pub fn set_amount(&mut self, amount: Evaluable) {
        self.amount = Some(amount);
    }

    /// Sets the display name.
    pub fn set_display_name(&mut self, name: Evaluable) {
        self.display_name = Some(name);
    }

    /// Sets the color.
    pub fn set_color(&mut self, color: Evaluable) {
        self.color = Some(color);
    }

    /// Sets the encoded texture blob.
    pub fn set_textures(&mut self, textures: Evaluable) {
        self.textures = Some(textures);
    }

    /// Sets the base effect.
    pub fn set_base_effect(&mut self, effect: BaseEffectEntry) {
        self.base_effect = Some(effect);
    }

    // ---- repeatable groups -------------------------------------------------

    /// Appends a lore contribution and switches the group to extending.
    pub fn extend_lore(&mut self, lore: Evaluable) {
        self.lore.extend([lore]);
    }

    /// Discards accumulated lore and switches the group to overriding.
    /// `None` clears the lore outright at build time.
    pub fn override_lore(&mut self, lore: Option<Evaluable>) {
        self.lore.override_with(lore);
    }

    /// Appends a flags contribution and switches the group to extending.
    pub fn extend_flags(&mut self, flags: Evaluable) {
        self.flags.extend([flags]);
    }

    /// Discards accumulated flags and switches the group to overriding.
    pub fn override_flags(&mut self, flags: Option<Evaluable>) {
        self.flags.override_with(flags);
    }

    /// Appends an enchantment entry and switches the group to extending.
    pub fn extend_enchantment(&mut self, entry: EnchantEntry) {
        self.enchants.extend([entry]);
    }

    /// Replaces accumulated enchantment entries and switches the group to
    /// overriding.
    pub fn override_enchantments(&mut self, entries: impl IntoIterator<Item = EnchantEntry>) {
        self.enchants.override_with(entries);
    }

    /// Appends a custom-effect entry and switches the group to extending.
    pub fn extend_custom_effect(&mut self, entry: EffectEntry) {
        self.effects.extend([entry]);
    }

    /// Replaces accumulated custom-effect entries and switches the group to
    /// overriding.
    pub fn override_custom_effects(&mut self, entries: impl IntoIterator<Item = EffectEntry>) {
        self.effects.override_with(entries);
    }

    /// Appends a pattern entry and switches the group to extending.
    pub fn extend_pattern(&mut self, entry: PatternEntry) {
        self.patterns.extend([entry]);
    }

    /// Replaces accumulated pattern entries and switches the group to
    /// overriding.
    pub fn override_patterns(&mut self, entries: impl IntoIterator<Item = PatternEntry>) {
        self.patterns.override_with(entries);
    }

    // ---- layering ----------------------------------------------------------

    /// Applies a description as a new layer on a copy of this builder.
    ///
    /// The receiver is never mutated. Singleton fields replace the current
    /// value only when the description provides one; group fields consult
    /// the description's patch flags to choose override or extend.
    #[must_use]
    pub fn patch(&self, description: &ItemDescription) -> Self {
        let mut next = self.copy();

        if let Some(kind) = &description.kind {
            next.set_kind(kind.clone());
        }
        if let Some(amount) = &description.amount {
            next.set_amount(amount.clone());
        }
        if let Some(name) = &description.display_name {
            next.set_display_name(name.clone());
        }
        if let Some(color) = &description.color {
            next.set_color(color.clone());
        }
        if let Some(textures) = &description.textures {
            next.set_textures(textures.clone());
        }
        if let Some(base) = &description.base_effect {
            next.set_base_effect(base.clone());
        }

        if description.overrides(PatchFlag::OverrideLore) {
            next.override_lore(description.lore.clone());
        } else if let Some(lore) = &description.lore {
            next.extend_lore(lore.clone());
        }

        if description.overrides(PatchFlag::OverrideFlags) {
            next.override_flags(description.flags.clone());
        } else if let Some(flags) = &description.flags {
            next.extend_flags(flags.clone());
        }

        if description.overrides(PatchFlag::OverrideEnchantments) {
            next.override_enchantments(description.enchantments.iter().cloned());
        } else {
            for entry in &description.enchantments {
                next.extend_enchantment(entry.clone());
            }
        }

        if description.overrides(PatchFlag::OverrideCustomEffects) {
            next.override_custom_effects(description.custom_effects.iter().cloned());
        } else {
            for entry in &description.custom_effects {
                next.extend_custom_effect(entry.clone());
            }
        }

        if description.overrides(PatchFlag::OverridePatterns) {
            next.override_patterns(description.patterns.iter().cloned());
        } else {
            for entry in &description.patterns {
                next.extend_pattern(entry.clone());
            }
        }

        next
    }

    // ---- resolution --------------------------------------------------------

    /// Resolves the accumulated layers into a concrete item.
    ///
    /// Application order is fixed: kind, amount, display name, lore, color,
    /// textures, base effect, custom effects, enchantments, flags, patterns.
    /// The kind goes first because it decides the metadata shape every later
    /// step dispatches on. Each step is independently optional; a property
    /// that fails to resolve softly is left as the base item has it.
    ///
    /// # Errors
    ///
    /// Propagates evaluator faults.
    #[allow(clippy::cast_possible_truncation, clippy::too_many_lines)]
    pub fn build(&self, context: &EvalContext) -> Result<Item> {
        trace!("resolving builder into a concrete item");
        let mut item = self.base.clone();

        if let Some(kind) = &self.kind {
            if let Some(kind) = named("kind", kind.as_item_kind(context))? {
                item.set_kind(kind);
            }
        }

        if let Some(amount) = &self.amount {
            if let Some(amount) = named("amount", amount.as_int(context))? {
                item.set_amount(amount);
            }
        }

        let Some(meta) = item.meta_mut() else {
            debug!("base item has no metadata, skipping metadata steps");
            return Ok(item);
        };

        if let Some(name) = &self.display_name {
            if let Some(name) = named("display-name", name.as_string(context))? {
                meta.set_display_name(Some(name));
            }
        }

        let mut lore_lines = Vec::new();
        for contribution in self.lore.entries.iter() {
            lore_lines.extend(named("lore", contribution.as_string_list(context))?);
        }
        if self.lore.overriding {
            meta.set_lore(if lore_lines.is_empty() {
                None
            } else {
                Some(lore_lines)
            });
        } else if !lore_lines.is_empty() {
            let mut lines = meta.lore().cloned().unwrap_or_default();
            lines.extend(lore_lines);
            meta.set_lore(Some(lines));
        }

        if let Some(color) = &self.color {
            if let Some(rgb) = named("color", color.as_rgb(context))? {
                meta.set_color(rgb);
            }
        }

        if let Some(textures) = &self.textures {
            if let Some(blob) = named("textures", textures.as_string(context))? {
                self.textures_codec.set_encoded(meta, &blob);
            }
        }

        if let Some(entry) = &self.base_effect {
            let kind = match &entry.kind {
                Some(kind) => named("base-effect", kind.as_potion_kind(context))?,
                None => None,
            };
            if let Some(kind) = kind {
                let upgraded = match &entry.upgraded {
                    Some(upgraded) => {
                        named("base-effect", upgraded.as_bool(context))?.unwrap_or(false)
                    }
                    None => false,
                };
                // upgraded and extended are mutually exclusive; upgraded wins.
                let extended = !upgraded
                    && match &entry.extended {
                        Some(extended) => {
                            named("base-effect", extended.as_bool(context))?.unwrap_or(false)
                        }
                        None => false,
                    };
                meta.set_base_effect(Some(BaseEffect {
                    kind,
                    extended,
                    upgraded,
                }));
            } else {
                debug!("base effect kind did not resolve, leaving base effect untouched");
            }
        }

        if self.effects.overriding {
            meta.clear_custom_effects();
        }
        for entry in self.effects.entries.iter() {
            let kind = match &entry.kind {
                Some(kind) => named("custom-effects", kind.as_effect_kind(context))?,
                None => None,
            };
            let duration = match &entry.duration {
                Some(duration) => named("custom-effects", duration.as_int(context))?,
                None => None,
            };
            let (Some(kind), Some(duration)) = (kind, duration) else {
                debug!("custom effect entry lacks kind or duration, skipping");
                continue;
            };
            let amplifier = match &entry.amplifier {
                Some(amplifier) => named("custom-effects", amplifier.as_int(context))?.unwrap_or(0),
                None => 0,
            };
            meta.add_custom_effect(EffectInstance {
                kind,
                duration: duration as i32,
                amplifier: amplifier as i32,
                ambient: named("custom-effects", resolve_toggle(entry.ambient.as_ref(), context))?,
                particles: named(
                    "custom-effects",
                    resolve_toggle(entry.particles.as_ref(), context),
                )?,
                icon: named("custom-effects", resolve_toggle(entry.icon.as_ref(), context))?,
            });
        }

        if self.enchants.overriding {
            meta.clear_enchants();
        }
        for entry in self.enchants.entries.iter() {
            let enchant = match &entry.enchant {
                Some(enchant) => named("enchantments", enchant.as_enchantment(context))?,
                None => None,
            };
            let Some(enchant) = enchant else {
                debug!("enchantment entry did not resolve, skipping");
                continue;
            };
            let level = match &entry.level {
                Some(level) => named("enchantments", level.as_int(context))?.unwrap_or(1),
                None => 1,
            };
            // Levels are applied verbatim, no range validation.
            meta.add_enchant(enchant, level as i32);
        }

        if self.flags.overriding {
            meta.clear_flags();
        }
        for contribution in self.flags.entries.iter() {
            for flag in &named("flags", contribution.as_flag_set(context))? {
                meta.add_flag(*flag);
            }
        }

        if self.patterns.overriding {
            meta.clear_patterns();
        }
        for entry in self.patterns.entries.iter() {
            let shape = match &entry.shape {
                Some(shape) => named("patterns", shape.as_pattern_shape(context))?,
                None => None,
            };
            let color = match &entry.color {
                Some(color) => named("patterns", color.as_dye_color(context))?,
                None => None,
            };
            let (Some(shape), Some(color)) = (shape, color) else {
                debug!("pattern entry lacks shape or color, skipping");
                continue;
            };
            meta.add_pattern(BannerPattern { shape, color });
        }

        Ok(item)
    }
}

/// Tags a resolution fault with the property the build step was working on.
fn named<T>(property: &'static str, result: Result<T>) -> Result<T> {
    result.map_err(|error| error.for_property(property))
}

fn resolve_toggle(toggle: Option<&Evaluable>, context: &EvalContext) -> Result<bool> {
    Ok(match toggle {
        Some(toggle) => toggle.as_bool(context)?.unwrap_or(false),
        None => false,
    })
}

impl fmt::Debug for ItemBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemBuilder")
            .field("base", &self.base)
            .field("kind", &self.kind)
            .field("amount", &self.amount)
            .field("display_name", &self.display_name)
            .field("lore", &self.lore)
            .field("flags", &self.flags)
            .field("enchants", &self.enchants)
            .field("effects", &self.effects)
            .field("patterns", &self.patterns)
            .finish_non_exhaustive()
    }
}
