//! Partial item descriptions and patch flags.
//!
//! A description is a plain record parsed elsewhere (the configuration layer
//! is not this crate's concern) with every field optional. `None` means
//! "do not touch this property"; an explicit empty collection means "clear
//! it". The patch flags choose override-vs-extend per repeatable group when
//! the description is applied as a layer.

use itemloom_foundation::{EvalContext, ImSet, Result};
use itemloom_item::{BannerPattern, EffectInstance, Item, ItemKind};

use crate::builder::ItemBuilder;
use crate::evaluable::Evaluable;

/// Per-group override toggle carried by a description layer.
///
/// When a flag is present the incoming layer replaces the accumulated group
/// wholesale; otherwise it extends it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatchFlag {
    /// Replace accumulated lore.
    OverrideLore,
    /// Replace accumulated flags.
    OverrideFlags,
    /// Replace accumulated enchantments.
    OverrideEnchantments,
    /// Replace accumulated custom effects.
    OverrideCustomEffects,
    /// Replace accumulated banner patterns.
    OverridePatterns,
}

/// One enchantment sub-record: a name and an optional level.
#[derive(Debug, Clone, Default)]
pub struct EnchantEntry {
    /// Enchantment name.
    pub enchant: Option<Evaluable>,
    /// Level; defaults to 1 when applied, matches any level when checked.
    pub level: Option<Evaluable>,
}

/// One custom-effect sub-record.
#[derive(Debug, Clone, Default)]
pub struct EffectEntry {
    /// Effect kind name.
    pub kind: Option<Evaluable>,
    /// Duration in ticks.
    pub duration: Option<Evaluable>,
    /// Amplifier; defaults to 0 when applied.
    pub amplifier: Option<Evaluable>,
    /// Ambient toggle; defaults to false when applied.
    pub ambient: Option<Evaluable>,
    /// Particles toggle; defaults to false when applied.
    pub particles: Option<Evaluable>,
    /// Icon toggle; defaults to false when applied.
    pub icon: Option<Evaluable>,
}

/// One banner-pattern sub-record.
#[derive(Debug, Clone, Default)]
pub struct PatternEntry {
    /// Pattern shape name.
    pub shape: Option<Evaluable>,
    /// Pattern dye color.
    pub color: Option<Evaluable>,
}

/// The base-effect sub-record of a potion-shaped description.
#[derive(Debug, Clone, Default)]
pub struct BaseEffectEntry {
    /// Base potion kind name.
    pub kind: Option<Evaluable>,
    /// Extended-duration toggle.
    pub extended: Option<Evaluable>,
    /// Upgraded-potency toggle; wins over `extended` when both are true.
    pub upgraded: Option<Evaluable>,
}

impl EffectEntry {
    /// Checks whether a concrete effect satisfies this entry.
    ///
    /// Each present field must equal the concrete effect's value; absent
    /// fields are unconstrained. Resolves to `None` when the entry is
    /// unusable: no field present, or the kind field present but naming no
    /// known effect.
    ///
    /// # Errors
    ///
    /// Propagates evaluator faults.
    pub fn describes_effect(
        &self,
        effect: &EffectInstance,
        context: &EvalContext,
    ) -> Result<Option<bool>> {
        let has_any = self.kind.is_some()
            || self.duration.is_some()
            || self.amplifier.is_some()
            || self.ambient.is_some()
            || self.particles.is_some()
            || self.icon.is_some();
        if !has_any {
            return Ok(None);
        }

        let mut matched = true;
        if let Some(kind) = &self.kind {
            match kind.as_effect_kind(context)? {
                Some(kind) => matched &= kind == effect.kind,
                None => return Ok(None),
            }
        }
        if let Some(duration) = &self.duration {
            matched &= duration.as_int(context)? == Some(i64::from(effect.duration));
        }
        if let Some(amplifier) = &self.amplifier {
            matched &= amplifier.as_int(context)? == Some(i64::from(effect.amplifier));
        }
        if let Some(ambient) = &self.ambient {
            matched &= ambient.as_bool(context)? == Some(effect.ambient);
        }
        if let Some(particles) = &self.particles {
            matched &= particles.as_bool(context)? == Some(effect.particles);
        }
        if let Some(icon) = &self.icon {
            matched &= icon.as_bool(context)? == Some(effect.icon);
        }
        Ok(Some(matched))
    }
}

impl PatternEntry {
    /// Checks whether a concrete banner pattern satisfies this entry.
    ///
    /// Present fields must equal the concrete pattern's; resolves to `None`
    /// when the entry is unusable (no field present, or a present field
    /// naming no known constant).
    ///
    /// # Errors
    ///
    /// Propagates evaluator faults.
    pub fn describes_pattern(
        &self,
        pattern: &BannerPattern,
        context: &EvalContext,
    ) -> Result<Option<bool>> {
        if self.shape.is_none() && self.color.is_none() {
            return Ok(None);
        }

        let mut matched = true;
        if let Some(shape) = &self.shape {
            match shape.as_pattern_shape(context)? {
                Some(shape) => matched &= shape == pattern.shape,
                None => return Ok(None),
            }
        }
        if let Some(color) = &self.color {
            match color.as_dye_color(context)? {
                Some(color) => matched &= color == pattern.color,
                None => return Ok(None),
            }
        }
        Ok(Some(matched))
    }
}

/// A partial, optional-everywhere item description with patch flags.
#[derive(Debug, Clone, Default)]
pub struct ItemDescription {
    /// Stack amount.
    pub amount: Option<Evaluable>,
    /// Item kind name.
    pub kind: Option<Evaluable>,
    /// Display name.
    pub display_name: Option<Evaluable>,
    /// Lore lines (an evaluable producing a list of lines).
    pub lore: Option<Evaluable>,
    /// Item flags (an evaluable producing a set of flag names).
    pub flags: Option<Evaluable>,
    /// Color (named dye color or `"R G B"` triple).
    pub color: Option<Evaluable>,
    /// Encoded texture blob for skull-shaped items.
    pub textures: Option<Evaluable>,
    /// Base effect for potion-shaped items.
    pub base_effect: Option<BaseEffectEntry>,
    /// Custom-effect sub-records.
    pub custom_effects: Vec<EffectEntry>,
    /// Enchantment sub-records.
    pub enchantments: Vec<EnchantEntry>,
    /// Banner-pattern sub-records.
    pub patterns: Vec<PatternEntry>,
    /// Per-group override toggles for this layer.
    pub patch_flags: ImSet<PatchFlag>,
}

impl ItemDescription {
    /// Creates an empty description (touches nothing when applied).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if this layer overrides the given group.
    #[must_use]
    pub fn overrides(&self, flag: PatchFlag) -> bool {
        self.patch_flags.contains(&flag)
    }

    /// Seeds a builder from the fixed fallback base item and applies this
    /// description as its first layer.
    ///
    /// The fallback base is a single barrier with default metadata.
    #[must_use]
    pub fn as_builder(&self) -> ItemBuilder {
        ItemBuilder::new(Item::new(ItemKind::Barrier, 1)).patch(self)
    }
}
