//! Item metadata with shape-dispatched sub-records.
//!
//! The metadata shape follows the item kind: only potion-shaped items carry
//! base and custom effects, only banner-shaped items carry patterns, only
//! skull-shaped items carry a texture blob, and only a few shapes carry a
//! color. Operations on a property an item's shape does not support are
//! silent no-ops; reads return absence.

use std::collections::BTreeMap;

use itemloom_foundation::ImSet;

use crate::kinds::{
    DyeColor, EffectKind, Enchant, ItemFlag, ItemKind, PatternShape, PotionKind, Rgb,
};

/// Base effect of a potion-shaped item.
///
/// `extended` and `upgraded` are mutually exclusive in the concrete
/// representation; producers resolve the conflict before constructing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseEffect {
    /// The base potion kind.
    pub kind: PotionKind,
    /// Whether the effect duration is extended.
    pub extended: bool,
    /// Whether the effect potency is upgraded.
    pub upgraded: bool,
}

/// A concrete custom (status) effect on a potion-shaped item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectInstance {
    /// The effect kind.
    pub kind: EffectKind,
    /// Duration in ticks.
    pub duration: i32,
    /// Amplifier (0 is the base level).
    pub amplifier: i32,
    /// Whether the effect counts as ambient.
    pub ambient: bool,
    /// Whether the effect shows particles.
    pub particles: bool,
    /// Whether the effect shows an icon.
    pub icon: bool,
}

/// A concrete banner pattern layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BannerPattern {
    /// The pattern shape.
    pub shape: PatternShape,
    /// The pattern color.
    pub color: DyeColor,
}

/// Shape-specific metadata sub-record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubMeta {
    /// No shape-specific properties.
    #[default]
    Plain,
    /// Dyeable leather armor.
    LeatherArmor {
        /// Armor dye color, if dyed.
        color: Option<Rgb>,
    },
    /// A filled map.
    Map {
        /// Map tint color, if set.
        color: Option<Rgb>,
    },
    /// A potion-shaped item (drinkable, splash, or lingering).
    Potion {
        /// Potion liquid color, if overridden.
        color: Option<Rgb>,
        /// Base effect, if any.
        base: Option<BaseEffect>,
        /// Custom effects, in application order.
        custom: Vec<EffectInstance>,
    },
    /// A banner.
    Banner {
        /// Pattern layers, bottom-up.
        patterns: Vec<BannerPattern>,
    },
    /// A player head.
    Skull {
        /// Encoded texture blob, if set.
        textures: Option<String>,
    },
}

impl SubMeta {
    /// Returns the default sub-record for an item kind.
    #[must_use]
    pub fn default_for(kind: ItemKind) -> Self {
        match kind {
            ItemKind::Potion | ItemKind::SplashPotion | ItemKind::LingeringPotion => Self::Potion {
                color: None,
                base: None,
                custom: Vec::new(),
            },
            ItemKind::WhiteBanner | ItemKind::RedBanner => Self::Banner {
                patterns: Vec::new(),
            },
            ItemKind::PlayerHead => Self::Skull { textures: None },
            ItemKind::LeatherHelmet
            | ItemKind::LeatherChestplate
            | ItemKind::LeatherLeggings
            | ItemKind::LeatherBoots => Self::LeatherArmor { color: None },
            ItemKind::FilledMap => Self::Map { color: None },
            _ => Self::Plain,
        }
    }
}

/// Item metadata: generic properties plus the shape-dispatched sub-record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemMeta {
    display_name: Option<String>,
    lore: Option<Vec<String>>,
    flags: ImSet<ItemFlag>,
    enchants: BTreeMap<Enchant, i32>,
    sub: SubMeta,
}

impl ItemMeta {
    /// Creates metadata with the default sub-record for `kind`.
    #[must_use]
    pub fn for_kind(kind: ItemKind) -> Self {
        Self {
            sub: SubMeta::default_for(kind),
            ..Self::default()
        }
    }

    /// Returns metadata reshaped for a new item kind.
    ///
    /// Generic properties (name, lore, flags, enchantments) carry over. The
    /// sub-record survives only when the new kind has the same shape;
    /// otherwise it resets to the new kind's default.
    #[must_use]
    pub fn reshaped_for(&self, kind: ItemKind) -> Self {
        let fresh = SubMeta::default_for(kind);
        let sub = if std::mem::discriminant(&self.sub) == std::mem::discriminant(&fresh) {
            self.sub.clone()
        } else {
            fresh
        };
        Self {
            display_name: self.display_name.clone(),
            lore: self.lore.clone(),
            flags: self.flags.clone(),
            enchants: self.enchants.clone(),
            sub,
        }
    }

    // ---- generic properties ------------------------------------------------

    /// Returns the display name.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Sets or clears the display name.
    pub fn set_display_name(&mut self, name: Option<String>) {
        self.display_name = name;
    }

    /// Returns the lore lines.
    #[must_use]
    pub fn lore(&self) -> Option<&Vec<String>> {
        self.lore.as_ref()
    }

    /// Sets or clears the lore. `None` removes the lore entirely, which is
    /// distinct from an empty list.
    pub fn set_lore(&mut self, lore: Option<Vec<String>>) {
        self.lore = lore;
    }

    /// Returns the flag set.
    #[must_use]
    pub fn flags(&self) -> &ImSet<ItemFlag> {
        &self.flags
    }

    /// Adds a flag.
    pub fn add_flag(&mut self, flag: ItemFlag) {
        self.flags = self.flags.insert(flag);
    }

    /// Removes a flag.
    pub fn remove_flag(&mut self, flag: ItemFlag) {
        self.flags = self.flags.remove(&flag);
    }

    /// Removes every flag.
    pub fn clear_flags(&mut self) {
        self.flags = ImSet::new();
    }

    /// Returns the enchantment map.
    #[must_use]
    pub fn enchants(&self) -> &BTreeMap<Enchant, i32> {
        &self.enchants
    }

    /// Returns the level of an enchantment, 0 when absent.
    #[must_use]
    pub fn enchant_level(&self, enchant: Enchant) -> i32 {
        self.enchants.get(&enchant).copied().unwrap_or(0)
    }

    /// Adds an enchantment at a level, replacing any previous level.
    ///
    /// Levels are applied as given; out-of-range levels are not validated.
    pub fn add_enchant(&mut self, enchant: Enchant, level: i32) {
        self.enchants.insert(enchant, level);
    }

    /// Removes an enchantment.
    pub fn remove_enchant(&mut self, enchant: Enchant) {
        self.enchants.remove(&enchant);
    }

    /// Removes every enchantment.
    pub fn clear_enchants(&mut self) {
        self.enchants.clear();
    }

    // ---- shape checks ------------------------------------------------------

    /// Returns true if this metadata is potion-shaped.
    #[must_use]
    pub fn is_potion_shaped(&self) -> bool {
        matches!(self.sub, SubMeta::Potion { .. })
    }

    /// Returns true if this metadata is banner-shaped.
    #[must_use]
    pub fn is_banner_shaped(&self) -> bool {
        matches!(self.sub, SubMeta::Banner { .. })
    }

    /// Returns true if this metadata is skull-shaped.
    #[must_use]
    pub fn is_skull_shaped(&self) -> bool {
        matches!(self.sub, SubMeta::Skull { .. })
    }

    // ---- shape-dispatched properties ---------------------------------------

    /// Returns the color, for shapes that carry one.
    #[must_use]
    pub fn color(&self) -> Option<Rgb> {
        match &self.sub {
            SubMeta::LeatherArmor { color }
            | SubMeta::Map { color }
            | SubMeta::Potion { color, .. } => *color,
            _ => None,
        }
    }

    /// Sets the color on shapes that carry one; no-op otherwise.
    pub fn set_color(&mut self, rgb: Rgb) {
        match &mut self.sub {
            SubMeta::LeatherArmor { color }
            | SubMeta::Map { color }
            | SubMeta::Potion { color, .. } => *color = Some(rgb),
            _ => {}
        }
    }

    /// Returns the base effect of a potion-shaped item.
    #[must_use]
    pub fn base_effect(&self) -> Option<&BaseEffect> {
        match &self.sub {
            SubMeta::Potion { base, .. } => base.as_ref(),
            _ => None,
        }
    }

    /// Sets or clears the base effect; no-op unless potion-shaped.
    pub fn set_base_effect(&mut self, effect: Option<BaseEffect>) {
        if let SubMeta::Potion { base, .. } = &mut self.sub {
            *base = effect;
        }
    }

    /// Returns the custom effects of a potion-shaped item.
    #[must_use]
    pub fn custom_effects(&self) -> &[EffectInstance] {
        match &self.sub {
            SubMeta::Potion { custom, .. } => custom,
            _ => &[],
        }
    }

    /// Adds a custom effect, replacing any existing effect of the same kind;
    /// no-op unless potion-shaped.
    pub fn add_custom_effect(&mut self, effect: EffectInstance) {
        if let SubMeta::Potion { custom, .. } = &mut self.sub {
            custom.retain(|existing| existing.kind != effect.kind);
            custom.push(effect);
        }
    }

    /// Removes every custom effect; no-op unless potion-shaped.
    pub fn clear_custom_effects(&mut self) {
        if let SubMeta::Potion { custom, .. } = &mut self.sub {
            custom.clear();
        }
    }

    /// Returns the pattern layers of a banner-shaped item.
    #[must_use]
    pub fn patterns(&self) -> &[BannerPattern] {
        match &self.sub {
            SubMeta::Banner { patterns } => patterns,
            _ => &[],
        }
    }

    /// Adds a pattern layer; no-op unless banner-shaped.
    pub fn add_pattern(&mut self, pattern: BannerPattern) {
        if let SubMeta::Banner { patterns } = &mut self.sub {
            patterns.push(pattern);
        }
    }

    /// Removes every pattern layer; no-op unless banner-shaped.
    pub fn clear_patterns(&mut self) {
        if let SubMeta::Banner { patterns } = &mut self.sub {
            patterns.clear();
        }
    }

    /// Returns the sub-record.
    #[must_use]
    pub fn sub(&self) -> &SubMeta {
        &self.sub
    }

    /// Returns the sub-record mutably.
    pub fn sub_mut(&mut self) -> &mut SubMeta {
        &mut self.sub
    }
}
