//! Fixed constant universes and the RGB color type.
//!
//! Every enumeration here implements [`NamedConstant`] so template strings
//! resolve to constants through the shared cache. The universes are fixed at
//! process start; names are canonical uppercase as they appear in
//! configuration files.

use std::fmt;

use itemloom_foundation::NamedConstant;

macro_rules! constant_enum {
    (
        $(#[$outer:meta])*
        $vis:vis enum $name:ident {
            $($(#[$inner:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis enum $name {
            $($(#[$inner])* $variant),+
        }

        impl NamedConstant for $name {
            fn constants() -> &'static [Self] {
                &[$($name::$variant),+]
            }

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(<Self as NamedConstant>::name(self))
            }
        }
    };
}

constant_enum! {
    /// Item kinds (materials). The kind decides which metadata shape an
    /// item carries and therefore which property categories are legal.
    #[allow(missing_docs)]
    pub enum ItemKind {
        Barrier => "BARRIER",
        Stone => "STONE",
        GoldenApple => "GOLDEN_APPLE",
        Book => "BOOK",
        DiamondSword => "DIAMOND_SWORD",
        IronPickaxe => "IRON_PICKAXE",
        Bow => "BOW",
        LeatherHelmet => "LEATHER_HELMET",
        LeatherChestplate => "LEATHER_CHESTPLATE",
        LeatherLeggings => "LEATHER_LEGGINGS",
        LeatherBoots => "LEATHER_BOOTS",
        Potion => "POTION",
        SplashPotion => "SPLASH_POTION",
        LingeringPotion => "LINGERING_POTION",
        WhiteBanner => "WHITE_BANNER",
        RedBanner => "RED_BANNER",
        PlayerHead => "PLAYER_HEAD",
        FilledMap => "FILLED_MAP",
    }
}

constant_enum! {
    /// Item display flags.
    #[allow(missing_docs)]
    pub enum ItemFlag {
        HideEnchants => "HIDE_ENCHANTS",
        HideAttributes => "HIDE_ATTRIBUTES",
        HideUnbreakable => "HIDE_UNBREAKABLE",
        HideDestroys => "HIDE_DESTROYS",
        HidePlacedOn => "HIDE_PLACED_ON",
        HidePotionEffects => "HIDE_POTION_EFFECTS",
        HideDye => "HIDE_DYE",
        Unbreakable => "UNBREAKABLE",
    }
}

constant_enum! {
    /// Enchantments.
    #[allow(missing_docs)]
    pub enum Enchant {
        Sharpness => "SHARPNESS",
        Smite => "SMITE",
        BaneOfArthropods => "BANE_OF_ARTHROPODS",
        FireAspect => "FIRE_ASPECT",
        Knockback => "KNOCKBACK",
        Looting => "LOOTING",
        Efficiency => "EFFICIENCY",
        SilkTouch => "SILK_TOUCH",
        Fortune => "FORTUNE",
        Unbreaking => "UNBREAKING",
        Mending => "MENDING",
        Protection => "PROTECTION",
        FireProtection => "FIRE_PROTECTION",
        Thorns => "THORNS",
        Power => "POWER",
        Infinity => "INFINITY",
    }
}

constant_enum! {
    /// Custom (status) effect kinds applicable to potion-shaped items.
    #[allow(missing_docs)]
    pub enum EffectKind {
        Speed => "SPEED",
        Slowness => "SLOWNESS",
        Strength => "STRENGTH",
        InstantHealth => "INSTANT_HEALTH",
        InstantDamage => "INSTANT_DAMAGE",
        JumpBoost => "JUMP_BOOST",
        Regeneration => "REGENERATION",
        Resistance => "RESISTANCE",
        FireResistance => "FIRE_RESISTANCE",
        WaterBreathing => "WATER_BREATHING",
        Invisibility => "INVISIBILITY",
        NightVision => "NIGHT_VISION",
        Poison => "POISON",
        Wither => "WITHER",
        Absorption => "ABSORPTION",
        Luck => "LUCK",
    }
}

constant_enum! {
    /// Base potion kinds.
    #[allow(missing_docs)]
    pub enum PotionKind {
        Water => "WATER",
        Mundane => "MUNDANE",
        Thick => "THICK",
        Awkward => "AWKWARD",
        NightVision => "NIGHT_VISION",
        Invisibility => "INVISIBILITY",
        FireResistance => "FIRE_RESISTANCE",
        Healing => "HEALING",
        Harming => "HARMING",
        Poison => "POISON",
        Regeneration => "REGENERATION",
        Strength => "STRENGTH",
        Swiftness => "SWIFTNESS",
        Slowness => "SLOWNESS",
        Luck => "LUCK",
        TurtleMaster => "TURTLE_MASTER",
    }
}

constant_enum! {
    /// Banner pattern shapes.
    #[allow(missing_docs)]
    pub enum PatternShape {
        Base => "BASE",
        Border => "BORDER",
        Bricks => "BRICKS",
        Circle => "CIRCLE",
        Creeper => "CREEPER",
        Cross => "CROSS",
        CurlyBorder => "CURLY_BORDER",
        DiagonalLeft => "DIAGONAL_LEFT",
        Flower => "FLOWER",
        Gradient => "GRADIENT",
        Mojang => "MOJANG",
        Rhombus => "RHOMBUS",
        Skull => "SKULL",
        StripeBottom => "STRIPE_BOTTOM",
        StripeTop => "STRIPE_TOP",
        TriangleBottom => "TRIANGLE_BOTTOM",
    }
}

constant_enum! {
    /// Dye colors, also the named color constants template strings may use
    /// wherever an RGB color is expected.
    #[allow(missing_docs)]
    pub enum DyeColor {
        White => "WHITE",
        Orange => "ORANGE",
        Magenta => "MAGENTA",
        LightBlue => "LIGHT_BLUE",
        Yellow => "YELLOW",
        Lime => "LIME",
        Pink => "PINK",
        Gray => "GRAY",
        LightGray => "LIGHT_GRAY",
        Cyan => "CYAN",
        Purple => "PURPLE",
        Blue => "BLUE",
        Brown => "BROWN",
        Green => "GREEN",
        Red => "RED",
        Black => "BLACK",
    }
}

impl DyeColor {
    /// Returns the RGB value of this dye color.
    #[must_use]
    pub const fn rgb(self) -> Rgb {
        match self {
            Self::White => Rgb::new(249, 255, 254),
            Self::Orange => Rgb::new(249, 128, 29),
            Self::Magenta => Rgb::new(199, 78, 189),
            Self::LightBlue => Rgb::new(58, 179, 218),
            Self::Yellow => Rgb::new(254, 216, 61),
            Self::Lime => Rgb::new(128, 199, 31),
            Self::Pink => Rgb::new(243, 139, 170),
            Self::Gray => Rgb::new(71, 79, 82),
            Self::LightGray => Rgb::new(156, 157, 151),
            Self::Cyan => Rgb::new(22, 156, 156),
            Self::Purple => Rgb::new(137, 50, 184),
            Self::Blue => Rgb::new(60, 68, 170),
            Self::Brown => Rgb::new(131, 84, 50),
            Self::Green => Rgb::new(94, 124, 22),
            Self::Red => Rgb::new(176, 46, 38),
            Self::Black => Rgb::new(29, 29, 33),
        }
    }
}

/// An RGB color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red component.
    pub r: u8,
    /// Green component.
    pub g: u8,
    /// Blue component.
    pub b: u8,
}

impl Rgb {
    /// Creates a color from its components.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.r, self.g, self.b)
    }
}
