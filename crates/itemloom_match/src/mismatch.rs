//! The closed taxonomy of comparison failures.

use std::fmt;

use itemloom_foundation::ImSet;

/// Identifies which property category failed a comparison.
///
/// Mismatches are produced as a set: independent checks keep executing after
/// a failure when the failing tag is configured as non-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mismatch {
    /// No item was supplied. Always breaking.
    Absent,
    /// The item carries no readable metadata. Always breaking.
    UnreadableMeta,
    /// The item kind differs.
    Kind,
    /// The stack amount differs.
    Amount,
    /// The display name differs.
    DisplayName,
    /// The lore lines differ (ordered comparison).
    Lore,
    /// The flag sets differ (unordered comparison).
    Flags,
    /// The color differs.
    Color,
    /// The enchantments fail the group policy.
    Enchantments,
    /// The texture blob differs.
    Textures,
    /// The base effect differs.
    BaseEffect,
    /// The custom effects fail the group policy.
    CustomEffects,
    /// The banner patterns fail the group policy.
    Patterns,
}

impl Mismatch {
    /// Every mismatch tag.
    pub const ALL: [Self; 13] = [
        Self::Absent,
        Self::UnreadableMeta,
        Self::Kind,
        Self::Amount,
        Self::DisplayName,
        Self::Lore,
        Self::Flags,
        Self::Color,
        Self::Enchantments,
        Self::Textures,
        Self::BaseEffect,
        Self::CustomEffects,
        Self::Patterns,
    ];

    /// Returns the set of all tags, for callers that want a full diagnostic
    /// report instead of first-failure short-circuiting.
    #[must_use]
    pub fn all() -> ImSet<Self> {
        Self::ALL.into_iter().collect()
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Absent => "absent",
            Self::UnreadableMeta => "unreadable-meta",
            Self::Kind => "kind",
            Self::Amount => "amount",
            Self::DisplayName => "display-name",
            Self::Lore => "lore",
            Self::Flags => "flags",
            Self::Color => "color",
            Self::Enchantments => "enchantments",
            Self::Textures => "textures",
            Self::BaseEffect => "base-effect",
            Self::CustomEffects => "custom-effects",
            Self::Patterns => "patterns",
        };
        f.write_str(name)
    }
}
