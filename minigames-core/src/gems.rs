//! Gem catalog for the mining minigame
use serde::{Deserialize, Serialize};

use crate::constants::STONE_GREYS;
use crate::outcome::OutcomeKind;

/// Gems a mine cell can yield instead of stone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GemName {
    Ruby,
    Topaz,
    Opal,
    Jade,
    Sapphire,
    Emerald,
    Diamond,
}

impl GemName {
    /// Every gem in catalog order.
    pub const ALL: [Self; 7] = [
        Self::Ruby,
        Self::Topaz,
        Self::Opal,
        Self::Jade,
        Self::Sapphire,
        Self::Emerald,
        Self::Diamond,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ruby => "Ruby",
            Self::Topaz => "Topaz",
            Self::Opal => "Opal",
            Self::Jade => "Jade",
            Self::Sapphire => "Sapphire",
            Self::Emerald => "Emerald",
            Self::Diamond => "Diamond",
        }
    }

    /// Display color for cells holding this gem.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Ruby => "hsl(0, 80%, 55%)",
            Self::Topaz => "hsl(45, 90%, 60%)",
            Self::Opal => "hsl(200, 80%, 85%)",
            Self::Jade => "hsl(140, 50%, 50%)",
            Self::Sapphire => "hsl(220, 80%, 60%)",
            Self::Emerald => "hsl(160, 70%, 55%)",
            Self::Diamond => "hsl(190, 30%, 95%)",
        }
    }

    /// Case-insensitive lookup by display name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|gem| gem.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

impl std::fmt::Display for GemName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl OutcomeKind for GemName {
    const REMAINDER_NAME: &'static str = "stone";
    const REMAINDER_PALETTE: &'static [&'static str] = &STONE_GREYS;

    fn name(self) -> &'static str {
        self.as_str()
    }

    fn color(self) -> &'static str {
        Self::color(self)
    }
}
