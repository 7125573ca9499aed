//! The twelve tracked dungeon locations and their bosses.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TrackerError;

/// A tracked dungeon, in tracker order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    CastleTower,
    EasternPalace,
    DesertPalace,
    TowerOfHera,
    PalaceOfDarkness,
    SwampPalace,
    SkullWoods,
    ThievesTown,
    IcePalace,
    MiseryMire,
    TurtleRock,
    GanonsTower,
}

impl Location {
    pub const COUNT: usize = 12;

    pub const ALL: [Self; Self::COUNT] = [
        Self::CastleTower,
        Self::EasternPalace,
        Self::DesertPalace,
        Self::TowerOfHera,
        Self::PalaceOfDarkness,
        Self::SwampPalace,
        Self::SkullWoods,
        Self::ThievesTown,
        Self::IcePalace,
        Self::MiseryMire,
        Self::TurtleRock,
        Self::GanonsTower,
    ];

    /// Dungeons holding a pendant.
    pub const PENDANT_DUNGEONS: [Self; 3] =
        [Self::EasternPalace, Self::DesertPalace, Self::TowerOfHera];

    /// Dungeons holding a crystal.
    pub const CRYSTAL_DUNGEONS: [Self; 7] = [
        Self::PalaceOfDarkness,
        Self::SwampPalace,
        Self::SkullWoods,
        Self::ThievesTown,
        Self::IcePalace,
        Self::MiseryMire,
        Self::TurtleRock,
    ];

    /// Position in [`Location::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CastleTower => "Castle Tower",
            Self::EasternPalace => "Eastern Palace",
            Self::DesertPalace => "Desert Palace",
            Self::TowerOfHera => "Tower of Hera",
            Self::PalaceOfDarkness => "Palace of Darkness",
            Self::SwampPalace => "Swamp Palace",
            Self::SkullWoods => "Skull Woods",
            Self::ThievesTown => "Thieves' Town",
            Self::IcePalace => "Ice Palace",
            Self::MiseryMire => "Misery Mire",
            Self::TurtleRock => "Turtle Rock",
            Self::GanonsTower => "Ganon's Tower",
        }
    }

    /// Boss guarding the dungeon when bosses are not shuffled.
    #[must_use]
    pub const fn vanilla_boss(self) -> Boss {
        match self {
            Self::CastleTower => Boss::Agahnim,
            Self::EasternPalace => Boss::ArmosKnights,
            Self::DesertPalace => Boss::Lanmolas,
            Self::TowerOfHera => Boss::Moldorm,
            Self::PalaceOfDarkness => Boss::HelmasaurKing,
            Self::SwampPalace => Boss::Arrghus,
            Self::SkullWoods => Boss::Mothula,
            Self::ThievesTown => Boss::Blind,
            Self::IcePalace => Boss::Kholdstare,
            Self::MiseryMire => Boss::Vitreous,
            Self::TurtleRock => Boss::Trinexx,
            Self::GanonsTower => Boss::Agahnim2,
        }
    }

    #[must_use]
    pub const fn is_pendant_dungeon(self) -> bool {
        matches!(
            self,
            Self::EasternPalace | Self::DesertPalace | Self::TowerOfHera
        )
    }

    #[must_use]
    pub const fn is_crystal_dungeon(self) -> bool {
        matches!(
            self,
            Self::PalaceOfDarkness
                | Self::SwampPalace
                | Self::SkullWoods
                | Self::ThievesTown
                | Self::IcePalace
                | Self::MiseryMire
                | Self::TurtleRock
        )
    }

    /// Whether the entrance can be sealed by a medallion.
    #[must_use]
    pub const fn has_medallion_entrance(self) -> bool {
        matches!(self, Self::MiseryMire | Self::TurtleRock)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Location {
    type Err = TrackerError;

    /// Accepts `TurtleRock`, `turtle_rock`, `turtle-rock` or `Turtle Rock`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let found = match key.as_str() {
            "castletower" | "agahnimstower" | "hyrulecastletower" => Self::CastleTower,
            "easternpalace" => Self::EasternPalace,
            "desertpalace" => Self::DesertPalace,
            "towerofhera" => Self::TowerOfHera,
            "palaceofdarkness" => Self::PalaceOfDarkness,
            "swamppalace" => Self::SwampPalace,
            "skullwoods" => Self::SkullWoods,
            "thievestown" => Self::ThievesTown,
            "icepalace" => Self::IcePalace,
            "miserymire" => Self::MiseryMire,
            "turtlerock" => Self::TurtleRock,
            "ganonstower" => Self::GanonsTower,
            _ => return Err(TrackerError::not_found(s)),
        };
        Ok(found)
    }
}

/// Dungeon bosses. Boss shuffle may place any of them in any dungeon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Boss {
    Agahnim,
    ArmosKnights,
    Lanmolas,
    Moldorm,
    HelmasaurKing,
    Arrghus,
    Mothula,
    Blind,
    Kholdstare,
    Vitreous,
    Trinexx,
    Agahnim2,
}

impl Boss {
    pub const ALL: [Self; 12] = [
        Self::Agahnim,
        Self::ArmosKnights,
        Self::Lanmolas,
        Self::Moldorm,
        Self::HelmasaurKing,
        Self::Arrghus,
        Self::Mothula,
        Self::Blind,
        Self::Kholdstare,
        Self::Vitreous,
        Self::Trinexx,
        Self::Agahnim2,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Agahnim => "Agahnim",
            Self::ArmosKnights => "Armos Knights",
            Self::Lanmolas => "Lanmolas",
            Self::Moldorm => "Moldorm",
            Self::HelmasaurKing => "Helmasaur King",
            Self::Arrghus => "Arrghus",
            Self::Mothula => "Mothula",
            Self::Blind => "Blind",
            Self::Kholdstare => "Kholdstare",
            Self::Vitreous => "Vitreous",
            Self::Trinexx => "Trinexx",
            Self::Agahnim2 => "Agahnim 2",
        }
    }
}

impl fmt::Display for Boss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
