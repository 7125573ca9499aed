//! Read-only inventory snapshot and the capability predicates derived from it.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Sword {
    #[default]
    None,
    Fighter,
    Master,
    Tempered,
    Golden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Glove {
    #[default]
    None,
    Power,
    Titan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Shield {
    #[default]
    None,
    Fighter,
    Fire,
    Mirror,
}

/// Items currently held by the player.
///
/// Derived predicates read only these fields.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Inventory {
    pub sword: Sword,
    pub glove: Glove,
    pub shield: Shield,
    pub boots: bool,
    pub flippers: bool,
    pub hookshot: bool,
    pub hammer: bool,
    pub bow: bool,
    pub fire_rod: bool,
    pub ice_rod: bool,
    pub lantern: bool,
    pub somaria: bool,
    pub byrna: bool,
    pub cape: bool,
    pub mirror: bool,
    pub flute: bool,
    pub book: bool,
    pub bombos: bool,
    pub ether: bool,
    pub quake: bool,
    pub moon_pearl: bool,
    pub net: bool,
}

impl Inventory {
    #[must_use]
    pub fn has_sword(&self) -> bool {
        self.sword != Sword::None
    }

    /// Master sword or better.
    #[must_use]
    pub fn has_beam_sword(&self) -> bool {
        self.sword >= Sword::Master
    }

    #[must_use]
    pub fn has_melee(&self) -> bool {
        self.has_sword() || self.hammer
    }

    /// A weapon that can cast medallions.
    #[must_use]
    pub fn has_primary_melee(&self) -> bool {
        self.has_sword()
    }

    #[must_use]
    pub fn has_fire_source(&self) -> bool {
        self.lantern || self.fire_rod
    }

    #[must_use]
    pub fn has_glove(&self) -> bool {
        self.glove != Glove::None
    }

    #[must_use]
    pub fn has_titan_glove(&self) -> bool {
        self.glove == Glove::Titan
    }

    #[must_use]
    pub fn has_cane(&self) -> bool {
        self.somaria || self.byrna
    }

    #[must_use]
    pub fn has_any_medallion(&self) -> bool {
        self.bombos || self.ether || self.quake
    }

    #[must_use]
    pub fn has_all_medallions(&self) -> bool {
        self.bombos && self.ether && self.quake
    }

    /// Flute to the desert ledge, then mirror from the mire.
    #[must_use]
    pub fn has_dark_mire_mirror_access(&self) -> bool {
        self.flute && self.has_titan_glove() && self.mirror
    }

    #[must_use]
    pub fn has_death_mountain_access(&self) -> bool {
        self.has_glove() || self.flute
    }

    /// Death Mountain without walking the dark cave.
    #[must_use]
    pub fn has_death_mountain_logical_access(&self) -> bool {
        self.flute || self.lantern
    }

    /// Byrna, cape or mirror shield protect against the laser bridge.
    #[must_use]
    pub fn has_laser_bridge_safety(&self) -> bool {
        self.byrna || self.cape || self.shield == Shield::Mirror
    }
}
