//! Boss defeatability, supplied to the engine by its collaborators.
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::items::{Inventory, Sword};
use crate::location::Boss;
use crate::settings::Settings;

/// Answers whether a boss can currently be beaten, independent of reaching
/// it. The engine only reads this.
pub trait BossOracle {
    fn can_defeat(&self, boss: Boss) -> bool;
}

impl<F> BossOracle for F
where
    F: Fn(Boss) -> bool,
{
    fn can_defeat(&self, boss: Boss) -> bool {
        self(boss)
    }
}

/// An explicit set of defeatable bosses, e.g. as marked by the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct FixedBossOracle {
    bosses: BTreeSet<Boss>,
}

impl FixedBossOracle {
    #[must_use]
    pub fn all() -> Self {
        Self {
            bosses: Boss::ALL.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, boss: Boss) {
        self.bosses.insert(boss);
    }

    pub fn remove(&mut self, boss: Boss) {
        self.bosses.remove(&boss);
    }

    #[must_use]
    pub fn without(mut self, boss: Boss) -> Self {
        self.remove(boss);
        self
    }
}

impl FromIterator<Boss> for FixedBossOracle {
    fn from_iter<I: IntoIterator<Item = Boss>>(iter: I) -> Self {
        Self {
            bosses: iter.into_iter().collect(),
        }
    }
}

impl BossOracle for FixedBossOracle {
    fn can_defeat(&self, boss: Boss) -> bool {
        self.bosses.contains(&boss)
    }
}

/// Derives defeatability from held items.
#[derive(Debug, Clone, Copy)]
pub struct ItemBossOracle<'a> {
    items: &'a Inventory,
    swordless: bool,
}

impl<'a> ItemBossOracle<'a> {
    #[must_use]
    pub const fn new(items: &'a Inventory, settings: &Settings) -> Self {
        Self {
            items,
            swordless: settings.swordless,
        }
    }
}

impl BossOracle for ItemBossOracle<'_> {
    fn can_defeat(&self, boss: Boss) -> bool {
        let items = self.items;
        match boss {
            // Bug net reflects the energy balls.
            Boss::Agahnim | Boss::Agahnim2 => items.has_sword() || items.hammer || items.net,
            Boss::ArmosKnights | Boss::Lanmolas => {
                items.has_melee()
                    || items.bow
                    || items.fire_rod
                    || items.ice_rod
                    || items.has_cane()
            }
            Boss::Moldorm => items.has_melee(),
            Boss::HelmasaurKing | Boss::Vitreous => items.has_melee() || items.bow,
            Boss::Arrghus => {
                items.hookshot && (items.has_melee() || items.fire_rod || items.ice_rod)
            }
            Boss::Mothula => items.has_melee() || items.fire_rod || items.has_cane(),
            Boss::Blind => items.has_melee() || items.has_cane(),
            Boss::Kholdstare => {
                let can_melt_shell =
                    items.fire_rod || (items.bombos && (items.has_sword() || self.swordless));
                can_melt_shell && (items.has_melee() || items.fire_rod)
            }
            Boss::Trinexx => {
                items.fire_rod && items.ice_rod && (items.hammer || items.sword >= Sword::Master)
            }
        }
    }
}
