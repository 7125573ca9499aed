//! The availability engine.
//!
//! Every location has a boss rule and a chest ("raidable") rule. Both are
//! free functions of a [`Tracker`], which bundles the four read-only inputs.
//! Dispatch is an exhaustive match over [`Location`].
use log::trace;
use smallvec::SmallVec;

use crate::availability::Availability;
use crate::dungeon::{DungeonBook, DungeonState, EntranceLock};
use crate::items::Inventory;
use crate::location::Location;
use crate::oracle::BossOracle;
use crate::report::LocationReport;
use crate::settings::{Goal, Settings};

mod dark_world;
mod ganons_tower;
mod light_world;
mod medallion;
pub mod reach;

pub use reach::{ChestTally, Probe, Step, pigeonhole};

/// Locations counted towards the victory goal.
pub type GoalDungeons = SmallVec<[Location; 7]>;

/// Read-only view over inventory, settings, dungeon progress and the boss
/// oracle. Cheap to copy; every query recomputes from scratch.
#[derive(Clone, Copy)]
pub struct Tracker<'a> {
    pub items: &'a Inventory,
    pub settings: &'a Settings,
    pub dungeons: &'a DungeonBook,
    pub bosses: &'a dyn BossOracle,
}

impl<'a> Tracker<'a> {
    #[must_use]
    pub fn new(
        items: &'a Inventory,
        settings: &'a Settings,
        dungeons: &'a DungeonBook,
        bosses: &'a dyn BossOracle,
    ) -> Self {
        Self {
            items,
            settings,
            dungeons,
            bosses,
        }
    }

    /// Can the boss of `location` be reached and defeated right now.
    #[must_use]
    pub fn boss_availability(&self, location: Location) -> Availability {
        let result = match location {
            Location::CastleTower => light_world::castle_tower_boss(self),
            Location::EasternPalace => light_world::eastern_palace_boss(self),
            Location::DesertPalace => light_world::desert_palace_boss(self),
            Location::TowerOfHera => light_world::tower_of_hera_boss(self),
            Location::PalaceOfDarkness => dark_world::palace_of_darkness_boss(self),
            Location::SwampPalace => dark_world::swamp_palace_boss(self),
            Location::SkullWoods => dark_world::skull_woods_boss(self),
            Location::ThievesTown => dark_world::thieves_town_boss(self),
            Location::IcePalace => dark_world::ice_palace_boss(self),
            Location::MiseryMire => medallion::misery_mire_boss(self),
            Location::TurtleRock => medallion::turtle_rock_boss(self),
            Location::GanonsTower => ganons_tower::ganons_tower_boss(self),
        };
        trace!("boss rule {location:?} -> {result}");
        result
    }

    /// Can at least one reward be taken from `location` without finishing it.
    #[must_use]
    pub fn chest_availability(&self, location: Location) -> Availability {
        let result = match location {
            Location::CastleTower => light_world::castle_tower_chests(self),
            Location::EasternPalace => light_world::eastern_palace_chests(self),
            Location::DesertPalace => light_world::desert_palace_chests(self),
            Location::TowerOfHera => light_world::tower_of_hera_chests(self),
            Location::PalaceOfDarkness => dark_world::palace_of_darkness_chests(self),
            Location::SwampPalace => dark_world::swamp_palace_chests(self),
            Location::SkullWoods => dark_world::skull_woods_chests(self),
            Location::ThievesTown => dark_world::thieves_town_chests(self),
            Location::IcePalace => dark_world::ice_palace_chests(self),
            Location::MiseryMire => medallion::misery_mire_chests(self),
            Location::TurtleRock => medallion::turtle_rock_chests(self),
            Location::GanonsTower => ganons_tower::ganons_tower_chests(self),
        };
        trace!("chest rule {location:?} -> {result}");
        result
    }

    #[must_use]
    pub fn is_boss_defeated(&self, location: Location) -> bool {
        self.dungeon(location).boss_defeated
    }

    #[must_use]
    pub fn boss_name(&self, location: Location) -> &'a str {
        &self.dungeons.get(location).boss_name
    }

    /// Nothing more can be obtained from `location` under the current rules.
    #[must_use]
    pub fn has_chests_or_boss_claimed(&self, location: Location) -> bool {
        let dungeon = self.dungeon(location);
        if self.settings.keysanity {
            return dungeon.total_chest_count == 0;
        }
        if dungeon.has_dungeon_ending_reward {
            return dungeon.item_chest_count == 0;
        }
        dungeon.boss_defeated
    }

    /// Entrance medallion check. `Possible` while the required medallion is
    /// still unknown and not all three are held.
    #[must_use]
    pub fn medallion_state(&self, location: Location) -> Availability {
        let lock = self.dungeon(location).entrance_lock;
        if lock == EntranceLock::None {
            return Availability::Available;
        }

        let items = self.items;
        if !items.has_any_medallion() || !items.has_primary_melee() {
            return Availability::Unavailable;
        }

        match lock {
            EntranceLock::Bombos if !items.bombos => Availability::Unavailable,
            EntranceLock::Ether if !items.ether => Availability::Unavailable,
            EntranceLock::Quake if !items.quake => Availability::Unavailable,
            EntranceLock::Unknown if !items.has_all_medallions() => Availability::Possible,
            _ => Availability::Available,
        }
    }

    /// Both verdicts plus passthrough fields for one location.
    #[must_use]
    pub fn report(&self, location: Location) -> LocationReport {
        let dungeon = self.dungeon(location);
        LocationReport {
            location,
            boss: dungeon.boss,
            boss_name: dungeon.boss_name.clone(),
            boss_availability: self.boss_availability(location),
            chest_availability: self.chest_availability(location),
            boss_defeated: dungeon.boss_defeated,
            claimed: self.has_chests_or_boss_claimed(location),
        }
    }

    /// Reports for every location, in tracker order.
    #[must_use]
    pub fn report_all(&self) -> Vec<LocationReport> {
        Location::ALL
            .iter()
            .map(|location| self.report(*location))
            .collect()
    }

    /// Dungeons the victory goal counts.
    #[must_use]
    pub fn goal_dungeons(&self) -> GoalDungeons {
        match self.settings.goal {
            Goal::AllDungeons => Location::ALL.into_iter().collect(),
            Goal::Pedestal => Location::PENDANT_DUNGEONS.into_iter().collect(),
            Goal::Crystals => Location::CRYSTAL_DUNGEONS.into_iter().collect(),
        }
    }

    /// Goal dungeons completed in any order, and every crystal boss down.
    #[must_use]
    pub fn is_goal_met(&self) -> bool {
        let completed = self.dungeons.defeated_count(&self.goal_dungeons());
        let goal_met = match self.settings.goal {
            Goal::AllDungeons => true,
            Goal::Pedestal => completed >= 3,
            Goal::Crystals => completed >= 7,
        };
        goal_met
            && self.dungeons.defeated_count(&Location::CRYSTAL_DUNGEONS)
                == Location::CRYSTAL_DUNGEONS.len()
    }

    pub(crate) fn dungeon(&self, location: Location) -> &'a DungeonState {
        self.dungeons.get(location)
    }

    pub(crate) fn can_defeat_boss(&self, location: Location) -> bool {
        self.bosses.can_defeat(self.dungeon(location).boss)
    }

    pub(crate) const fn keysanity(&self) -> bool {
        self.settings.keysanity
    }

    pub(crate) const fn swordless(&self) -> bool {
        self.settings.swordless
    }

    pub(crate) fn probe(&self, location: Location) -> Probe<'a> {
        Probe {
            items: self.items,
            dungeon: self.dungeon(location),
            swordless: self.settings.swordless,
        }
    }

    pub(crate) fn is_castle_tower_defeated(&self) -> bool {
        self.dungeon(Location::CastleTower).boss_defeated
    }

    /// Moon pearl plus a way into the north-west dark world.
    pub(crate) fn can_reach_outcast(&self) -> bool {
        let items = self.items;
        if !items.moon_pearl {
            return false;
        }
        items.has_titan_glove()
            || (items.has_glove() && items.hammer)
            || (self.is_castle_tower_defeated()
                && items.hookshot
                && (items.hammer || items.has_glove() || items.flippers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{Glove, Sword};
    use crate::oracle::FixedBossOracle;

    fn medallion_with(lock: EntranceLock, items: &Inventory) -> Availability {
        let settings = Settings::default();
        let mut dungeons = DungeonBook::vanilla();
        dungeons
            .get_mut(Location::TurtleRock)
            .reveal_entrance_lock(lock);
        let bosses = FixedBossOracle::all();
        Tracker::new(items, &settings, &dungeons, &bosses).medallion_state(Location::TurtleRock)
    }

    #[test]
    fn medallion_gate_open_without_lock() {
        let items = Inventory::default();
        assert_eq!(
            medallion_with(EntranceLock::None, &items),
            Availability::Available
        );
    }

    #[test]
    fn medallion_gate_needs_a_sword() {
        let items = Inventory {
            quake: true,
            hammer: true,
            ..Inventory::default()
        };
        assert_eq!(
            medallion_with(EntranceLock::Quake, &items),
            Availability::Unavailable
        );
    }

    #[test]
    fn medallion_gate_matches_known_lock() {
        let items = Inventory {
            sword: Sword::Fighter,
            ether: true,
            ..Inventory::default()
        };
        assert_eq!(
            medallion_with(EntranceLock::Ether, &items),
            Availability::Available
        );
        assert_eq!(
            medallion_with(EntranceLock::Bombos, &items),
            Availability::Unavailable
        );
        assert_eq!(
            medallion_with(EntranceLock::Unknown, &items),
            Availability::Possible
        );
    }

    #[test]
    fn unknown_lock_with_all_medallions_is_available() {
        let items = Inventory {
            sword: Sword::Master,
            bombos: true,
            ether: true,
            quake: true,
            ..Inventory::default()
        };
        assert_eq!(
            medallion_with(EntranceLock::Unknown, &items),
            Availability::Available
        );
    }

    #[test]
    fn outcast_access_paths() {
        let settings = Settings::default();
        let bosses = FixedBossOracle::all();
        let mut dungeons = DungeonBook::vanilla();

        let titan = Inventory {
            moon_pearl: true,
            glove: Glove::Titan,
            ..Inventory::default()
        };
        assert!(Tracker::new(&titan, &settings, &dungeons, &bosses).can_reach_outcast());

        let no_pearl = Inventory {
            moon_pearl: false,
            ..titan.clone()
        };
        assert!(!Tracker::new(&no_pearl, &settings, &dungeons, &bosses).can_reach_outcast());

        let hookshot_flippers = Inventory {
            moon_pearl: true,
            hookshot: true,
            flippers: true,
            ..Inventory::default()
        };
        assert!(
            !Tracker::new(&hookshot_flippers, &settings, &dungeons, &bosses).can_reach_outcast()
        );
        dungeons
            .get_mut(Location::CastleTower)
            .mark_boss_defeated(true);
        assert!(
            Tracker::new(&hookshot_flippers, &settings, &dungeons, &bosses).can_reach_outcast()
        );
    }

    #[test]
    fn goal_dungeon_sets_follow_goal() {
        let items = Inventory::default();
        let dungeons = DungeonBook::vanilla();
        let bosses = FixedBossOracle::all();
        for (goal, expected) in [
            (Goal::Crystals, 7),
            (Goal::Pedestal, 3),
            (Goal::AllDungeons, 12),
        ] {
            let settings = Settings::default().with_goal(goal);
            let tracker = Tracker::new(&items, &settings, &dungeons, &bosses);
            assert_eq!(tracker.goal_dungeons().len(), expected);
        }
    }

    #[test]
    fn claimed_depends_on_mode() {
        let items = Inventory::default();
        let bosses = FixedBossOracle::all();
        let mut dungeons = DungeonBook::vanilla();
        {
            let eastern = dungeons.get_mut(Location::EasternPalace);
            for _ in 0..3 {
                eastern.open_chest(false);
            }
        }
        dungeons
            .get_mut(Location::CastleTower)
            .mark_boss_defeated(true);

        let standard = Settings::default();
        let tracker = Tracker::new(&items, &standard, &dungeons, &bosses);
        assert!(tracker.has_chests_or_boss_claimed(Location::EasternPalace));
        assert!(tracker.has_chests_or_boss_claimed(Location::CastleTower));
        assert!(!tracker.has_chests_or_boss_claimed(Location::GanonsTower));

        let keysanity = Settings::default().with_keysanity(true);
        let tracker = Tracker::new(&items, &keysanity, &dungeons, &bosses);
        assert!(!tracker.has_chests_or_boss_claimed(Location::EasternPalace));
        assert!(!tracker.has_chests_or_boss_claimed(Location::CastleTower));
    }

    #[test]
    fn passthroughs_read_dungeon_state() {
        let items = Inventory::default();
        let settings = Settings::default();
        let bosses = FixedBossOracle::all();
        let mut dungeons = DungeonBook::vanilla();
        dungeons
            .get_mut(Location::IcePalace)
            .mark_boss_defeated(true);
        let tracker = Tracker::new(&items, &settings, &dungeons, &bosses);
        assert!(tracker.is_boss_defeated(Location::IcePalace));
        assert!(!tracker.is_boss_defeated(Location::SkullWoods));
        assert_eq!(tracker.boss_name(Location::IcePalace), "Kholdstare");
        assert_eq!(tracker.report_all().len(), Location::COUNT);
    }
}
