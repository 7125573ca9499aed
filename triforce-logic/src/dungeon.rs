//! Per-dungeon progress counters, owned and mutated by the tracker's
//! collaborators. The availability rules only ever read them.
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::error::TrackerError;
use crate::location::{Boss, Location};

const DEFAULT_DUNGEON_DATA: &str = include_str!("../data/dungeons.json");

/// Medallion required to open a dungeon entrance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EntranceLock {
    #[default]
    None,
    Bombos,
    Ether,
    Quake,
    /// The requirement exists but has not been discovered yet.
    Unknown,
}

/// Progress counters for one dungeon.
///
/// `item_chest_count` and `total_chest_count` count what is still *unseen*,
/// not what can be reached. They go down as the player reports finds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DungeonRecord")]
pub struct DungeonState {
    pub location: Location,
    pub boss: Boss,
    pub boss_name: String,
    pub small_key_count: u8,
    pub max_small_keys: u8,
    pub has_big_key: bool,
    pub item_chest_count: u8,
    pub max_item_chests: u8,
    pub total_chest_count: u8,
    pub max_total_chests: u8,
    pub boss_defeated: bool,
    pub entrance_lock: EntranceLock,
    pub has_dungeon_ending_reward: bool,
}

impl DungeonState {
    /// Fresh state at seed start: no keys, nothing found, boss alive.
    #[must_use]
    pub fn new(
        location: Location,
        max_small_keys: u8,
        max_item_chests: u8,
        max_total_chests: u8,
        has_dungeon_ending_reward: bool,
    ) -> Self {
        let boss = location.vanilla_boss();
        Self {
            location,
            boss,
            boss_name: boss.name().to_string(),
            small_key_count: 0,
            max_small_keys,
            has_big_key: false,
            item_chest_count: max_item_chests,
            max_item_chests,
            total_chest_count: max_total_chests,
            max_total_chests,
            boss_defeated: false,
            entrance_lock: default_entrance_lock(location),
            has_dungeon_ending_reward,
        }
    }

    #[must_use]
    pub const fn is_boss_defeated(&self) -> bool {
        self.boss_defeated
    }

    pub fn mark_boss_defeated(&mut self, defeated: bool) {
        self.boss_defeated = defeated;
    }

    /// Record a chest belonging to this dungeon as seen. `is_dungeon_item`
    /// marks maps, compasses and keys, which only count towards the total.
    pub fn open_chest(&mut self, is_dungeon_item: bool) {
        self.total_chest_count = self.total_chest_count.saturating_sub(1);
        if !is_dungeon_item {
            self.item_chest_count = self.item_chest_count.saturating_sub(1);
        }
    }

    pub fn collect_small_key(&mut self) {
        if self.small_key_count < self.max_small_keys {
            self.small_key_count += 1;
        }
    }

    pub fn collect_big_key(&mut self) {
        self.has_big_key = true;
    }

    pub fn reveal_entrance_lock(&mut self, lock: EntranceLock) {
        self.entrance_lock = lock;
    }

    /// Back to seed-start values; maximums, boss and reward flag survive.
    pub fn reset(&mut self) {
        self.small_key_count = 0;
        self.has_big_key = false;
        self.item_chest_count = self.max_item_chests;
        self.total_chest_count = self.max_total_chests;
        self.boss_defeated = false;
        self.entrance_lock = default_entrance_lock(self.location);
    }

    fn validate(&self) -> Result<(), TrackerError> {
        let counters = [
            ("small_key_count", self.small_key_count, self.max_small_keys),
            ("item_chest_count", self.item_chest_count, self.max_item_chests),
            (
                "total_chest_count",
                self.total_chest_count,
                self.max_total_chests,
            ),
        ];
        for (field, value, max) in counters {
            if value > max {
                return Err(TrackerError::InvalidCounter {
                    location: self.location,
                    field,
                    value,
                    max,
                });
            }
        }
        Ok(())
    }
}

const fn default_entrance_lock(location: Location) -> EntranceLock {
    if location.has_medallion_entrance() {
        EntranceLock::Unknown
    } else {
        EntranceLock::None
    }
}

/// Wire shape of a dungeon entry; runtime counters fall back to seed-start
/// values when omitted.
#[derive(Debug, Deserialize)]
struct DungeonRecord {
    location: Location,
    #[serde(default)]
    boss: Option<Boss>,
    #[serde(default)]
    boss_name: Option<String>,
    max_small_keys: u8,
    max_item_chests: u8,
    max_total_chests: u8,
    has_dungeon_ending_reward: bool,
    #[serde(default)]
    small_key_count: u8,
    #[serde(default)]
    has_big_key: bool,
    #[serde(default)]
    item_chest_count: Option<u8>,
    #[serde(default)]
    total_chest_count: Option<u8>,
    #[serde(default)]
    boss_defeated: bool,
    #[serde(default)]
    entrance_lock: Option<EntranceLock>,
}

impl TryFrom<DungeonRecord> for DungeonState {
    type Error = TrackerError;

    fn try_from(record: DungeonRecord) -> Result<Self, Self::Error> {
        let boss = record
            .boss
            .unwrap_or_else(|| record.location.vanilla_boss());
        let state = Self {
            location: record.location,
            boss,
            boss_name: record
                .boss_name
                .unwrap_or_else(|| boss.name().to_string()),
            small_key_count: record.small_key_count,
            max_small_keys: record.max_small_keys,
            has_big_key: record.has_big_key,
            item_chest_count: record.item_chest_count.unwrap_or(record.max_item_chests),
            max_item_chests: record.max_item_chests,
            total_chest_count: record
                .total_chest_count
                .unwrap_or(record.max_total_chests),
            max_total_chests: record.max_total_chests,
            boss_defeated: record.boss_defeated,
            entrance_lock: record
                .entrance_lock
                .unwrap_or_else(|| default_entrance_lock(record.location)),
            has_dungeon_ending_reward: record.has_dungeon_ending_reward,
        };
        state.validate()?;
        Ok(state)
    }
}

/// One [`DungeonState`] per [`Location`], indexed by the closed enum.
///
/// A book can only be built complete, so lookups by location cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DungeonState>", into = "Vec<DungeonState>")]
pub struct DungeonBook {
    dungeons: [DungeonState; Location::COUNT],
}

impl DungeonBook {
    /// Seed-start state for every dungeon, from the embedded data table.
    #[must_use]
    pub fn vanilla() -> Self {
        Self::from_json(DEFAULT_DUNGEON_DATA).unwrap_or_else(|err| {
            warn!("embedded dungeon table rejected ({err}); using built-in layout");
            Self::builtin()
        })
    }

    /// Parse a dungeon table listing each location exactly once.
    ///
    /// # Errors
    ///
    /// Returns `Parse` for malformed JSON or out-of-range counters,
    /// `DuplicateDungeon` for a repeated location and `NotFound` for a
    /// location missing from the table.
    pub fn from_json(json: &str) -> Result<Self, TrackerError> {
        let entries: Vec<DungeonState> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Build a book from entries in any order.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateDungeon` or `NotFound` when the entries do not cover
    /// each location exactly once, or `InvalidCounter` for an entry whose
    /// counters exceed their maximum.
    pub fn from_entries(entries: Vec<DungeonState>) -> Result<Self, TrackerError> {
        let mut slots: [Option<DungeonState>; Location::COUNT] = Default::default();
        for entry in entries {
            entry.validate()?;
            let location = entry.location;
            let slot = &mut slots[location.index()];
            if slot.is_some() {
                return Err(TrackerError::DuplicateDungeon { location });
            }
            *slot = Some(entry);
        }

        let dungeons = slots
            .into_iter()
            .zip(Location::ALL)
            .map(|(slot, location)| slot.ok_or_else(|| TrackerError::not_found(location.name())))
            .collect::<Result<Vec<_>, _>>()?;
        let dungeons: [DungeonState; Location::COUNT] = dungeons
            .try_into()
            .map_err(|_| TrackerError::not_found("dungeon table"))?;
        debug!("dungeon table loaded with {} locations", dungeons.len());
        Ok(Self { dungeons })
    }

    fn builtin() -> Self {
        const LAYOUT: [(Location, u8, u8, u8, bool); Location::COUNT] = [
            (Location::CastleTower, 2, 0, 2, false),
            (Location::EasternPalace, 0, 3, 6, true),
            (Location::DesertPalace, 1, 2, 6, true),
            (Location::TowerOfHera, 1, 2, 6, true),
            (Location::PalaceOfDarkness, 6, 5, 14, true),
            (Location::SwampPalace, 1, 6, 10, true),
            (Location::SkullWoods, 3, 2, 8, true),
            (Location::ThievesTown, 1, 4, 8, true),
            (Location::IcePalace, 2, 3, 8, true),
            (Location::MiseryMire, 3, 2, 8, true),
            (Location::TurtleRock, 4, 5, 12, true),
            (Location::GanonsTower, 4, 20, 27, false),
        ];
        Self {
            dungeons: LAYOUT.map(|(location, keys, items, total, reward)| {
                DungeonState::new(location, keys, items, total, reward)
            }),
        }
    }

    #[must_use]
    pub fn get(&self, location: Location) -> &DungeonState {
        &self.dungeons[location.index()]
    }

    pub fn get_mut(&mut self, location: Location) -> &mut DungeonState {
        &mut self.dungeons[location.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &DungeonState> {
        self.dungeons.iter()
    }

    /// Number of listed locations whose boss has been defeated.
    #[must_use]
    pub fn defeated_count(&self, locations: &[Location]) -> usize {
        locations
            .iter()
            .filter(|location| self.get(**location).boss_defeated)
            .count()
    }

    pub fn reset(&mut self) {
        for dungeon in &mut self.dungeons {
            dungeon.reset();
        }
    }
}

impl Default for DungeonBook {
    fn default() -> Self {
        Self::vanilla()
    }
}

impl Index<Location> for DungeonBook {
    type Output = DungeonState;

    fn index(&self, location: Location) -> &Self::Output {
        self.get(location)
    }
}

impl TryFrom<Vec<DungeonState>> for DungeonBook {
    type Error = TrackerError;

    fn try_from(entries: Vec<DungeonState>) -> Result<Self, Self::Error> {
        Self::from_entries(entries)
    }
}

impl From<DungeonBook> for Vec<DungeonState> {
    fn from(book: DungeonBook) -> Self {
        book.dungeons.into()
    }
}
