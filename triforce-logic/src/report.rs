//! Serializable inputs and outputs for whole-tracker evaluation.
use serde::{Deserialize, Serialize};

use crate::availability::Availability;
use crate::dungeon::DungeonBook;
use crate::error::TrackerError;
use crate::items::Inventory;
use crate::location::{Boss, Location};
use crate::oracle::{FixedBossOracle, ItemBossOracle};
use crate::rules::Tracker;
use crate::settings::Settings;

/// Everything the tracker shows for one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationReport {
    pub location: Location,
    pub boss: Boss,
    pub boss_name: String,
    pub boss_availability: Availability,
    pub chest_availability: Availability,
    pub boss_defeated: bool,
    pub claimed: bool,
}

/// A saved tracker: inventory, ruleset, dungeon progress and optionally the
/// set of bosses the player has marked as beatable.
///
/// Without `bosses`, defeatability is derived from the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TrackerSnapshot {
    pub inventory: Inventory,
    pub settings: Settings,
    pub dungeons: DungeonBook,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bosses: Option<FixedBossOracle>,
}

impl TrackerSnapshot {
    /// # Errors
    ///
    /// Returns `Parse` for malformed JSON or a dungeon table that does not
    /// cover each location exactly once.
    pub fn from_json(json: &str) -> Result<Self, TrackerError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Run `f` against a tracker over this snapshot.
    pub fn with_tracker<R>(&self, f: impl FnOnce(&Tracker<'_>) -> R) -> R {
        match &self.bosses {
            Some(fixed) => f(&Tracker::new(
                &self.inventory,
                &self.settings,
                &self.dungeons,
                fixed,
            )),
            None => {
                let derived = ItemBossOracle::new(&self.inventory, &self.settings);
                f(&Tracker::new(
                    &self.inventory,
                    &self.settings,
                    &self.dungeons,
                    &derived,
                ))
            }
        }
    }

    #[must_use]
    pub fn report(&self, location: Location) -> LocationReport {
        self.with_tracker(|tracker| tracker.report(location))
    }

    #[must_use]
    pub fn report_all(&self) -> Vec<LocationReport> {
        self.with_tracker(|tracker| tracker.report_all())
    }

    #[must_use]
    pub fn is_goal_met(&self) -> bool {
        self.with_tracker(|tracker| tracker.is_goal_met())
    }
}
