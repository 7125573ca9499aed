//! Triforce Logic
//!
//! Availability engine for an A Link to the Past randomizer tracker. Given the
//! player's inventory, the ruleset and per-dungeon progress, it answers for
//! each of the twelve dungeon locations whether the boss can be beaten and
//! whether anything can still be taken from the chests.
//!
//! The crate is pure logic: no I/O beyond parsing embedded or supplied JSON.

pub mod availability;
pub mod dungeon;
pub mod error;
pub mod items;
pub mod location;
pub mod oracle;
pub mod report;
pub mod rules;
pub mod settings;

// Re-export commonly used types
pub use availability::Availability;
pub use dungeon::{DungeonBook, DungeonState, EntranceLock};
pub use error::TrackerError;
pub use items::{Glove, Inventory, Shield, Sword};
pub use location::{Boss, Location};
pub use oracle::{BossOracle, FixedBossOracle, ItemBossOracle};
pub use report::{LocationReport, TrackerSnapshot};
pub use rules::{ChestTally, GoalDungeons, Tracker, pigeonhole};
pub use settings::{Goal, Settings};
