//! Keysanity chest counting.
//!
//! `total_chest_count` is the number of a dungeon's items still unseen. If
//! more of them remain than there are unreachable slots to hide them in, at
//! least one must sit in a reachable slot. Dungeons describe their reachable
//! slots either with an explicit [`ChestTally`] or with a [`Step`] table.
use crate::availability::Availability;
use crate::dungeon::DungeonState;
use crate::items::Inventory;

/// Reachable chest slots, and how many of those sit in dark rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChestTally {
    pub reachable: u8,
    pub dark: u8,
}

impl ChestTally {
    #[must_use]
    pub const fn new(reachable: u8) -> Self {
        Self { reachable, dark: 0 }
    }

    pub fn open(&mut self, chests: u8) {
        self.reachable = self.reachable.saturating_add(chests);
    }

    pub fn open_dark(&mut self, chests: u8) {
        self.open(chests);
        self.dark = self.dark.saturating_add(chests);
    }

    /// Reachable slots that need no light.
    #[must_use]
    pub const fn lit(&self) -> u8 {
        self.reachable.saturating_sub(self.dark)
    }
}

/// Pigeonhole verdict for `unseen` items spread over `max_total` slots.
///
/// `Possible` when the lit reachable slots alone must hold an item,
/// lantern-dependent when only the dark ones are guaranteed, otherwise
/// `Unavailable`.
#[must_use]
pub fn pigeonhole(unseen: u8, max_total: u8, tally: ChestTally, has_light: bool) -> Availability {
    let hidden_slots = |reachable: u8| i16::from(max_total) - i16::from(reachable);
    let unseen = i16::from(unseen);
    if unseen <= hidden_slots(tally.reachable) {
        return Availability::Unavailable;
    }
    if unseen > hidden_slots(tally.lit()) {
        Availability::Possible
    } else {
        Availability::lit_possible(has_light)
    }
}

/// Facts a keysanity step can inspect.
#[derive(Debug, Clone, Copy)]
pub struct Probe<'a> {
    pub items: &'a Inventory,
    pub dungeon: &'a DungeonState,
    pub swordless: bool,
}

impl Probe<'_> {
    #[must_use]
    pub const fn keys(&self) -> u8 {
        self.dungeon.small_key_count
    }

    #[must_use]
    pub const fn big_key(&self) -> bool {
        self.dungeon.has_big_key
    }

    #[must_use]
    pub const fn unseen(&self) -> u8 {
        self.dungeon.total_chest_count
    }
}

/// One row of a threshold table: with at least `min_unseen` items unseen and
/// `gate` passing, the reachable part of the dungeon must hold one of them.
#[derive(Clone, Copy)]
pub struct Step {
    pub min_unseen: u8,
    pub gate: fn(&Probe<'_>) -> bool,
    pub yields: fn(&Probe<'_>) -> Availability,
}

impl Step {
    pub const fn possible(min_unseen: u8, gate: fn(&Probe<'_>) -> bool) -> Self {
        Self {
            min_unseen,
            gate,
            yields: possible,
        }
    }

    pub const fn glitches(min_unseen: u8, gate: fn(&Probe<'_>) -> bool) -> Self {
        Self {
            min_unseen,
            gate,
            yields: glitches,
        }
    }

    /// Guaranteed chests are in the dark.
    pub const fn dark(min_unseen: u8, gate: fn(&Probe<'_>) -> bool) -> Self {
        Self {
            min_unseen,
            gate,
            yields: lantern_possible,
        }
    }

    pub const fn with(
        min_unseen: u8,
        gate: fn(&Probe<'_>) -> bool,
        yields: fn(&Probe<'_>) -> Availability,
    ) -> Self {
        Self {
            min_unseen,
            gate,
            yields,
        }
    }

    fn applies(&self, probe: &Probe<'_>) -> bool {
        probe.unseen() >= self.min_unseen && (self.gate)(probe)
    }
}

/// First matching row wins; no match is `Unavailable`.
#[must_use]
pub fn first_step(probe: &Probe<'_>, steps: &[Step]) -> Availability {
    steps
        .iter()
        .find(|step| step.applies(probe))
        .map_or(Availability::Unavailable, |step| (step.yields)(probe))
}

pub const fn always(_: &Probe<'_>) -> bool {
    true
}

const fn possible(_: &Probe<'_>) -> Availability {
    Availability::Possible
}

const fn glitches(_: &Probe<'_>) -> Availability {
    Availability::Glitches
}

fn lantern_possible(probe: &Probe<'_>) -> Availability {
    Availability::lit_possible(probe.items.lantern)
}
