//! Ganon's Tower, gated on the victory goal.
use super::Tracker;
use super::reach::{ChestTally, pigeonhole};
use crate::availability::Availability;
use crate::location::Location;

/// Goal met, then titan's mitt and pearl plus a way up east death mountain.
fn can_enter_ganons_tower(t: &Tracker<'_>) -> bool {
    if !t.is_goal_met() {
        return false;
    }
    let items = t.items;
    let can_climb_super_bunny_cave = items.hookshot;
    let can_cross_turtle_rock = items.hammer;
    items.has_titan_glove()
        && items.moon_pearl
        && (can_climb_super_bunny_cave || can_cross_turtle_rock)
}

pub(super) fn ganons_tower_boss(t: &Tracker<'_>) -> Availability {
    if !can_enter_ganons_tower(t) {
        return Availability::Unavailable;
    }

    let items = t.items;
    if !items.bow || !items.has_fire_source() {
        return Availability::Unavailable;
    }
    if !t.can_defeat_boss(Location::GanonsTower) {
        return Availability::Unavailable;
    }

    if t.keysanity() {
        let dungeon = t.dungeon(Location::GanonsTower);
        if !dungeon.has_big_key {
            return Availability::Unavailable;
        }
        if dungeon.small_key_count < 3 {
            return Availability::Possible;
        }
    }

    Availability::Available
}

/// Reachable slots with the keys in hand. The left side always yields one
/// extra key.
fn ganons_tower_tally(t: &Tracker<'_>) -> ChestTally {
    let items = t.items;
    let dungeon = t.dungeon(Location::GanonsTower);
    let has_fire_source = items.has_fire_source();
    let can_open_big_chest_side = dungeon.has_big_key && items.bow && has_fire_source;
    let mut keys = dungeon
        .small_key_count
        .min(dungeon.max_small_keys)
        .saturating_add(1);
    let mut tally = ChestTally::new(2);

    if items.boots {
        // Torch.
        tally.open(1);
    }
    if items.somaria {
        // Tile room.
        tally.open(1);
    }
    if items.hookshot && items.hammer {
        // Skeleton room and the west side.
        tally.open(4);
    }
    if can_open_big_chest_side {
        // Mini helmasaurs drop a key.
        tally.open(2);
        keys = keys.saturating_add(1);
    }
    if items.somaria && items.fire_rod && keys > 0 {
        tally.open(4);
    }
    if items.hookshot && items.hammer {
        // Firebar room; the key spent here is refunded on the left side.
        tally.open(1);
    }
    if can_open_big_chest_side && keys > 0 {
        tally.open(1);
        keys -= 1;
    }

    if keys > 0 {
        if items.hookshot && items.hammer {
            // Randomizer room and the Armos area.
            tally.open(if dungeon.has_big_key { 9 } else { 8 });
            keys -= 1;
        } else if items.somaria && items.fire_rod {
            tally.open(if dungeon.has_big_key { 5 } else { 4 });
            keys -= 1;
        }
    }

    if (items.hookshot || items.bombos) && items.hammer && keys > 0 {
        // Double firebar map room.
        tally.open(1);
    }

    tally
}

pub(super) fn ganons_tower_chests(t: &Tracker<'_>) -> Availability {
    if !t.keysanity() {
        return ganons_tower_boss(t);
    }
    if !can_enter_ganons_tower(t) {
        return Availability::Unavailable;
    }

    let items = t.items;
    let dungeon = t.dungeon(Location::GanonsTower);
    if dungeon.has_big_key
        && dungeon.small_key_count > 2
        && items.bow
        && items.hookshot
        && items.has_fire_source()
        && items.somaria
    {
        return Availability::Available;
    }

    // No dark rooms are counted here.
    pigeonhole(
        dungeon.total_chest_count,
        dungeon.max_total_chests,
        ganons_tower_tally(t),
        true,
    )
}
