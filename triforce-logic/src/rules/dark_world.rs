//! Dark world crystal dungeons without an entrance medallion.
use super::Tracker;
use super::reach::{ChestTally, Probe, Step, always, first_step, pigeonhole};
use crate::availability::Availability;
use crate::items::Sword;
use crate::location::Location;

pub(super) fn palace_of_darkness_boss(t: &Tracker<'_>) -> Availability {
    let items = t.items;
    if !items.moon_pearl || !items.bow || !items.hammer {
        return Availability::Unavailable;
    }
    if !t.is_castle_tower_defeated() && !items.has_glove() {
        return Availability::Unavailable;
    }
    if !t.can_defeat_boss(Location::PalaceOfDarkness) {
        return Availability::Unavailable;
    }

    if t.keysanity() {
        let dungeon = t.dungeon(Location::PalaceOfDarkness);
        if !dungeon.has_big_key || dungeon.small_key_count == 0 {
            return Availability::Unavailable;
        }
        if dungeon.small_key_count < dungeon.max_small_keys {
            return Availability::lit_possible(items.lantern);
        }
    }

    Availability::lit(items.lantern)
}

/// Slots reachable in Palace of Darkness, spending keys in the order a
/// player most likely would.
fn palace_of_darkness_tally(t: &Tracker<'_>) -> ChestTally {
    let items = t.items;
    let dungeon = t.dungeon(Location::PalaceOfDarkness);
    let mut keys = dungeon.small_key_count;
    let mut tally = ChestTally::new(1);

    if items.bow {
        tally.open(2);
    }

    if items.bow && items.hammer {
        tally.open(2);
    } else if keys > 0 {
        tally.open(2);
        keys -= 1;
    }

    if keys > 0 {
        tally.open(1);
        tally.open_dark(2);
        keys -= 1;
    }

    if keys > 0 {
        // Big chest room.
        tally.open_dark(if dungeon.has_big_key { 3 } else { 2 });
        keys -= 1;
    }

    if items.bow && items.hammer && dungeon.has_big_key && keys > 0 {
        // Helmasaur.
        tally.open_dark(1);
        keys -= 1;
    }

    // Spike room, then the big key chest.
    for _ in 0..2 {
        if keys > 0 {
            tally.open(1);
            keys -= 1;
        }
    }

    tally
}

pub(super) fn palace_of_darkness_chests(t: &Tracker<'_>) -> Availability {
    let items = t.items;
    if !items.moon_pearl {
        return Availability::Unavailable;
    }

    let via_swamp = items.hammer && items.has_glove();
    let via_forest_swim = items.has_titan_glove() && items.flippers;
    if !t.is_castle_tower_defeated() && !via_swamp && !via_forest_swim {
        return Availability::Unavailable;
    }

    let dungeon = t.dungeon(Location::PalaceOfDarkness);
    if !t.keysanity() {
        let last_item_behind_hammer = dungeon.item_chest_count == 1 && !items.hammer;
        return if !(items.bow && items.lantern) || last_item_behind_hammer {
            Availability::Possible
        } else {
            Availability::Available
        };
    }

    if dungeon.small_key_count == dungeon.max_small_keys
        && dungeon.has_big_key
        && items.hammer
        && items.bow
        && items.lantern
    {
        return Availability::Available;
    }

    pigeonhole(
        dungeon.total_chest_count,
        dungeon.max_total_chests,
        palace_of_darkness_tally(t),
        items.lantern,
    )
}

pub(super) fn swamp_palace_boss(t: &Tracker<'_>) -> Availability {
    let items = t.items;
    if !items.moon_pearl || !items.mirror || !items.flippers {
        return Availability::Unavailable;
    }
    if !items.hammer || !items.hookshot {
        return Availability::Unavailable;
    }
    if !items.has_glove() && !t.is_castle_tower_defeated() {
        return Availability::Unavailable;
    }
    if !t.can_defeat_boss(Location::SwampPalace) {
        return Availability::Unavailable;
    }
    if t.keysanity() && t.dungeon(Location::SwampPalace).small_key_count == 0 {
        return Availability::Unavailable;
    }
    Availability::Available
}

const SWAMP_PALACE_STEPS: &[Step] = &[
    Step::possible(10, always),
    Step::possible(9, |p| p.keys() == 1),
    Step::possible(6, |p| p.keys() == 1 && p.items.hammer),
    Step::possible(5, |p| p.big_key() && p.keys() == 1 && p.items.hammer),
    Step::possible(2, |p| p.keys() == 1 && p.items.hammer && p.items.hookshot),
];

pub(super) fn swamp_palace_chests(t: &Tracker<'_>) -> Availability {
    let items = t.items;
    if !items.moon_pearl || !items.mirror || !items.flippers {
        return Availability::Unavailable;
    }
    if !t.can_reach_outcast() && !items.hammer {
        return Availability::Unavailable;
    }

    let dungeon = t.dungeon(Location::SwampPalace);
    if t.keysanity() {
        if dungeon.has_big_key && dungeon.small_key_count == 1 && items.hammer && items.hookshot {
            return Availability::Available;
        }
        return first_step(&t.probe(Location::SwampPalace), SWAMP_PALACE_STEPS);
    }

    match dungeon.item_chest_count {
        0..=2 if items.hammer && items.hookshot => Availability::Available,
        0..=2 => Availability::Unavailable,
        3..=4 if !items.hammer => Availability::Unavailable,
        3..=4 if !items.hookshot => Availability::Possible,
        3..=5 if !items.hammer => Availability::Unavailable,
        _ if !items.hammer => Availability::Possible,
        _ => Availability::Available,
    }
}

pub(super) fn skull_woods_boss(t: &Tracker<'_>) -> Availability {
    if !t.can_reach_outcast() {
        return Availability::Unavailable;
    }
    if !t.items.fire_rod {
        return Availability::Unavailable;
    }
    if !t.can_defeat_boss(Location::SkullWoods) {
        return Availability::Unavailable;
    }
    // The curtain before Mothula needs a sword outside swordless seeds.
    if !t.swordless() && t.items.sword == Sword::None {
        return Availability::Unavailable;
    }
    Availability::Available
}

fn can_pass_skull_woods_curtain(p: &Probe<'_>) -> bool {
    p.swordless || p.items.has_sword()
}

const SKULL_WOODS_STEPS: &[Step] = &[
    Step::possible(4, always),
    Step::possible(3, |p| p.big_key() || p.items.fire_rod),
    Step::possible(2, |p| {
        p.items.fire_rod && (can_pass_skull_woods_curtain(p) || p.big_key())
    }),
];

pub(super) fn skull_woods_chests(t: &Tracker<'_>) -> Availability {
    if !t.can_reach_outcast() {
        return Availability::Unavailable;
    }

    let items = t.items;
    if t.keysanity() {
        let probe = t.probe(Location::SkullWoods);
        if probe.big_key() && items.fire_rod && can_pass_skull_woods_curtain(&probe) {
            return Availability::Available;
        }
        return first_step(&probe, SKULL_WOODS_STEPS);
    }

    if items.fire_rod {
        Availability::Available
    } else {
        Availability::Possible
    }
}

pub(super) fn thieves_town_boss(t: &Tracker<'_>) -> Availability {
    if !t.can_reach_outcast() {
        return Availability::Unavailable;
    }
    if !t.can_defeat_boss(Location::ThievesTown) {
        return Availability::Unavailable;
    }
    if t.keysanity() && !t.dungeon(Location::ThievesTown).has_big_key {
        return Availability::Unavailable;
    }
    Availability::Available
}

const THIEVES_TOWN_STEPS: &[Step] = &[
    Step::possible(5, always),
    Step::possible(3, |p| p.big_key()),
    Step::possible(2, |p| {
        p.big_key() && (p.items.has_melee() || p.items.has_cane())
    }),
];

pub(super) fn thieves_town_chests(t: &Tracker<'_>) -> Availability {
    if !t.can_reach_outcast() {
        return Availability::Unavailable;
    }

    let items = t.items;
    let dungeon = t.dungeon(Location::ThievesTown);
    if t.keysanity() {
        if dungeon.has_big_key && dungeon.small_key_count == 1 && items.hammer {
            return Availability::Available;
        }
        return first_step(&t.probe(Location::ThievesTown), THIEVES_TOWN_STEPS);
    }

    // Blind's cell floor needs the hammer.
    if dungeon.item_chest_count == 1 && !items.hammer {
        Availability::Possible
    } else {
        Availability::Available
    }
}

/// Keysanity Ice Palace: somaria bypasses one key door.
fn ice_palace_key_verdict(t: &Tracker<'_>) -> Availability {
    let keys = t.dungeon(Location::IcePalace).small_key_count;
    if (keys > 0 && t.items.somaria) || keys > 1 {
        Availability::Available
    } else {
        Availability::Possible
    }
}

pub(super) fn ice_palace_boss(t: &Tracker<'_>) -> Availability {
    let items = t.items;
    if !items.moon_pearl || !items.flippers || !items.has_titan_glove() || !items.hammer {
        return Availability::Unavailable;
    }
    if !t.can_defeat_boss(Location::IcePalace) {
        return Availability::Unavailable;
    }

    if t.keysanity() {
        return ice_palace_key_verdict(t);
    }

    // Without hookshot or somaria the spike room needs a bomb jump.
    if items.hookshot || items.somaria {
        Availability::Available
    } else {
        Availability::Glitches
    }
}

const ICE_PALACE_STEPS: &[Step] = &[
    Step::possible(5, always),
    Step::possible(4, |p| p.big_key()),
    Step::possible(2, |p| p.items.hammer),
];

pub(super) fn ice_palace_chests(t: &Tracker<'_>) -> Availability {
    let items = t.items;
    if !items.moon_pearl || !items.flippers || !items.has_titan_glove() {
        return Availability::Unavailable;
    }
    if !items.fire_rod && !(items.bombos && items.has_melee()) {
        return Availability::Unavailable;
    }

    if !t.keysanity() {
        return Availability::lit(items.hammer);
    }

    let probe = t.probe(Location::IcePalace);
    if probe.big_key() && items.hammer {
        return ice_palace_key_verdict(t);
    }
    first_step(&probe, ICE_PALACE_STEPS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::DungeonBook;
    use crate::items::{Glove, Inventory};
    use crate::oracle::FixedBossOracle;
    use crate::settings::Settings;

    fn check(
        items: &Inventory,
        settings: &Settings,
        dungeons: &DungeonBook,
        rule: fn(&Tracker<'_>) -> Availability,
    ) -> Availability {
        let bosses = FixedBossOracle::all();
        rule(&Tracker::new(items, settings, dungeons, &bosses))
    }

    fn outcast_kit() -> Inventory {
        Inventory {
            moon_pearl: true,
            glove: Glove::Titan,
            ..Inventory::default()
        }
    }

    #[test]
    fn palace_of_darkness_entrance_slot_alone() {
        let settings = Settings::default().with_keysanity(true);
        let mut dungeons = DungeonBook::vanilla();
        dungeons
            .get_mut(Location::CastleTower)
            .mark_boss_defeated(true);
        let items = Inventory {
            moon_pearl: true,
            ..Inventory::default()
        };
        // Only the entrance slot is reachable: forced while nothing is seen.
        assert_eq!(
            check(&items, &settings, &dungeons, palace_of_darkness_chests),
            Availability::Possible
        );
        dungeons
            .get_mut(Location::PalaceOfDarkness)
            .open_chest(false);
        assert_eq!(
            check(&items, &settings, &dungeons, palace_of_darkness_chests),
            Availability::Unavailable
        );
    }

    #[test]
    fn palace_of_darkness_dark_slots_need_lantern() {
        let settings = Settings::default().with_keysanity(true);
        let mut dungeons = DungeonBook::vanilla();
        let items = Inventory {
            moon_pearl: true,
            bow: true,
            hammer: true,
            glove: Glove::Power,
            ..Inventory::default()
        };
        {
            let palace = dungeons.get_mut(Location::PalaceOfDarkness);
            palace.collect_small_key();
            palace.collect_small_key();
        }
        // 1 + 2 + 2 lit, then 3 more with 2 dark, then 2 dark: 10 reachable, 4 dark.
        dungeons
            .get_mut(Location::PalaceOfDarkness)
            .total_chest_count = 6;
        assert_eq!(
            check(&items, &settings, &dungeons, palace_of_darkness_chests),
            Availability::Glitches
        );
        let lit = Inventory {
            lantern: true,
            ..items.clone()
        };
        assert_eq!(
            check(&lit, &settings, &dungeons, palace_of_darkness_chests),
            Availability::Possible
        );
        dungeons
            .get_mut(Location::PalaceOfDarkness)
            .total_chest_count = 9;
        assert_eq!(
            check(&items, &settings, &dungeons, palace_of_darkness_chests),
            Availability::Possible
        );
    }

    #[test]
    fn helmasaur_without_all_keys_is_possible() {
        let settings = Settings::default().with_keysanity(true);
        let mut dungeons = DungeonBook::vanilla();
        let items = Inventory {
            moon_pearl: true,
            bow: true,
            hammer: true,
            glove: Glove::Power,
            lantern: true,
            ..Inventory::default()
        };
        {
            let palace = dungeons.get_mut(Location::PalaceOfDarkness);
            palace.collect_big_key();
            palace.collect_small_key();
        }
        assert_eq!(
            check(&items, &settings, &dungeons, palace_of_darkness_boss),
            Availability::Possible
        );
        for _ in 0..5 {
            dungeons
                .get_mut(Location::PalaceOfDarkness)
                .collect_small_key();
        }
        assert_eq!(
            check(&items, &settings, &dungeons, palace_of_darkness_boss),
            Availability::Available
        );
    }

    #[test]
    fn swamp_hammer_alone_opens_the_gate() {
        let settings = Settings::default();
        let dungeons = DungeonBook::vanilla();
        let items = Inventory {
            moon_pearl: true,
            mirror: true,
            flippers: true,
            hammer: true,
            ..Inventory::default()
        };
        assert_eq!(
            check(&items, &settings, &dungeons, swamp_palace_chests),
            Availability::Available
        );
        let items = Inventory {
            hammer: false,
            ..items
        };
        assert_eq!(
            check(&items, &settings, &dungeons, swamp_palace_chests),
            Availability::Unavailable
        );
    }

    #[test]
    fn swamp_item_count_bands() {
        let settings = Settings::default();
        let mut dungeons = DungeonBook::vanilla();
        let items = Inventory {
            hammer: true,
            mirror: true,
            flippers: true,
            ..outcast_kit()
        };
        dungeons.get_mut(Location::SwampPalace).item_chest_count = 4;
        assert_eq!(
            check(&items, &settings, &dungeons, swamp_palace_chests),
            Availability::Possible
        );
        dungeons.get_mut(Location::SwampPalace).item_chest_count = 2;
        assert_eq!(
            check(&items, &settings, &dungeons, swamp_palace_chests),
            Availability::Unavailable
        );
        let hooked = Inventory {
            hookshot: true,
            ..items
        };
        assert_eq!(
            check(&hooked, &settings, &dungeons, swamp_palace_chests),
            Availability::Available
        );
    }

    #[test]
    fn mothula_needs_a_sword_outside_swordless() {
        let items = Inventory {
            fire_rod: true,
            hammer: true,
            ..outcast_kit()
        };
        let dungeons = DungeonBook::vanilla();
        assert_eq!(
            check(&items, &Settings::default(), &dungeons, skull_woods_boss),
            Availability::Unavailable
        );
        let swordless = Settings::default().with_swordless(true);
        assert_eq!(
            check(&items, &swordless, &dungeons, skull_woods_boss),
            Availability::Available
        );
    }

    #[test]
    fn skull_woods_without_fire_rod_is_possible() {
        let dungeons = DungeonBook::vanilla();
        let items = outcast_kit();
        assert_eq!(
            check(&items, &Settings::default(), &dungeons, skull_woods_chests),
            Availability::Possible
        );
    }

    #[test]
    fn blind_keysanity_needs_big_key() {
        let settings = Settings::default().with_keysanity(true);
        let mut dungeons = DungeonBook::vanilla();
        let items = outcast_kit();
        assert_eq!(
            check(&items, &settings, &dungeons, thieves_town_boss),
            Availability::Unavailable
        );
        dungeons
            .get_mut(Location::ThievesTown)
            .collect_big_key();
        assert_eq!(
            check(&items, &settings, &dungeons, thieves_town_boss),
            Availability::Available
        );
    }

    #[test]
    fn thieves_town_last_item_behind_hammer() {
        let mut dungeons = DungeonBook::vanilla();
        dungeons.get_mut(Location::ThievesTown).item_chest_count = 1;
        let items = outcast_kit();
        assert_eq!(
            check(&items, &Settings::default(), &dungeons, thieves_town_chests),
            Availability::Possible
        );
    }

    #[test]
    fn ice_palace_without_hammer_is_glitched() {
        let dungeons = DungeonBook::vanilla();
        let items = Inventory {
            flippers: true,
            fire_rod: true,
            ..outcast_kit()
        };
        assert_eq!(
            check(&items, &Settings::default(), &dungeons, ice_palace_chests),
            Availability::Glitches
        );
    }

    #[test]
    fn kholdstare_spike_room_without_hookshot_or_somaria() {
        let dungeons = DungeonBook::vanilla();
        let items = Inventory {
            flippers: true,
            hammer: true,
            ..outcast_kit()
        };
        assert_eq!(
            check(&items, &Settings::default(), &dungeons, ice_palace_boss),
            Availability::Glitches
        );
        let items = Inventory {
            somaria: true,
            ..items
        };
        assert_eq!(
            check(&items, &Settings::default(), &dungeons, ice_palace_boss),
            Availability::Available
        );
    }

    #[test]
    fn kholdstare_keysanity_counts_keys() {
        let settings = Settings::default().with_keysanity(true);
        let mut dungeons = DungeonBook::vanilla();
        let items = Inventory {
            flippers: true,
            hammer: true,
            ..outcast_kit()
        };
        dungeons.get_mut(Location::IcePalace).collect_small_key();
        assert_eq!(
            check(&items, &settings, &dungeons, ice_palace_boss),
            Availability::Possible
        );
        dungeons.get_mut(Location::IcePalace).collect_small_key();
        assert_eq!(
            check(&items, &settings, &dungeons, ice_palace_boss),
            Availability::Available
        );
    }
}
