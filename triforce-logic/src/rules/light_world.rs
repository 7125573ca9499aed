//! Castle Tower and the three pendant dungeons.
use super::Tracker;
use super::reach::{Probe, Step, always, first_step};
use crate::availability::Availability;
use crate::location::Location;

fn castle_tower_swordless_boss(t: &Tracker<'_>) -> Availability {
    let items = t.items;
    if !(items.hammer || items.cape) {
        return Availability::Unavailable;
    }
    if !items.net {
        return Availability::Unavailable;
    }
    Availability::lit(items.lantern)
}

pub(super) fn castle_tower_boss(t: &Tracker<'_>) -> Availability {
    if t.swordless() {
        return castle_tower_swordless_boss(t);
    }

    let items = t.items;
    let can_enter = items.cape || items.has_beam_sword();
    if !can_enter || !t.can_defeat_boss(Location::CastleTower) {
        return Availability::Unavailable;
    }

    if t.keysanity() {
        let dungeon = t.dungeon(Location::CastleTower);
        if dungeon.small_key_count != dungeon.max_small_keys {
            return Availability::Unavailable;
        }
    }

    Availability::lit(items.lantern)
}

pub(super) fn castle_tower_chests(t: &Tracker<'_>) -> Availability {
    if !t.keysanity() {
        return castle_tower_boss(t);
    }

    let items = t.items;
    let can_cut_curtain = if t.swordless() {
        items.hammer
    } else {
        items.has_beam_sword()
    };
    if !(can_cut_curtain || items.cape) {
        return Availability::Unavailable;
    }

    if t.dungeon(Location::CastleTower).small_key_count == 0 {
        return Availability::Possible;
    }

    Availability::lit(items.lantern)
}

pub(super) fn eastern_palace_boss(t: &Tracker<'_>) -> Availability {
    let dungeon = t.dungeon(Location::EasternPalace);
    if t.keysanity() && !dungeon.has_big_key {
        return Availability::Unavailable;
    }
    if !t.items.bow {
        return Availability::Unavailable;
    }
    if !t.can_defeat_boss(Location::EasternPalace) {
        return Availability::Unavailable;
    }
    Availability::lit(t.items.lantern)
}

/// Eastern Palace holds six slots; the big chest and Armos need the big key,
/// the dark rooms need the lantern.
const EASTERN_PALACE_STEPS: &[Step] = &[
    Step::possible(4, always),
    Step::glitches(3, |p| !p.big_key() && !p.items.lantern),
    Step::possible(3, |p| p.big_key() || p.items.lantern),
    Step::dark(2, |p| p.big_key()),
    Step::glitches(0, |p| p.big_key() && p.items.bow && !p.items.lantern),
];

pub(super) fn eastern_palace_chests(t: &Tracker<'_>) -> Availability {
    let items = t.items;
    let dungeon = t.dungeon(Location::EasternPalace);

    if t.keysanity() {
        if dungeon.has_big_key && items.bow && items.lantern {
            return Availability::Available;
        }
        return first_step(&t.probe(Location::EasternPalace), EASTERN_PALACE_STEPS);
    }

    if dungeon.item_chest_count <= 2 && !items.lantern {
        return Availability::Possible;
    }
    if dungeon.item_chest_count == 1 && !items.bow {
        return Availability::Possible;
    }
    Availability::Available
}

/// Book, or flute and titan's mitt to the mire with the mirror back.
fn can_enter_desert_palace_front(t: &Tracker<'_>) -> bool {
    let items = t.items;
    items.book || (items.flute && items.has_titan_glove() && items.mirror)
}

pub(super) fn desert_palace_boss(t: &Tracker<'_>) -> Availability {
    let items = t.items;
    let keysanity = t.keysanity();

    if keysanity && !t.dungeon(Location::DesertPalace).has_big_key {
        return Availability::Unavailable;
    }

    let can_enter_light_way = items.book && items.has_glove();
    let can_enter_dark_way = items.has_dark_mire_mirror_access();
    if !can_enter_light_way && !can_enter_dark_way {
        return Availability::Unavailable;
    }

    if !items.has_fire_source() {
        return Availability::Unavailable;
    }
    if !t.can_defeat_boss(Location::DesertPalace) {
        return Availability::Unavailable;
    }

    if keysanity || items.boots {
        Availability::Available
    } else {
        Availability::Possible
    }
}

const DESERT_PALACE_STEPS: &[Step] = &[
    Step::possible(6, always),
    Step::possible(5, |p| p.big_key() || p.items.boots),
    Step::possible(4, |p| p.keys() == 1 || (p.big_key() && p.items.boots)),
    Step::possible(4, |p| p.big_key() && p.items.has_fire_source()),
    Step::possible(3, |p| p.keys() == 1 && (p.big_key() || p.items.boots)),
    Step::possible(3, |p| {
        p.big_key() && p.items.boots && p.items.has_fire_source()
    }),
    Step::possible(2, |p| {
        p.big_key() && p.keys() == 1 && p.items.has_glove() && p.items.has_fire_source()
    }),
    // Boots alone pass regardless of the count; the tracker has always
    // grouped this disjunct outside the conjunction above.
    Step::possible(0, |p| p.items.boots),
];

pub(super) fn desert_palace_chests(t: &Tracker<'_>) -> Availability {
    let items = t.items;
    let dungeon = t.dungeon(Location::DesertPalace);

    if t.keysanity() {
        if !can_enter_desert_palace_front(t) {
            return Availability::Unavailable;
        }

        if dungeon.has_big_key
            && dungeon.small_key_count == 1
            && items.has_glove()
            && items.has_fire_source()
            && items.boots
        {
            return Availability::Available;
        }
        return first_step(&t.probe(Location::DesertPalace), DESERT_PALACE_STEPS);
    }

    if !items.book && !items.has_dark_mire_mirror_access() {
        return Availability::Unavailable;
    }
    if items.has_glove() && items.has_fire_source() && items.boots {
        return Availability::Available;
    }
    if dungeon.item_chest_count > 1 && items.boots {
        Availability::Available
    } else {
        Availability::Possible
    }
}

fn has_hera_route(t: &Tracker<'_>) -> bool {
    t.items.mirror || (t.items.hookshot && t.items.hammer)
}

pub(super) fn tower_of_hera_boss(t: &Tracker<'_>) -> Availability {
    if !t.can_defeat_boss(Location::TowerOfHera) {
        return Availability::Unavailable;
    }
    if !t.keysanity() {
        return tower_of_hera_chests(t);
    }

    let items = t.items;
    if !items.has_glove() && !items.flute {
        return Availability::Unavailable;
    }
    if !has_hera_route(t) {
        return Availability::Unavailable;
    }
    Availability::lit(items.has_death_mountain_logical_access())
}

/// Walking up the mountain in the dark counts as a sequence break.
fn hera_in_logic(p: &Probe<'_>) -> Availability {
    Availability::lit_possible(p.items.has_death_mountain_logical_access())
}

fn can_get_hera_basement(p: &Probe<'_>) -> bool {
    p.keys() == 1 && p.items.has_fire_source()
}

const TOWER_OF_HERA_STEPS: &[Step] = &[
    Step::with(5, always, hera_in_logic),
    Step::with(4, can_get_hera_basement, hera_in_logic),
    Step::with(3, |p| p.big_key(), hera_in_logic),
    Step::with(
        2,
        |p| p.big_key() && (p.items.has_melee() || can_get_hera_basement(p)),
        hera_in_logic,
    ),
];

pub(super) fn tower_of_hera_chests(t: &Tracker<'_>) -> Availability {
    let items = t.items;
    if !items.has_death_mountain_access() {
        return Availability::Unavailable;
    }
    if !has_hera_route(t) {
        return Availability::Unavailable;
    }

    if t.keysanity() {
        let probe = t.probe(Location::TowerOfHera);
        if probe.big_key() && items.has_melee() && can_get_hera_basement(&probe) {
            return Availability::lit(items.has_death_mountain_logical_access());
        }
        return first_step(&probe, TOWER_OF_HERA_STEPS);
    }

    if !items.has_fire_source() {
        return Availability::Possible;
    }
    Availability::lit(items.has_death_mountain_logical_access())
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

    #[test]
    fn swordless_agahnim_needs_net_and_a_way_through_the_curtain() {
        let settings = Settings::default().with_swordless(true);
        let dungeons = DungeonBook::vanilla();
        let mut items = Inventory {
            hammer: true,
            ..Inventory::default()
        };
        assert_eq!(
            check(&items, &settings, &dungeons, castle_tower_boss),
            Availability::Unavailable
        );
        items.net = true;
        assert_eq!(
            check(&items, &settings, &dungeons, castle_tower_boss),
            Availability::Glitches
        );
    }

    #[test]
    fn keysanity_agahnim_needs_every_key() {
        let settings = Settings::default().with_keysanity(true);
        let mut dungeons = DungeonBook::vanilla();
        let items = Inventory {
            cape: true,
            lantern: true,
            ..Inventory::default()
        };
        dungeons
            .get_mut(Location::CastleTower)
            .collect_small_key();
        assert_eq!(
            check(&items, &settings, &dungeons, castle_tower_boss),
            Availability::Unavailable
        );
        assert_eq!(
            check(&items, &settings, &dungeons, castle_tower_chests),
            Availability::Available
        );
        dungeons
            .get_mut(Location::CastleTower)
            .collect_small_key();
        assert_eq!(
            check(&items, &settings, &dungeons, castle_tower_boss),
            Availability::Available
        );
    }

    #[test]
    fn castle_tower_chests_without_keys_are_possible() {
        let settings = Settings::default().with_keysanity(true);
        let dungeons = DungeonBook::vanilla();
        let items = Inventory {
            cape: true,
            ..Inventory::default()
        };
        assert_eq!(
            check(&items, &settings, &dungeons, castle_tower_chests),
            Availability::Possible
        );
    }

    #[test]
    fn eastern_keysanity_counts_unseen_items() {
        let settings = Settings::default().with_keysanity(true);
        let mut dungeons = DungeonBook::vanilla();
        let items = Inventory::default();
        assert_eq!(
            check(&items, &settings, &dungeons, eastern_palace_chests),
            Availability::Possible
        );
        for _ in 0..3 {
            dungeons
                .get_mut(Location::EasternPalace)
                .open_chest(true);
        }
        assert_eq!(
            check(&items, &settings, &dungeons, eastern_palace_chests),
            Availability::Glitches
        );
        dungeons.get_mut(Location::EasternPalace).open_chest(false);
        assert_eq!(
            check(&items, &settings, &dungeons, eastern_palace_chests),
            Availability::Unavailable
        );
    }

    #[test]
    fn desert_boots_pass_regardless_of_count() {
        let settings = Settings::default().with_keysanity(true);
        let mut dungeons = DungeonBook::vanilla();
        dungeons.get_mut(Location::DesertPalace).total_chest_count = 1;
        let items = Inventory {
            book: true,
            boots: true,
            ..Inventory::default()
        };
        assert_eq!(
            check(&items, &settings, &dungeons, desert_palace_chests),
            Availability::Possible
        );
        let items = Inventory {
            boots: false,
            ..items
        };
        assert_eq!(
            check(&items, &settings, &dungeons, desert_palace_chests),
            Availability::Unavailable
        );
    }

    #[test]
    fn desert_boss_without_boots_is_possible() {
        let settings = Settings::default();
        let dungeons = DungeonBook::vanilla();
        let items = Inventory {
            book: true,
            glove: Glove::Power,
            lantern: true,
            ..Inventory::default()
        };
        assert_eq!(
            check(&items, &settings, &dungeons, desert_palace_boss),
            Availability::Possible
        );
    }

    #[test]
    fn hera_without_fire_is_possible() {
        let settings = Settings::default();
        let dungeons = DungeonBook::vanilla();
        let items = Inventory {
            glove: Glove::Power,
            mirror: true,
            ..Inventory::default()
        };
        assert_eq!(
            check(&items, &settings, &dungeons, tower_of_hera_chests),
            Availability::Possible
        );
        let items = Inventory {
            lantern: true,
            ..items
        };
        assert_eq!(
            check(&items, &settings, &dungeons, tower_of_hera_boss),
            Availability::Available
        );
    }

    #[test]
    fn hera_dark_climb_is_glitched() {
        let settings = Settings::default().with_keysanity(true);
        let dungeons = DungeonBook::vanilla();
        let items = Inventory {
            glove: Glove::Power,
            mirror: true,
            ..Inventory::default()
        };
        assert_eq!(
            check(&items, &settings, &dungeons, tower_of_hera_chests),
            Availability::Glitches
        );
        assert_eq!(
            check(&items, &settings, &dungeons, tower_of_hera_boss),
            Availability::Glitches
        );
    }
}
