//! Misery Mire and Turtle Rock, both behind an entrance medallion.
//!
//! Once the base requirements hold, a medallion verdict other than
//! `Available` is returned as is, before the boss or any key is considered.
use super::Tracker;
use super::reach::{Probe, Step, always, first_step};
use crate::availability::Availability;
use crate::location::Location;

fn can_reach_misery_mire(t: &Tracker<'_>) -> bool {
    let items = t.items;
    items.flute
        && items.moon_pearl
        && items.has_titan_glove()
        && (items.boots || items.hookshot)
}

pub(super) fn misery_mire_boss(t: &Tracker<'_>) -> Availability {
    let items = t.items;
    if !can_reach_misery_mire(t) || !items.somaria {
        return Availability::Unavailable;
    }

    let medallion = t.medallion_state(Location::MiseryMire);
    if medallion != Availability::Available {
        return medallion;
    }

    if !t.can_defeat_boss(Location::MiseryMire) {
        return Availability::Unavailable;
    }

    if t.keysanity() {
        if !t.dungeon(Location::MiseryMire).has_big_key {
            return Availability::Unavailable;
        }
    } else if !items.has_fire_source() {
        return Availability::Possible;
    }

    Availability::lit(items.lantern)
}

const MISERY_MIRE_STEPS: &[Step] = &[
    Step::possible(5, always),
    Step::possible(3, |p| p.big_key() || p.items.has_fire_source()),
    Step::possible(2, |p| p.items.fire_rod && p.big_key()),
    Step::glitches(1, |p| {
        p.items.fire_rod && !p.items.lantern && p.items.somaria && p.big_key()
    }),
];

pub(super) fn misery_mire_chests(t: &Tracker<'_>) -> Availability {
    if !can_reach_misery_mire(t) {
        return Availability::Unavailable;
    }

    let medallion = t.medallion_state(Location::MiseryMire);
    if medallion != Availability::Available {
        return medallion;
    }

    let items = t.items;
    let dungeon = t.dungeon(Location::MiseryMire);
    if t.keysanity() {
        if items.lantern && items.somaria && dungeon.has_big_key {
            return Availability::Available;
        }
        return first_step(&t.probe(Location::MiseryMire), MISERY_MIRE_STEPS);
    }

    let has_items = if dungeon.item_chest_count > 1 {
        items.has_fire_source()
    } else {
        items.lantern && items.somaria
    };
    if has_items {
        Availability::Available
    } else {
        Availability::Possible
    }
}

fn can_reach_turtle_rock(t: &Tracker<'_>) -> bool {
    let items = t.items;
    items.moon_pearl
        && items.hammer
        && items.has_titan_glove()
        && items.somaria
        && (items.hookshot || items.mirror)
}

pub(super) fn turtle_rock_boss(t: &Tracker<'_>) -> Availability {
    let items = t.items;
    if !can_reach_turtle_rock(t) || !items.ice_rod || !items.fire_rod {
        return Availability::Unavailable;
    }

    let medallion = t.medallion_state(Location::TurtleRock);
    if medallion != Availability::Available {
        return medallion;
    }

    if !t.can_defeat_boss(Location::TurtleRock) {
        return Availability::Unavailable;
    }

    if t.keysanity() {
        let dungeon = t.dungeon(Location::TurtleRock);
        if !dungeon.has_big_key || dungeon.small_key_count < 3 {
            return Availability::Unavailable;
        }
        if dungeon.small_key_count == 3 {
            return Availability::lit_possible(items.lantern);
        }
    } else if !items.has_laser_bridge_safety() {
        return Availability::Possible;
    }

    Availability::lit(items.lantern)
}

fn laser(p: &Probe<'_>) -> bool {
    p.items.has_laser_bridge_safety()
}

const TURTLE_ROCK_STEPS: &[Step] = &[
    Step::possible(12, always),
    Step::possible(10, |p| p.items.fire_rod || p.keys() >= 2),
    Step::possible(9, |p| {
        (p.keys() >= 1 && p.items.fire_rod) || (p.keys() >= 2 && p.big_key())
    }),
    Step::possible(8, |p| p.keys() >= 2 && p.items.fire_rod),
    Step::possible(7, |p| p.big_key() && p.keys() >= 2 && p.items.fire_rod),
    Step::dark(5, |p| p.big_key() && p.keys() >= 2 && laser(p)),
    Step::dark(4, |p| p.big_key() && p.keys() >= 3 && laser(p)),
    Step::dark(3, |p| {
        p.big_key() && p.keys() >= 2 && p.items.fire_rod && laser(p)
    }),
    Step::dark(3, |p| {
        p.big_key() && p.keys() == 4 && p.items.fire_rod && p.items.ice_rod
    }),
    Step::dark(2, |p| {
        p.big_key() && p.keys() >= 3 && p.items.fire_rod && laser(p)
    }),
];

pub(super) fn turtle_rock_chests(t: &Tracker<'_>) -> Availability {
    if !can_reach_turtle_rock(t) {
        return Availability::Unavailable;
    }

    let medallion = t.medallion_state(Location::TurtleRock);
    if medallion != Availability::Available {
        return medallion;
    }

    let items = t.items;
    let dungeon = t.dungeon(Location::TurtleRock);
    let laser_safe = items.has_laser_bridge_safety();

    if t.keysanity() {
        if dungeon.has_big_key
            && dungeon.small_key_count == dungeon.max_small_keys
            && items.fire_rod
            && items.ice_rod
            && items.lantern
            && laser_safe
        {
            return Availability::Available;
        }
        return first_step(&t.probe(Location::TurtleRock), TURTLE_ROCK_STEPS);
    }

    let dark = Availability::lit(items.lantern);
    match dungeon.item_chest_count {
        0..=2 if !laser_safe => Availability::Unavailable,
        0..=1 if items.fire_rod && items.ice_rod => dark,
        2 if items.fire_rod => dark,
        0..=2 => Availability::Possible,
        3..=4 if laser_safe && items.fire_rod && items.lantern => Availability::Available,
        3..=4 => Availability::Possible,
        _ if items.fire_rod && items.lantern => Availability::Available,
        _ => Availability::Possible,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::{DungeonBook, EntranceLock};
    use crate::items::{Glove, Inventory, Shield, Sword};
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

    fn mire_kit() -> Inventory {
        Inventory {
            flute: true,
            moon_pearl: true,
            glove: Glove::Titan,
            boots: true,
            somaria: true,
            sword: Sword::Master,
            ..Inventory::default()
        }
    }

    fn turtle_kit() -> Inventory {
        Inventory {
            moon_pearl: true,
            hammer: true,
            glove: Glove::Titan,
            somaria: true,
            hookshot: true,
            sword: Sword::Master,
            fire_rod: true,
            ice_rod: true,
            ..Inventory::default()
        }
    }

    #[test]
    fn unknown_medallion_short_circuits_to_possible() {
        let dungeons = DungeonBook::vanilla();
        let items = Inventory {
            ether: true,
            lantern: true,
            ..mire_kit()
        };
        let settings = Settings::default();
        assert_eq!(
            check(&items, &settings, &dungeons, misery_mire_boss),
            Availability::Possible
        );
        assert_eq!(
            check(&items, &settings, &dungeons, misery_mire_chests),
            Availability::Possible
        );
    }

    #[test]
    fn known_medallion_opens_the_mire() {
        let mut dungeons = DungeonBook::vanilla();
        dungeons
            .get_mut(Location::MiseryMire)
            .reveal_entrance_lock(EntranceLock::Ether);
        let items = Inventory {
            ether: true,
            lantern: true,
            ..mire_kit()
        };
        assert_eq!(
            check(&items, &Settings::default(), &dungeons, misery_mire_boss),
            Availability::Available
        );
    }

    #[test]
    fn vitreous_without_fire_is_possible() {
        let mut dungeons = DungeonBook::vanilla();
        dungeons
            .get_mut(Location::MiseryMire)
            .reveal_entrance_lock(EntranceLock::Quake);
        let items = Inventory {
            quake: true,
            ..mire_kit()
        };
        assert_eq!(
            check(&items, &Settings::default(), &dungeons, misery_mire_boss),
            Availability::Possible
        );
    }

    #[test]
    fn mire_keysanity_dark_last_chest_is_glitched() {
        let settings = Settings::default().with_keysanity(true);
        let mut dungeons = DungeonBook::vanilla();
        {
            let mire = dungeons.get_mut(Location::MiseryMire);
            mire.reveal_entrance_lock(EntranceLock::Bombos);
            mire.collect_big_key();
            mire.total_chest_count = 1;
        }
        let items = Inventory {
            bombos: true,
            fire_rod: true,
            ..mire_kit()
        };
        assert_eq!(
            check(&items, &settings, &dungeons, misery_mire_chests),
            Availability::Glitches
        );
    }

    #[test]
    fn trinexx_without_laser_safety_is_possible() {
        let mut dungeons = DungeonBook::vanilla();
        dungeons
            .get_mut(Location::TurtleRock)
            .reveal_entrance_lock(EntranceLock::Quake);
        let items = Inventory {
            quake: true,
            lantern: true,
            ..turtle_kit()
        };
        assert_eq!(
            check(&items, &Settings::default(), &dungeons, turtle_rock_boss),
            Availability::Possible
        );
        let items = Inventory {
            shield: Shield::Mirror,
            ..items
        };
        assert_eq!(
            check(&items, &Settings::default(), &dungeons, turtle_rock_boss),
            Availability::Available
        );
    }

    #[test]
    fn trinexx_keysanity_with_three_keys() {
        let settings = Settings::default().with_keysanity(true);
        let mut dungeons = DungeonBook::vanilla();
        {
            let turtle = dungeons.get_mut(Location::TurtleRock);
            turtle.reveal_entrance_lock(EntranceLock::Quake);
            turtle.collect_big_key();
            for _ in 0..3 {
                turtle.collect_small_key();
            }
        }
        let items = Inventory {
            quake: true,
            ..turtle_kit()
        };
        assert_eq!(
            check(&items, &settings, &dungeons, turtle_rock_boss),
            Availability::Glitches
        );
        let items = Inventory {
            lantern: true,
            ..items
        };
        assert_eq!(
            check(&items, &settings, &dungeons, turtle_rock_boss),
            Availability::Possible
        );
    }

    #[test]
    fn turtle_rock_last_items_behind_laser_bridge() {
        let mut dungeons = DungeonBook::vanilla();
        {
            let turtle = dungeons.get_mut(Location::TurtleRock);
            turtle.reveal_entrance_lock(EntranceLock::Quake);
            turtle.item_chest_count = 2;
        }
        let items = Inventory {
            quake: true,
            ..turtle_kit()
        };
        assert_eq!(
            check(&items, &Settings::default(), &dungeons, turtle_rock_chests),
            Availability::Unavailable
        );
        let items = Inventory {
            cape: true,
            ..items
        };
        assert_eq!(
            check(&items, &Settings::default(), &dungeons, turtle_rock_chests),
            Availability::Glitches
        );
    }

    #[test]
    fn turtle_rock_keysanity_full_dungeon_is_possible() {
        let settings = Settings::default().with_keysanity(true);
        let mut dungeons = DungeonBook::vanilla();
        dungeons
            .get_mut(Location::TurtleRock)
            .reveal_entrance_lock(EntranceLock::Quake);
        let items = Inventory {
            quake: true,
            ..turtle_kit()
        };
        assert_eq!(
            check(&items, &settings, &dungeons, turtle_rock_chests),
            Availability::Possible
        );
    }
}
