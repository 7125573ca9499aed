use anyhow::{Result, ensure};
use triforce_logic::{
    Availability, EntranceLock, Glove, Goal, Inventory, Location, Settings, Sword, TrackerSnapshot,
};

use crate::common::scenario::TestScenario;

fn expect_boss(snapshot: &TrackerSnapshot, location: Location, expected: Availability) -> Result<()> {
    let actual = snapshot.report(location).boss_availability;
    ensure!(
        actual == expected,
        "{location} boss should be {expected}, was {actual}"
    );
    Ok(())
}

fn expect_chests(
    snapshot: &TrackerSnapshot,
    location: Location,
    expected: Availability,
) -> Result<()> {
    let actual = snapshot.report(location).chest_availability;
    ensure!(
        actual == expected,
        "{location} chests should be {expected}, was {actual}"
    );
    Ok(())
}

fn with_items(snapshot: &TrackerSnapshot, items: Inventory) -> TrackerSnapshot {
    TrackerSnapshot {
        inventory: items,
        ..snapshot.clone()
    }
}

pub fn smoke_scenario() -> TestScenario {
    TestScenario::new("Seed Start", TrackerSnapshot::default())
        .with_expectation(no_boss_reachable)
        .with_expectation(only_eastern_chests_open)
        .with_expectation(goal_not_met)
}

fn no_boss_reachable(snapshot: &TrackerSnapshot) -> Result<()> {
    for report in snapshot.report_all() {
        ensure!(
            report.boss_availability == Availability::Unavailable,
            "{} boss should start out of reach, was {}",
            report.location,
            report.boss_availability
        );
    }
    Ok(())
}

fn only_eastern_chests_open(snapshot: &TrackerSnapshot) -> Result<()> {
    for report in snapshot.report_all() {
        let expected = if report.location == Location::EasternPalace {
            Availability::Available
        } else {
            Availability::Unavailable
        };
        ensure!(
            report.chest_availability == expected,
            "{} chests should be {expected}, was {}",
            report.location,
            report.chest_availability
        );
    }
    Ok(())
}

fn goal_not_met(snapshot: &TrackerSnapshot) -> Result<()> {
    ensure!(!snapshot.is_goal_met(), "goal should not be met at seed start");
    Ok(())
}

pub fn eastern_palace_scenario() -> TestScenario {
    TestScenario::new("Eastern Palace", TrackerSnapshot::default())
        .with_expectation(armos_needs_bow)
        .with_expectation(armos_in_the_dark)
        .with_expectation(armos_with_light)
}

fn armos_needs_bow(snapshot: &TrackerSnapshot) -> Result<()> {
    expect_boss(snapshot, Location::EasternPalace, Availability::Unavailable)
}

fn armos_in_the_dark(snapshot: &TrackerSnapshot) -> Result<()> {
    let snapshot = with_items(
        snapshot,
        Inventory {
            bow: true,
            ..snapshot.inventory.clone()
        },
    );
    expect_boss(&snapshot, Location::EasternPalace, Availability::Glitches)
}

fn armos_with_light(snapshot: &TrackerSnapshot) -> Result<()> {
    let snapshot = with_items(
        snapshot,
        Inventory {
            bow: true,
            lantern: true,
            ..snapshot.inventory.clone()
        },
    );
    expect_boss(&snapshot, Location::EasternPalace, Availability::Available)
}

pub fn desert_palace_scenario() -> TestScenario {
    let snapshot = TrackerSnapshot {
        inventory: Inventory {
            book: true,
            ..Inventory::default()
        },
        ..TrackerSnapshot::default()
    };
    TestScenario::new("Desert Palace", snapshot)
        .with_expectation(desert_last_item_with_book)
        .with_expectation(desert_full_kit)
}

fn desert_last_item_with_book(snapshot: &TrackerSnapshot) -> Result<()> {
    let mut snapshot = snapshot.clone();
    snapshot
        .dungeons
        .get_mut(Location::DesertPalace)
        .item_chest_count = 1;
    expect_chests(&snapshot, Location::DesertPalace, Availability::Possible)
}

fn desert_full_kit(snapshot: &TrackerSnapshot) -> Result<()> {
    let snapshot = with_items(
        snapshot,
        Inventory {
            glove: Glove::Titan,
            fire_rod: true,
            boots: true,
            ..snapshot.inventory.clone()
        },
    );
    expect_chests(&snapshot, Location::DesertPalace, Availability::Available)
}

fn mire_kit() -> Inventory {
    Inventory {
        flute: true,
        moon_pearl: true,
        glove: Glove::Titan,
        boots: true,
        somaria: true,
        sword: Sword::Master,
        lantern: true,
        bombos: true,
        ..Inventory::default()
    }
}

pub fn mire_medallion_scenario() -> TestScenario {
    let snapshot = TrackerSnapshot {
        inventory: mire_kit(),
        ..TrackerSnapshot::default()
    };
    TestScenario::new("Misery Mire Medallion", snapshot)
        .with_expectation(unknown_medallion_is_possible)
        .with_expectation(revealed_medallion_opens_mire)
}

fn unknown_medallion_is_possible(snapshot: &TrackerSnapshot) -> Result<()> {
    let medallion = snapshot.with_tracker(|tracker| tracker.medallion_state(Location::MiseryMire));
    ensure!(
        medallion == Availability::Possible,
        "unknown medallion with bombos only should be possible, was {medallion}"
    );
    expect_boss(snapshot, Location::MiseryMire, Availability::Possible)?;
    expect_chests(snapshot, Location::MiseryMire, Availability::Possible)
}

fn revealed_medallion_opens_mire(snapshot: &TrackerSnapshot) -> Result<()> {
    let mut snapshot = snapshot.clone();
    snapshot
        .dungeons
        .get_mut(Location::MiseryMire)
        .reveal_entrance_lock(EntranceLock::Bombos);
    expect_boss(&snapshot, Location::MiseryMire, Availability::Available)?;
    expect_chests(&snapshot, Location::MiseryMire, Availability::Available)
}

pub fn keysanity_darkness_scenario() -> TestScenario {
    let mut snapshot = TrackerSnapshot {
        inventory: Inventory {
            moon_pearl: true,
            bow: true,
            hammer: true,
            glove: Glove::Power,
            ..Inventory::default()
        },
        settings: Settings::default().with_keysanity(true),
        ..TrackerSnapshot::default()
    };
    {
        let palace = snapshot.dungeons.get_mut(Location::PalaceOfDarkness);
        palace.collect_small_key();
        palace.collect_small_key();
        palace.total_chest_count = 6;
    }
    TestScenario::new("Keysanity Palace of Darkness", snapshot)
        .with_expectation(dark_slots_without_lantern)
        .with_expectation(dark_slots_with_lantern)
}

fn dark_slots_without_lantern(snapshot: &TrackerSnapshot) -> Result<()> {
    expect_chests(snapshot, Location::PalaceOfDarkness, Availability::Glitches)
}

fn dark_slots_with_lantern(snapshot: &TrackerSnapshot) -> Result<()> {
    let snapshot = with_items(
        snapshot,
        Inventory {
            lantern: true,
            ..snapshot.inventory.clone()
        },
    );
    expect_chests(&snapshot, Location::PalaceOfDarkness, Availability::Possible)
}

pub fn swordless_agahnim_scenario() -> TestScenario {
    let snapshot = TrackerSnapshot {
        inventory: Inventory {
            hammer: true,
            ..Inventory::default()
        },
        settings: Settings::default().with_swordless(true),
        ..TrackerSnapshot::default()
    };
    TestScenario::new("Swordless Agahnim", snapshot)
        .with_expectation(agahnim_needs_net)
        .with_expectation(agahnim_with_net)
}

fn agahnim_needs_net(snapshot: &TrackerSnapshot) -> Result<()> {
    expect_boss(snapshot, Location::CastleTower, Availability::Unavailable)
}

fn agahnim_with_net(snapshot: &TrackerSnapshot) -> Result<()> {
    let snapshot = with_items(
        snapshot,
        Inventory {
            net: true,
            ..snapshot.inventory.clone()
        },
    );
    expect_boss(&snapshot, Location::CastleTower, Availability::Glitches)
}

pub fn ganons_tower_goal_scenario() -> TestScenario {
    let mut snapshot = TrackerSnapshot {
        inventory: Inventory {
            sword: Sword::Tempered,
            glove: Glove::Titan,
            moon_pearl: true,
            hookshot: true,
            hammer: true,
            bow: true,
            lantern: true,
            ..Inventory::default()
        },
        ..TrackerSnapshot::default()
    };
    for location in Location::CRYSTAL_DUNGEONS {
        snapshot
            .dungeons
            .get_mut(location)
            .mark_boss_defeated(true);
    }
    TestScenario::new("Ganon's Tower Goal", snapshot)
        .with_expectation(tower_open_after_crystals)
        .with_expectation(pedestal_goal_needs_pendants)
}

fn tower_open_after_crystals(snapshot: &TrackerSnapshot) -> Result<()> {
    ensure!(snapshot.is_goal_met(), "crystal goal should be met");
    expect_boss(snapshot, Location::GanonsTower, Availability::Available)
}

fn pedestal_goal_needs_pendants(snapshot: &TrackerSnapshot) -> Result<()> {
    let snapshot = TrackerSnapshot {
        settings: snapshot.settings.with_goal(Goal::Pedestal),
        ..snapshot.clone()
    };
    ensure!(
        !snapshot.is_goal_met(),
        "pedestal goal should wait for the pendants"
    );
    expect_boss(&snapshot, Location::GanonsTower, Availability::Unavailable)
}

pub fn keysanity_pigeonhole_scenario() -> TestScenario {
    let mut snapshot = TrackerSnapshot {
        inventory: Inventory {
            moon_pearl: true,
            glove: Glove::Titan,
            hammer: true,
            hookshot: true,
            flippers: true,
            mirror: true,
            lantern: true,
            ..mire_kit()
        },
        settings: Settings::default().with_keysanity(true),
        ..TrackerSnapshot::default()
    };
    for location in Location::ALL {
        snapshot.dungeons.get_mut(location).collect_small_key();
    }
    TestScenario::new("Keysanity Pigeonhole", snapshot)
        .with_expectation(extra_unseen_items_keep_chests_open)
}

fn extra_unseen_items_keep_chests_open(snapshot: &TrackerSnapshot) -> Result<()> {
    for location in Location::ALL {
        let mut probe = snapshot.clone();
        let max_total = probe.dungeons[location].max_total_chests;
        let mut previous: Option<Availability> = None;
        for unseen in 0..=max_total {
            probe.dungeons.get_mut(location).total_chest_count = unseen;
            let current = probe.report(location).chest_availability;
            if let Some(prev) = previous {
                ensure!(
                    !prev.is_obtainable() || current.is_obtainable(),
                    "{location} chests went from {prev} to {current} at {unseen} unseen"
                );
            }
            previous = Some(current);
        }
    }
    Ok(())
}
