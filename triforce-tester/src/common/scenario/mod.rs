use anyhow::Result;
use triforce_logic::TrackerSnapshot;

pub mod catalog;

/// Check run against the snapshot a scenario builds.
pub type ScenarioExpectation = fn(&TrackerSnapshot) -> Result<()>;

// Logic test scenario
#[derive(Debug, Clone)]
pub struct TestScenario {
    pub name: String,
    pub snapshot: TrackerSnapshot,
    pub expectations: Vec<ScenarioExpectation>,
}

impl TestScenario {
    #[must_use]
    pub fn new(name: impl Into<String>, snapshot: TrackerSnapshot) -> Self {
        Self {
            name: name.into(),
            snapshot,
            expectations: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_expectation(mut self, expectation: ScenarioExpectation) -> Self {
        self.expectations.push(expectation);
        self
    }
}

pub fn get_scenario(name: &str) -> Option<TestScenario> {
    match name.to_lowercase().as_str() {
        "smoke" => Some(catalog::smoke_scenario()),
        "eastern-palace" | "eastern" => Some(catalog::eastern_palace_scenario()),
        "desert-palace" | "desert" => Some(catalog::desert_palace_scenario()),
        "mire-medallion" | "medallion" => Some(catalog::mire_medallion_scenario()),
        "keysanity-darkness" | "keysanity" => Some(catalog::keysanity_darkness_scenario()),
        "swordless-agahnim" | "swordless" => Some(catalog::swordless_agahnim_scenario()),
        "ganons-tower-goal" | "goal" => Some(catalog::ganons_tower_goal_scenario()),
        "keysanity-pigeonhole" | "pigeonhole" => Some(catalog::keysanity_pigeonhole_scenario()),
        _ => None,
    }
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    vec![
        ("smoke", "Seed start: nothing reachable"),
        ("eastern-palace", "Armos Knights with and without light"),
        ("desert-palace", "Desert Palace chest bands"),
        ("mire-medallion", "Unknown Misery Mire medallion"),
        ("keysanity-darkness", "Palace of Darkness key counting"),
        ("swordless-agahnim", "Agahnim without a sword"),
        ("ganons-tower-goal", "Ganon's Tower behind the victory goal"),
        ("keysanity-pigeonhole", "An extra unseen item never closes a dungeon"),
    ]
}
