use colored::Colorize;
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::common::scenario::TestScenario;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub passed: bool,
    pub checks_run: usize,
    pub checks_passed: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub duration: Duration,
}

pub struct LogicTester {
    verbose: bool,
}

impl LogicTester {
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn run_scenario(&self, scenario: &TestScenario) -> ScenarioResult {
        if self.verbose {
            println!(
                "🧪 Testing scenario: {} ({} checks)",
                scenario.name.bright_white(),
                scenario.expectations.len()
            );
        }

        let start_time = Instant::now();
        let mut failures = Vec::new();
        for (index, expectation) in scenario.expectations.iter().enumerate() {
            match expectation(&scenario.snapshot) {
                Ok(()) => {
                    if self.verbose {
                        println!("  ✅ Check {}/{} passed", index + 1, scenario.expectations.len());
                    }
                }
                Err(err) => {
                    if self.verbose {
                        println!(
                            "  ❌ Check {}/{} failed: {}",
                            index + 1,
                            scenario.expectations.len(),
                            err.to_string().red()
                        );
                    }
                    failures.push(format!("Check {}: {err:#}", index + 1));
                }
            }
        }
        let duration = start_time.elapsed();
        debug!("scenario {} finished in {duration:?}", scenario.name);

        let checks_run = scenario.expectations.len();
        ScenarioResult {
            scenario_name: scenario.name.clone(),
            passed: failures.is_empty(),
            checks_run,
            checks_passed: checks_run - failures.len(),
            failures,
            duration,
        }
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        u64::try_from(duration.as_micros())
            .unwrap_or(u64::MAX)
            .serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let micros = u64::deserialize(deserializer)?;
        Ok(Duration::from_micros(micros))
    }
}
