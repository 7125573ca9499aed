use serde::{Deserialize, Serialize};

/// What must be done before Ganon's Tower counts as open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    #[default]
    Crystals,
    Pedestal,
    AllDungeons,
}

/// Ruleset flags, fixed for the duration of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub swordless: bool,
    pub keysanity: bool,
    pub goal: Goal,
}

impl Settings {
    #[must_use]
    pub const fn is_swordless(&self) -> bool {
        self.swordless
    }

    #[must_use]
    pub const fn is_keysanity(&self) -> bool {
        self.keysanity
    }

    #[must_use]
    pub const fn goal(&self) -> Goal {
        self.goal
    }

    #[must_use]
    pub const fn with_keysanity(mut self, keysanity: bool) -> Self {
        self.keysanity = keysanity;
        self
    }

    #[must_use]
    pub const fn with_swordless(mut self, swordless: bool) -> Self {
        self.swordless = swordless;
        self
    }

    #[must_use]
    pub const fn with_goal(mut self, goal: Goal) -> Self {
        self.goal = goal;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_standard_crystals() {
        let settings = Settings::default();
        assert!(!settings.is_swordless());
        assert!(!settings.is_keysanity());
        assert_eq!(settings.goal(), Goal::Crystals);
    }

    #[test]
    fn parses_goal_names() {
        let settings: Settings =
            serde_json::from_str(r#"{"keysanity":true,"goal":"all_dungeons"}"#).unwrap();
        assert!(settings.is_keysanity());
        assert_eq!(settings.goal(), Goal::AllDungeons);
    }
}
