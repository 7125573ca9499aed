//! Graded availability outcomes.
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Result of an availability query.
///
/// The variants form a partial order: `Unavailable` is below everything and
/// `Available` is above everything, while `Possible` and `Glitches` are
/// incomparable. `PartialOrd` encodes that order and there is
/// no `Ord` implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    /// Cannot be obtained with the current state.
    Unavailable,
    /// Might be obtainable now, but it cannot be proven.
    Possible,
    /// Obtainable now only through a sequence break.
    Glitches,
    /// Obtainable now within logic.
    Available,
}

impl Availability {
    /// Every outcome, worst first.
    pub const ALL: [Self; 4] = [
        Self::Unavailable,
        Self::Possible,
        Self::Glitches,
        Self::Available,
    ];

    /// Lantern trade-off for dark rooms: `Available` with a light source,
    /// `Glitches` without one.
    #[must_use]
    pub const fn lit(has_light: bool) -> Self {
        if has_light {
            Self::Available
        } else {
            Self::Glitches
        }
    }

    /// Same trade-off for a result that is only `Possible` when lit.
    #[must_use]
    pub const fn lit_possible(has_light: bool) -> Self {
        if has_light {
            Self::Possible
        } else {
            Self::Glitches
        }
    }

    /// Whether anything at all can be attempted.
    #[must_use]
    pub const fn is_obtainable(self) -> bool {
        !matches!(self, Self::Unavailable)
    }

    #[must_use]
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }

    /// Stable lowercase label, matching the serialized form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unavailable => "unavailable",
            Self::Possible => "possible",
            Self::Glitches => "glitches",
            Self::Available => "available",
        }
    }

    const fn rank(self) -> u8 {
        match self {
            Self::Unavailable => 0,
            Self::Possible | Self::Glitches => 1,
            Self::Available => 2,
        }
    }
}

impl PartialOrd for Availability {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        match self.rank().cmp(&other.rank()) {
            Ordering::Equal => None,
            ordering => Some(ordering),
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn possible_and_glitches_are_incomparable() {
        assert_eq!(
            Availability::Possible.partial_cmp(&Availability::Glitches),
            None
        );
        assert!(!(Availability::Possible < Availability::Glitches));
        assert!(!(Availability::Glitches < Availability::Possible));
    }

    #[test]
    fn extremes_bound_every_outcome() {
        for outcome in Availability::ALL {
            assert!(Availability::Unavailable <= outcome);
            assert!(outcome <= Availability::Available);
        }
        assert!(Availability::Unavailable < Availability::Glitches);
        assert!(Availability::Possible < Availability::Available);
    }

    #[test]
    fn lantern_trade_off() {
        assert_eq!(Availability::lit(true), Availability::Available);
        assert_eq!(Availability::lit(false), Availability::Glitches);
        assert_eq!(Availability::lit_possible(true), Availability::Possible);
        assert_eq!(Availability::lit_possible(false), Availability::Glitches);
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&Availability::Glitches).unwrap();
        assert_eq!(json, "\"glitches\"");
        assert_eq!(Availability::Possible.to_string(), "possible");
    }
}
