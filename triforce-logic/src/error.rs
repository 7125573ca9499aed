use thiserror::Error;

use crate::location::Location;

/// Errors raised while building or validating tracker inputs.
///
/// Availability queries never fail: once a [`crate::DungeonBook`] exists it
/// covers every location.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("no dungeon location named `{location}`")]
    NotFound { location: String },
    #[error("dungeon table lists {location:?} more than once")]
    DuplicateDungeon { location: Location },
    #[error("{location:?}: {field} is {value}, above its maximum of {max}")]
    InvalidCounter {
        location: Location,
        field: &'static str,
        value: u8,
        max: u8,
    },
    #[error("malformed tracker data: {0}")]
    Parse(#[from] serde_json::Error),
}

impl TrackerError {
    pub(crate) fn not_found(location: impl Into<String>) -> Self {
        Self::NotFound {
            location: location.into(),
        }
    }
}
