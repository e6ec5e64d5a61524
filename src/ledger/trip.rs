use serde::Serialize;

use crate::shared::Code;

/// Display track of a trip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u8")]
pub enum Level {
    /// The primary track, used by the first occurrence of a route.
    #[default]
    Primary,
    /// Marks a repeat of an origin/destination pair seen earlier.
    Duplicate,
}

impl Level {
    pub const fn as_u8(&self) -> u8 {
        match self {
            Level::Primary => 1,
            Level::Duplicate => 2,
        }
    }
}

impl From<Level> for u8 {
    fn from(value: Level) -> Self {
        value.as_u8()
    }
}

impl TryFrom<u8> for Level {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Level::Primary),
            2 => Ok(Level::Duplicate),
            other => Err(other),
        }
    }
}

/// One origin to destination leg.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    pub origin: Code,
    pub destination: Code,
    pub level: Level,
    /// Set when the origin matches the previous trip's destination.
    pub continued: bool,
}

impl Trip {
    pub fn new(origin: Code, destination: Code, level: Level, continued: bool) -> Self {
        Self {
            origin,
            destination,
            level,
            continued,
        }
    }

    /// Whether both trips cover the same origin/destination pair.
    pub fn is_same_route(&self, other: &Trip) -> bool {
        self.origin == other.origin && self.destination == other.destination
    }

    /// Whether `next` departs from where this trip arrives.
    pub fn connects_to(&self, next: &Trip) -> bool {
        self.destination == next.origin
    }
}

#[test]
fn level_from_u8() {
    assert_eq!(Level::try_from(1), Ok(Level::Primary));
    assert_eq!(Level::try_from(2), Ok(Level::Duplicate));
    assert_eq!(Level::try_from(3), Err(3));
}

#[test]
fn level_as_u8() {
    assert_eq!(Level::Primary.as_u8(), 1);
    assert_eq!(u8::from(Level::Duplicate), 2);
}
