use legline::ledger::Trip;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct TripDto {
    pub origin: String,
    pub destination: String,
    pub level: u8,
    pub continued: bool,
}

impl TripDto {
    pub fn from(trip: &Trip) -> Self {
        Self {
            origin: trip.origin.to_string(),
            destination: trip.destination.to_string(),
            level: trip.level.as_u8(),
            continued: trip.continued,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewTripDto {
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub destination: String,
}
