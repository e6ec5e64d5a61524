use super::{Level, Trip};
use crate::shared::Code;

// (origin, destination, continued, level)
const SAMPLE: [(&str, &str, bool, Level); 8] = [
    ("BLR", "MAA", false, Level::Primary),
    ("MAA", "HYD", true, Level::Primary),
    ("HYD", "DEL", true, Level::Primary),
    ("DEL", "BLR", false, Level::Primary),
    ("BLR", "MAA", false, Level::Duplicate),
    ("MAA", "HYD", true, Level::Duplicate),
    ("HYD", "GOA", true, Level::Primary),
    ("DEL", "DEL", false, Level::Duplicate),
];

/// The sequence a fresh ledger is seeded with. Flags are kept exactly as
/// listed, they are only re-derived once the ledger recomputes.
pub(crate) fn sample_trips() -> Vec<Trip> {
    SAMPLE
        .iter()
        .filter_map(|(origin, destination, continued, level)| {
            Some(Trip::new(
                Code::parse(origin)?,
                Code::parse(destination)?,
                *level,
                *continued,
            ))
        })
        .collect()
}

#[test]
fn every_sample_row_parses() {
    assert_eq!(sample_trips().len(), SAMPLE.len());
}
