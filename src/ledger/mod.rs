mod sample;
mod trip;

pub use trip::*;

use std::fmt::{Debug, Display};
use thiserror::Error;
use tracing::{debug, info};

use crate::shared::Code;

/// Which side of a trip failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Origin,
    Destination,
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Origin => f.write_str("start point"),
            Field::Destination => f.write_str("end point"),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Please enter both start and end points, the {field} is empty")]
    InvalidInput { field: Field },
    #[error("Trip index {index} is out of range for a ledger of {len} trips")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Emitted to subscribers after a successful mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Appended { index: usize },
    Removed { index: usize },
    Recomputed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Listener = Box<dyn FnMut(&Change, &[Trip]) + Send>;

/// Ordered list of trips. Position is the only identity a trip has.
#[derive(Default)]
pub struct Ledger {
    trips: Vec<Trip>,
    listeners: Vec<(Subscription, Listener)>,
    next_subscription: u64,
}

impl Debug for Ledger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ledger")
            .field("trips", &self.trips)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Default::default()
    }

    /// A ledger seeded with the eight sample trips.
    pub fn with_sample() -> Self {
        Self::from_trips(sample::sample_trips())
    }

    /// Adopts the given sequence without re-deriving any flags.
    pub fn from_trips(trips: Vec<Trip>) -> Self {
        Self {
            trips,
            ..Default::default()
        }
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn get(&self, index: usize) -> Option<&Trip> {
        self.trips.get(index)
    }

    pub fn last(&self) -> Option<&Trip> {
        self.trips.last()
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trip> {
        self.trips.iter()
    }

    /// Normalizes both codes and appends a trip derived from the current tail.
    ///
    /// Duplicate detection only runs when the trip is not a continuation.
    /// A continued trip always lands on the primary level here, even though
    /// [`Ledger::recompute`] checks every trip for duplicates.
    pub fn append(&mut self, origin: &str, destination: &str) -> Result<Trip, self::Error> {
        let origin = Code::parse(origin).ok_or(Error::InvalidInput {
            field: Field::Origin,
        })?;
        let destination = Code::parse(destination).ok_or(Error::InvalidInput {
            field: Field::Destination,
        })?;

        let continued = self
            .trips
            .last()
            .is_some_and(|last| last.destination == origin);

        let mut trip = Trip::new(origin, destination, Level::Primary, continued);
        if !continued && self.trips.iter().any(|other| other.is_same_route(&trip)) {
            trip.level = Level::Duplicate;
        }
        debug!(
            "Derived {} - {} as level {} (continued: {})",
            trip.origin,
            trip.destination,
            trip.level.as_u8(),
            trip.continued
        );

        let index = self.trips.len();
        self.trips.push(trip.clone());
        info!("Appended trip {} - {} at {index}", trip.origin, trip.destination);
        self.notify(Change::Appended { index });
        Ok(trip)
    }

    /// Removes the trip at `index` and re-derives every remaining trip.
    pub fn remove(&mut self, index: usize) -> Result<Trip, self::Error> {
        if index >= self.trips.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.trips.len(),
            });
        }
        let removed = self.trips.remove(index);
        info!(
            "Removed trip {} - {} at {index}",
            removed.origin, removed.destination
        );
        self.derive();
        self.notify(Change::Removed { index });
        Ok(removed)
    }

    /// Re-derives `continued` and `level` for the whole sequence and notifies
    /// subscribers. An empty ledger is left alone.
    pub fn recompute(&mut self) {
        if self.trips.is_empty() {
            return;
        }
        self.derive();
        self.notify(Change::Recomputed);
    }

    fn derive(&mut self) {
        for i in 0..self.trips.len() {
            let continued = i > 0 && self.trips[i - 1].connects_to(&self.trips[i]);
            let duplicate = (0..i).any(|j| self.trips[j].is_same_route(&self.trips[i]));

            let current = &mut self.trips[i];
            current.continued = continued;
            current.level = if duplicate {
                Level::Duplicate
            } else {
                Level::Primary
            };
        }
        debug!("Recomputed {} trips", self.trips.len());
    }

    /// Registers a listener that is called after every successful mutation.
    pub fn subscribe<F>(&mut self, listener: F) -> Subscription
    where
        F: FnMut(&Change, &[Trip]) + Send + 'static,
    {
        let subscription = Subscription(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((subscription, Box::new(listener)));
        subscription
    }

    /// Returns false if the subscription was not registered.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(id, _)| *id != subscription);
        self.listeners.len() != before
    }

    fn notify(&mut self, change: Change) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&change, &self.trips);
        }
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Trip;
    type IntoIter = std::slice::Iter<'a, Trip>;

    fn into_iter(self) -> Self::IntoIter {
        self.trips.iter()
    }
}
