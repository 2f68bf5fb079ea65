//! Core aggregate and domain event traits.

use std::fmt;

use common::Version;
use serde::{Serialize, de::DeserializeOwned};

/// Trait for domain events.
///
/// Domain events represent facts that have happened in the domain.
/// They are immutable and should be named in past tense.
pub trait DomainEvent: Serialize + DeserializeOwned + Clone + fmt::Debug {
    /// Returns the event type name.
    fn event_type(&self) -> &'static str;
}

/// Trait for aggregates whose state changes only through applied events.
///
/// Commands inspect an aggregate and decide which events to emit; the
/// aggregate then applies those events. Keeping the two phases apart means
/// a rejected command never leaves a half-applied change behind.
pub trait Aggregate: Default + Sized {
    /// The type of events this aggregate produces and consumes.
    type Event: DomainEvent;

    /// The type of errors commands against this aggregate can produce.
    type Error: std::error::Error;

    /// Returns the aggregate type name.
    fn aggregate_type() -> &'static str;

    /// Returns the number of events applied so far.
    fn version(&self) -> Version;

    /// Sets the aggregate version.
    fn set_version(&mut self, version: Version);

    /// Applies an event to the aggregate, updating its state.
    ///
    /// This method must be deterministic and must not fail: events record
    /// decisions that were already validated.
    fn apply(&mut self, event: Self::Event);

    /// Applies multiple events in sequence without touching the version.
    fn apply_events(&mut self, events: impl IntoIterator<Item = Self::Event>) {
        for event in events {
            self.apply(event);
        }
    }

    /// Applies events and advances the version once per event.
    ///
    /// Returns the new version.
    fn commit(&mut self, events: impl IntoIterator<Item = Self::Event>) -> Version {
        let mut version = self.version();
        for event in events {
            self.apply(event);
            version = version.next();
        }
        self.set_version(version);
        version
    }

    /// Rebuilds an aggregate by replaying its full event history.
    fn from_events(events: impl IntoIterator<Item = Self::Event>) -> Self {
        let mut aggregate = Self::default();
        aggregate.commit(events);
        aggregate
    }
}
