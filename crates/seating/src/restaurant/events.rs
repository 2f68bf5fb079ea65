//! Restaurant domain events.

use common::{PartyId, TableId};
use serde::{Deserialize, Serialize};

use crate::aggregate::DomainEvent;

use super::Party;

/// Events that can occur on a restaurant aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum SeatingEvent {
    /// A table was added to the floor.
    TableAdded(TableAddedData),

    /// An empty table was removed from the floor.
    TableRemoved(TableRemovedData),

    /// A party booked and joined the waiting queue.
    PartyBooked(PartyBookedData),

    /// A waiting party left the queue without being seated.
    PartyRemoved(PartyRemovedData),

    /// A waiting party was seated at a table.
    PartySeated(PartySeatedData),

    /// A seated party left and its table became empty.
    TableEmptied(TableEmptiedData),
}

impl DomainEvent for SeatingEvent {
    fn event_type(&self) -> &'static str {
        match self {
            SeatingEvent::TableAdded(_) => "TableAdded",
            SeatingEvent::TableRemoved(_) => "TableRemoved",
            SeatingEvent::PartyBooked(_) => "PartyBooked",
            SeatingEvent::PartyRemoved(_) => "PartyRemoved",
            SeatingEvent::PartySeated(_) => "PartySeated",
            SeatingEvent::TableEmptied(_) => "TableEmptied",
        }
    }
}

/// Data for TableAdded event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableAddedData {
    pub table_id: TableId,

    /// Seats at the table.
    pub capacity: u32,
}

/// Data for TableRemoved event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRemovedData {
    pub table_id: TableId,
}

/// Data for PartyBooked event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyBookedData {
    pub party_id: PartyId,

    /// Number of guests.
    pub size: u32,

    pub vip: bool,
}

/// Data for PartyRemoved event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyRemovedData {
    pub party_id: PartyId,
}

/// Data for PartySeated event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartySeatedData {
    pub party_id: PartyId,
    pub table_id: TableId,
}

/// Data for TableEmptied event.
///
/// Carries the departing party in full so the event alone describes who left.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableEmptiedData {
    pub table_id: TableId,
    pub party_id: PartyId,
    pub size: u32,
    pub vip: bool,
}

// Convenience constructors for events
impl SeatingEvent {
    /// Creates a TableAdded event.
    pub fn table_added(table_id: TableId, capacity: u32) -> Self {
        SeatingEvent::TableAdded(TableAddedData { table_id, capacity })
    }

    /// Creates a TableRemoved event.
    pub fn table_removed(table_id: TableId) -> Self {
        SeatingEvent::TableRemoved(TableRemovedData { table_id })
    }

    /// Creates a PartyBooked event.
    pub fn party_booked(party_id: PartyId, size: u32, vip: bool) -> Self {
        SeatingEvent::PartyBooked(PartyBookedData {
            party_id,
            size,
            vip,
        })
    }

    /// Creates a PartyRemoved event.
    pub fn party_removed(party_id: PartyId) -> Self {
        SeatingEvent::PartyRemoved(PartyRemovedData { party_id })
    }

    /// Creates a PartySeated event.
    pub fn party_seated(party_id: PartyId, table_id: TableId) -> Self {
        SeatingEvent::PartySeated(PartySeatedData { party_id, table_id })
    }

    /// Creates a TableEmptied event for the party leaving `table_id`.
    pub fn table_emptied(table_id: TableId, party: &Party) -> Self {
        SeatingEvent::TableEmptied(TableEmptiedData {
            table_id,
            party_id: party.id(),
            size: party.size(),
            vip: party.is_vip(),
        })
    }
}
