//! Table entity.

use common::{PartyId, TableId};
use serde::{Deserialize, Serialize};

/// A seating resource of fixed capacity.
///
/// A table is either empty or hosts exactly one party. The occupant is held
/// as a [`PartyId`]; the party itself is owned by the restaurant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    id: TableId,
    capacity: u32,
    occupant: Option<PartyId>,
}

impl Table {
    pub(crate) fn new(id: TableId, capacity: u32) -> Self {
        Self {
            id,
            capacity,
            occupant: None,
        }
    }

    /// Returns the table's ID.
    pub fn id(&self) -> TableId {
        self.id
    }

    /// Number of guests the table seats.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Returns true if a party is seated here.
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// Returns the party seated here, if any.
    pub fn occupant(&self) -> Option<PartyId> {
        self.occupant
    }

    /// Returns true if the table is empty and large enough for `size` guests.
    pub fn can_seat(&self, size: u32) -> bool {
        !self.is_occupied() && self.capacity >= size
    }

    pub(crate) fn occupy(&mut self, party: PartyId) {
        self.occupant = Some(party);
    }

    pub(crate) fn free(&mut self) {
        self.occupant = None;
    }
}
