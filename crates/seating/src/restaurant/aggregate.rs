//! Restaurant aggregate implementation.

use std::collections::{HashMap, HashSet};

use common::{PartyId, TableId, Version};
use serde::{Deserialize, Serialize};

use crate::aggregate::Aggregate;
use crate::command::Command;
use crate::error::{SeatingError, SnapshotError};

use super::{
    AddTable, Assignment, BookParty, EmptyTable, Party, RemoveParty, RemoveTable, SeatParty,
    SeatingEvent, Table,
    events::{PartyBookedData, PartySeatedData, TableEmptiedData},
    policy,
};

/// Restaurant aggregate root.
///
/// Owns every table and every party. Tables are kept in the order they were
/// added and waiting parties in the order they booked; seated parties live in
/// their own map until their table is emptied.
///
/// Deserializing checks the seating invariants and rejects a snapshot that
/// breaks any of them with a [`SnapshotError`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RestaurantSnapshot")]
pub struct Restaurant {
    /// Number of events applied.
    version: Version,

    tables: Vec<Table>,

    /// Parties waiting for a table, earliest booking first.
    waiting: Vec<Party>,

    seated: HashMap<PartyId, Party>,
}

impl Aggregate for Restaurant {
    type Event = SeatingEvent;
    type Error = SeatingError;

    fn aggregate_type() -> &'static str {
        "Restaurant"
    }

    fn version(&self) -> Version {
        self.version
    }

    fn set_version(&mut self, version: Version) {
        self.version = version;
    }

    fn apply(&mut self, event: Self::Event) {
        match event {
            SeatingEvent::TableAdded(data) => {
                self.tables.push(Table::new(data.table_id, data.capacity));
            }
            SeatingEvent::TableRemoved(data) => {
                self.tables.retain(|table| table.id() != data.table_id);
            }
            SeatingEvent::PartyBooked(data) => self.apply_party_booked(data),
            SeatingEvent::PartyRemoved(data) => {
                self.take_waiting(data.party_id);
            }
            SeatingEvent::PartySeated(data) => self.apply_party_seated(data),
            SeatingEvent::TableEmptied(data) => self.apply_table_emptied(data),
        }
    }
}

// Query methods
impl Restaurant {
    /// Creates an empty restaurant.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all tables in the order they were added.
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Returns a table by ID.
    pub fn table(&self, table_id: TableId) -> Option<&Table> {
        self.tables.iter().find(|table| table.id() == table_id)
    }

    /// Returns a party by ID, whether waiting or seated.
    pub fn party(&self, party_id: PartyId) -> Option<&Party> {
        self.waiting_party(party_id)
            .or_else(|| self.seated.get(&party_id))
    }

    /// Returns a waiting party by ID.
    pub fn waiting_party(&self, party_id: PartyId) -> Option<&Party> {
        self.waiting.iter().find(|party| party.id() == party_id)
    }

    /// Returns a seated party by ID.
    pub fn seated_party(&self, party_id: PartyId) -> Option<&Party> {
        self.seated.get(&party_id)
    }

    /// Returns the waiting parties, earliest booking first.
    pub fn waiting(&self) -> &[Party] {
        &self.waiting
    }

    /// Returns a snapshot of the occupied tables in insertion order.
    pub fn filled_tables(&self) -> Vec<Table> {
        self.tables
            .iter()
            .filter(|table| table.is_occupied())
            .cloned()
            .collect()
    }

    /// Returns a snapshot of the empty tables in insertion order.
    pub fn empty_tables(&self) -> Vec<Table> {
        self.tables
            .iter()
            .filter(|table| !table.is_occupied())
            .cloned()
            .collect()
    }

    /// Returns a snapshot of the waiting parties in booking order,
    /// regardless of VIP status.
    pub fn unseated_parties(&self) -> Vec<Party> {
        self.waiting.clone()
    }

    /// Returns the number of tables, occupied or not.
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Returns the number of parties waiting for a table.
    pub fn waiting_count(&self) -> usize {
        self.waiting.len()
    }

    /// Returns the number of parties currently seated.
    pub fn seated_count(&self) -> usize {
        self.seated.len()
    }

    /// Previews the pairing the next [`Restaurant::seat_party`] would make.
    pub fn next_seating(&self) -> Option<Assignment> {
        policy::next_assignment(&self.waiting, &self.tables)
    }

    /// Returns the first waiting party in VIP-first order.
    pub fn queue_head(&self) -> Option<&Party> {
        policy::queue_head(&self.waiting)
    }
}

// Command methods (decide, then apply)
impl Restaurant {
    /// Adds a table with the given capacity and returns its ID.
    pub fn add_table(&mut self, capacity: i32) -> Result<TableId, SeatingError> {
        self.run(AddTable::new(capacity))
    }

    /// Removes an empty table.
    ///
    /// Passing `None` fails with `MissingTable(None)`.
    pub fn remove_table(&mut self, table: impl Into<Option<TableId>>) -> Result<(), SeatingError> {
        self.run(RemoveTable::new(table))
    }

    /// Books a party into the waiting queue and returns its ID.
    pub fn book_party(&mut self, size: i32, vip: bool) -> Result<PartyId, SeatingError> {
        self.run(BookParty::new(size, vip))
    }

    /// Removes a party from the waiting queue.
    ///
    /// Seated parties are not waiting and are reported as missing; they
    /// leave through [`Restaurant::empty_table`].
    pub fn remove_party(&mut self, party: impl Into<Option<PartyId>>) -> Result<(), SeatingError> {
        self.run(RemoveParty::new(party))
    }

    /// Seats at most one waiting party.
    ///
    /// Returns `None` if nobody is waiting.
    pub fn seat_party(&mut self) -> Result<Option<Assignment>, SeatingError> {
        self.run(SeatParty)
    }

    /// Frees an occupied table and returns the party that was seated there.
    pub fn empty_table(
        &mut self,
        table: impl Into<Option<TableId>>,
    ) -> Result<Party, SeatingError> {
        self.run(EmptyTable::new(table))
    }

    fn run<C>(&mut self, command: C) -> Result<C::Output, SeatingError>
    where
        C: Command<Aggregate = Self>,
    {
        let decision = command.decide(self)?;
        self.commit(decision.events);
        Ok(decision.output)
    }
}

// Apply event helpers
impl Restaurant {
    fn apply_party_booked(&mut self, data: PartyBookedData) {
        self.waiting
            .push(Party::new(data.party_id, data.size, data.vip));
    }

    fn apply_party_seated(&mut self, data: PartySeatedData) {
        let Some(position) = self
            .tables
            .iter()
            .position(|table| table.id() == data.table_id)
        else {
            return;
        };
        let Some(mut party) = self.take_waiting(data.party_id) else {
            return;
        };

        self.tables[position].occupy(party.id());
        party.set_seated_table(Some(data.table_id));
        self.seated.insert(party.id(), party);
    }

    fn apply_table_emptied(&mut self, data: TableEmptiedData) {
        if let Some(table) = self
            .tables
            .iter_mut()
            .find(|table| table.id() == data.table_id)
        {
            table.free();
        }
        self.seated.remove(&data.party_id);
    }

    fn take_waiting(&mut self, party_id: PartyId) -> Option<Party> {
        let position = self
            .waiting
            .iter()
            .position(|party| party.id() == party_id)?;
        Some(self.waiting.remove(position))
    }
}

/// Unchecked serialized form of a [`Restaurant`].
#[derive(Deserialize)]
struct RestaurantSnapshot {
    #[serde(default)]
    version: Version,
    tables: Vec<Table>,
    waiting: Vec<Party>,
    seated: HashMap<PartyId, Party>,
}

impl TryFrom<RestaurantSnapshot> for Restaurant {
    type Error = SnapshotError;

    fn try_from(snapshot: RestaurantSnapshot) -> Result<Self, Self::Error> {
        let RestaurantSnapshot {
            version,
            tables,
            waiting,
            seated,
        } = snapshot;

        let mut table_ids = HashSet::new();
        for table in &tables {
            if table.capacity() == 0 {
                return Err(SnapshotError::ZeroCapacity(table.id()));
            }
            if !table_ids.insert(table.id()) {
                return Err(SnapshotError::DuplicateTable(table.id()));
            }
        }

        let mut party_ids = HashSet::new();
        for party in waiting.iter().chain(seated.values()) {
            if party.size() == 0 {
                return Err(SnapshotError::ZeroPartySize(party.id()));
            }
            if !party_ids.insert(party.id()) {
                return Err(SnapshotError::DuplicateParty(party.id()));
            }
        }

        if let Some(party) = waiting.iter().find(|party| party.is_seated()) {
            return Err(SnapshotError::WaitingPartySeated(party.id()));
        }

        for table in &tables {
            let Some(party_id) = table.occupant() else {
                continue;
            };
            let party = seated
                .get(&party_id)
                .filter(|party| party.seated_table() == Some(table.id()))
                .ok_or(SnapshotError::StrayOccupant {
                    table: table.id(),
                    party: party_id,
                })?;
            if party.size() > table.capacity() {
                return Err(SnapshotError::Overfilled {
                    table: table.id(),
                    party: party_id,
                });
            }
        }

        for (&party_id, party) in &seated {
            let occupies = party_id == party.id()
                && party.seated_table().is_some_and(|table_id| {
                    tables
                        .iter()
                        .any(|table| table.id() == table_id && table.occupant() == Some(party_id))
                });
            if !occupies {
                return Err(SnapshotError::StraySeatedParty(party_id));
            }
        }

        Ok(Self {
            version,
            tables,
            waiting,
            seated,
        })
    }
}
