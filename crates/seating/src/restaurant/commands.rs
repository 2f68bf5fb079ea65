//! Restaurant commands.
//!
//! Each command validates against the current restaurant and emits the
//! events for the change. Nothing is mutated while deciding.

use common::{PartyId, TableId};

use crate::command::{Command, Decision};
use crate::error::SeatingError;

use super::{Assignment, Party, Restaurant, SeatingEvent, policy};

/// Converts a size or capacity argument, rejecting zero and negatives.
fn positive(value: i32) -> Result<u32, SeatingError> {
    match u32::try_from(value) {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(SeatingError::NonPositiveArgument(value)),
    }
}

/// Command to add a table.
#[derive(Debug, Clone)]
pub struct AddTable {
    /// ID the new table will get.
    pub table_id: TableId,

    pub capacity: i32,
}

impl AddTable {
    /// Creates a new AddTable command with a generated table ID.
    pub fn new(capacity: i32) -> Self {
        Self {
            table_id: TableId::new(),
            capacity,
        }
    }
}

impl Command for AddTable {
    type Aggregate = Restaurant;
    type Output = TableId;

    fn name(&self) -> &'static str {
        "AddTable"
    }

    fn decide(&self, _: &Restaurant) -> Result<Decision<Restaurant, TableId>, SeatingError> {
        let capacity = positive(self.capacity)?;
        Ok(Decision::new(
            self.table_id,
            SeatingEvent::table_added(self.table_id, capacity),
        ))
    }
}

/// Command to remove an empty table.
#[derive(Debug, Clone)]
pub struct RemoveTable {
    pub table: Option<TableId>,
}

impl RemoveTable {
    /// Creates a RemoveTable command; `None` is rejected when decided.
    pub fn new(table: impl Into<Option<TableId>>) -> Self {
        Self {
            table: table.into(),
        }
    }
}

impl Command for RemoveTable {
    type Aggregate = Restaurant;
    type Output = ();

    fn name(&self) -> &'static str {
        "RemoveTable"
    }

    fn decide(&self, restaurant: &Restaurant) -> Result<Decision<Restaurant, ()>, SeatingError> {
        let table = self
            .table
            .and_then(|id| restaurant.table(id))
            .ok_or(SeatingError::MissingTable(self.table))?;

        if let Some(party) = table.occupant() {
            return Err(SeatingError::OccupiedTable {
                table: table.id(),
                party,
            });
        }

        Ok(Decision::new((), SeatingEvent::table_removed(table.id())))
    }
}

/// Command to book a party into the waiting queue.
#[derive(Debug, Clone)]
pub struct BookParty {
    /// ID the new party will get.
    pub party_id: PartyId,

    pub size: i32,

    pub vip: bool,
}

impl BookParty {
    /// Creates a new BookParty command with a generated party ID.
    pub fn new(size: i32, vip: bool) -> Self {
        Self {
            party_id: PartyId::new(),
            size,
            vip,
        }
    }
}

impl Command for BookParty {
    type Aggregate = Restaurant;
    type Output = PartyId;

    fn name(&self) -> &'static str {
        "BookParty"
    }

    fn decide(&self, _: &Restaurant) -> Result<Decision<Restaurant, PartyId>, SeatingError> {
        let size = positive(self.size)?;
        Ok(Decision::new(
            self.party_id,
            SeatingEvent::party_booked(self.party_id, size, self.vip),
        ))
    }
}

/// Command to take a party out of the waiting queue.
#[derive(Debug, Clone)]
pub struct RemoveParty {
    pub party: Option<PartyId>,
}

impl RemoveParty {
    /// Creates a RemoveParty command for a waiting party.
    pub fn new(party: impl Into<Option<PartyId>>) -> Self {
        Self {
            party: party.into(),
        }
    }
}

impl Command for RemoveParty {
    type Aggregate = Restaurant;
    type Output = ();

    fn name(&self) -> &'static str {
        "RemoveParty"
    }

    fn decide(&self, restaurant: &Restaurant) -> Result<Decision<Restaurant, ()>, SeatingError> {
        let party = self
            .party
            .and_then(|id| restaurant.waiting_party(id))
            .ok_or(SeatingError::MissingParty(self.party))?;

        Ok(Decision::new((), SeatingEvent::party_removed(party.id())))
    }
}

/// Command to seat the next eligible party.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeatParty;

impl Command for SeatParty {
    type Aggregate = Restaurant;
    type Output = Option<Assignment>;

    fn name(&self) -> &'static str {
        "SeatParty"
    }

    fn decide(
        &self,
        restaurant: &Restaurant,
    ) -> Result<Decision<Restaurant, Option<Assignment>>, SeatingError> {
        let Some(head) = restaurant.queue_head() else {
            return Ok(Decision::unchanged(None));
        };

        let assignment = policy::next_assignment(restaurant.waiting(), restaurant.tables())
            .ok_or(SeatingError::NoTablesAvailable(head.id()))?;

        Ok(Decision::new(
            Some(assignment),
            SeatingEvent::party_seated(assignment.party, assignment.table),
        ))
    }
}

/// Command to free an occupied table.
#[derive(Debug, Clone)]
pub struct EmptyTable {
    pub table: Option<TableId>,
}

impl EmptyTable {
    /// Creates an EmptyTable command for an occupied table.
    pub fn new(table: impl Into<Option<TableId>>) -> Self {
        Self {
            table: table.into(),
        }
    }
}

impl Command for EmptyTable {
    type Aggregate = Restaurant;
    type Output = Party;

    fn name(&self) -> &'static str {
        "EmptyTable"
    }

    fn decide(&self, restaurant: &Restaurant) -> Result<Decision<Restaurant, Party>, SeatingError> {
        let table = self
            .table
            .and_then(|id| restaurant.table(id))
            .ok_or(SeatingError::MissingTable(self.table))?;

        let party = table
            .occupant()
            .and_then(|id| restaurant.seated_party(id))
            .ok_or(SeatingError::EmptyTable(table.id()))?;

        let event = SeatingEvent::table_emptied(table.id(), party);
        let mut departed = party.clone();
        departed.set_seated_table(None);

        Ok(Decision::new(departed, event))
    }
}
