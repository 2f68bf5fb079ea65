//! Domain error types.

use common::{PartyId, TableId};
use thiserror::Error;

/// Errors that can occur during seating operations.
///
/// Every variant carries the offending argument or entity handle so callers
/// can check exactly what was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeatingError {
    /// A table capacity or party size was zero or negative.
    #[error("Argument must be positive, got {0}")]
    NonPositiveArgument(i32),

    /// The table is not owned by the restaurant, or no table was given.
    #[error("Table not found: {}", describe(.0))]
    MissingTable(Option<TableId>),

    /// The operation needs an empty table but a party is seated there.
    #[error("Table {table} is occupied by party {party}")]
    OccupiedTable { table: TableId, party: PartyId },

    /// The operation needs an occupied table.
    #[error("Table {0} is not occupied")]
    EmptyTable(TableId),

    /// The party is not waiting to be seated, or no party was given.
    #[error("Party not waiting: {}", describe(.0))]
    MissingParty(Option<PartyId>),

    /// No empty table can hold any waiting party.
    #[error("No table available for any waiting party (head of queue: {0})")]
    NoTablesAvailable(PartyId),
}

impl SeatingError {
    /// Returns the rejected argument for [`SeatingError::NonPositiveArgument`].
    pub fn argument(&self) -> Option<i32> {
        match self {
            SeatingError::NonPositiveArgument(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the table the error refers to, if any.
    pub fn table(&self) -> Option<TableId> {
        match self {
            SeatingError::MissingTable(table) => *table,
            SeatingError::OccupiedTable { table, .. } => Some(*table),
            SeatingError::EmptyTable(table) => Some(*table),
            _ => None,
        }
    }

    /// Returns the party the error refers to, if any.
    pub fn party(&self) -> Option<PartyId> {
        match self {
            SeatingError::OccupiedTable { party, .. } => Some(*party),
            SeatingError::MissingParty(party) => *party,
            SeatingError::NoTablesAvailable(party) => Some(*party),
            _ => None,
        }
    }
}

fn describe<T: std::fmt::Display>(id: &Option<T>) -> String {
    id.as_ref()
        .map_or_else(|| "none".to_string(), ToString::to_string)
}

/// Errors raised when a restaurant snapshot breaks a seating invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    /// A table has no seats.
    #[error("Table {0} has zero capacity")]
    ZeroCapacity(TableId),

    /// A party has no guests.
    #[error("Party {0} has zero size")]
    ZeroPartySize(PartyId),

    /// The same table appears more than once.
    #[error("Table {0} is listed more than once")]
    DuplicateTable(TableId),

    /// The same party appears more than once, waiting or seated.
    #[error("Party {0} is listed more than once")]
    DuplicateParty(PartyId),

    /// A waiting party claims a table.
    #[error("Waiting party {0} is marked as seated")]
    WaitingPartySeated(PartyId),

    /// A table's occupant is not a party seated at that table.
    #[error("Table {table} holds party {party}, which is not seated there")]
    StrayOccupant { table: TableId, party: PartyId },

    /// A seated party does not occupy the table it names.
    #[error("Seated party {0} does not occupy its table")]
    StraySeatedParty(PartyId),

    /// A seated party is larger than its table.
    #[error("Party {party} does not fit at table {table}")]
    Overfilled { table: TableId, party: PartyId },
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document could not be parsed.
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
