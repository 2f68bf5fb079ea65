//! Restaurant aggregate and related types.

mod aggregate;
mod commands;
mod events;
mod party;
pub mod policy;
mod service;
mod table;

pub use aggregate::Restaurant;
pub use commands::{AddTable, BookParty, EmptyTable, RemoveParty, RemoveTable, SeatParty};
pub use events::{
    PartyBookedData, PartyRemovedData, PartySeatedData, SeatingEvent, TableAddedData,
    TableEmptiedData, TableRemovedData,
};
pub use party::Party;
pub use policy::Assignment;
pub use service::SeatingService;
pub use table::Table;
