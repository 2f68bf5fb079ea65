//! In-memory seating manager for a restaurant.
//!
//! This crate provides:
//! - Aggregate and DomainEvent traits for event-applied state
//! - Command trait and CommandHandler for decide-then-apply execution
//! - Restaurant aggregate owning tables and the waiting queue
//! - A VIP-first, best-fit seating policy
//! - SeatingService with tracing, metrics and an event journal

pub mod aggregate;
pub mod command;
pub mod config;
pub mod error;
pub mod restaurant;

pub use aggregate::{Aggregate, DomainEvent};
pub use command::{Command, CommandHandler, CommandResult, Decision};
pub use common::{PartyId, TableId, Version};
pub use config::SeatingConfig;
pub use error::{ConfigError, SeatingError, SnapshotError};
pub use restaurant::{
    AddTable, Assignment, BookParty, EmptyTable, Party, RemoveParty, RemoveTable, Restaurant,
    SeatParty, SeatingEvent, SeatingService, Table, policy,
};
