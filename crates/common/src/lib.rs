//! Shared types for the restaurant seating system.

pub mod types;

pub use types::{PartyId, TableId, Version};
