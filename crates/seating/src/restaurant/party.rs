//! Party entity.

use common::{PartyId, TableId};
use serde::{Deserialize, Serialize};

/// A group of guests to be seated together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    id: PartyId,
    size: u32,
    vip: bool,
    seated_table: Option<TableId>,
}

impl Party {
    pub(crate) fn new(id: PartyId, size: u32, vip: bool) -> Self {
        Self {
            id,
            size,
            vip,
            seated_table: None,
        }
    }

    /// Returns the party's ID.
    pub fn id(&self) -> PartyId {
        self.id
    }

    /// Number of guests in the party.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Returns true if the party has seating priority.
    pub fn is_vip(&self) -> bool {
        self.vip
    }

    /// Returns the table the party is seated at, if any.
    pub fn seated_table(&self) -> Option<TableId> {
        self.seated_table
    }

    /// Returns true if the party occupies a table.
    pub fn is_seated(&self) -> bool {
        self.seated_table.is_some()
    }

    pub(crate) fn set_seated_table(&mut self, table: Option<TableId>) {
        self.seated_table = table;
    }
}
