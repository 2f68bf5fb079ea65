//! Seating policy: which waiting party goes to which empty table.
//!
//! Parties are considered VIPs first, then everyone else, each group in
//! booking order. The first party with at least one fitting table is seated
//! at the smallest such table; equal capacities go to the table added first.
//! Parties that fit nowhere are skipped.

use common::{PartyId, TableId};
use serde::{Deserialize, Serialize};

use super::{Party, Table};

/// A (party, table) pairing chosen by the seating policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Assignment {
    pub party: PartyId,
    pub table: TableId,
}

/// Orders the waiting parties VIPs first, keeping booking order within
/// each group.
pub fn vip_first(waiting: &[Party]) -> impl Iterator<Item = &Party> {
    let vips = waiting.iter().filter(|party| party.is_vip());
    let others = waiting.iter().filter(|party| !party.is_vip());
    vips.chain(others)
}

/// The party at the front of the VIP-first ordering.
pub fn queue_head(waiting: &[Party]) -> Option<&Party> {
    vip_first(waiting).next()
}

/// Returns the smallest empty table that holds `size` guests.
///
/// Ties go to the table that appears first in `tables`.
pub fn best_fit(tables: &[Table], size: u32) -> Option<&Table> {
    tables
        .iter()
        .enumerate()
        .filter(|(_, table)| table.can_seat(size))
        .min_by_key(|(position, table)| (table.capacity(), *position))
        .map(|(_, table)| table)
}

/// Picks the next pairing, or `None` if no waiting party fits anywhere.
pub fn next_assignment(waiting: &[Party], tables: &[Table]) -> Option<Assignment> {
    vip_first(waiting).find_map(|party| {
        best_fit(tables, party.size()).map(|table| Assignment {
            party: party.id(),
            table: table.id(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn party(size: u32, vip: bool) -> Party {
        Party::new(PartyId::new(), size, vip)
    }

    fn table(capacity: u32) -> Table {
        Table::new(TableId::new(), capacity)
    }

    #[test]
    fn vip_first_is_a_stable_partition() {
        let waiting = vec![
            party(2, false),
            party(3, true),
            party(4, false),
            party(5, true),
        ];

        let order: Vec<u32> = vip_first(&waiting).map(Party::size).collect();
        assert_eq!(order, vec![3, 5, 2, 4]);
        assert_eq!(queue_head(&waiting).map(Party::size), Some(3));
    }

    #[test]
    fn queue_head_without_vips_is_first_booked() {
        let waiting = vec![party(7, false), party(2, false)];
        assert_eq!(queue_head(&waiting).map(Party::size), Some(7));
        assert!(queue_head(&[]).is_none());
    }

    #[test]
    fn best_fit_prefers_exact_capacity() {
        let tables = vec![table(8), table(5), table(6)];
        let chosen = best_fit(&tables, 5).unwrap();
        assert_eq!(chosen.id(), tables[1].id());
    }

    #[test]
    fn best_fit_breaks_ties_by_insertion_order() {
        let tables = vec![table(10), table(6), table(6)];
        let chosen = best_fit(&tables, 4).unwrap();
        assert_eq!(chosen.id(), tables[1].id());
    }

    #[test]
    fn best_fit_skips_occupied_tables() {
        let mut tables = vec![table(4), table(6)];
        tables[0].occupy(PartyId::new());

        let chosen = best_fit(&tables, 3).unwrap();
        assert_eq!(chosen.id(), tables[1].id());
        assert!(best_fit(&tables, 7).is_none());
    }

    #[test]
    fn next_assignment_skips_parties_that_do_not_fit() {
        let waiting = vec![party(7, true), party(5, false)];
        let tables = vec![table(6)];

        let assignment = next_assignment(&waiting, &tables).unwrap();
        assert_eq!(assignment.party, waiting[1].id());
        assert_eq!(assignment.table, tables[0].id());
    }

    #[test]
    fn next_assignment_prefers_vip_over_earlier_booking() {
        let waiting = vec![party(5, false), party(5, true)];
        let tables = vec![table(6)];

        let assignment = next_assignment(&waiting, &tables).unwrap();
        assert_eq!(assignment.party, waiting[1].id());
    }

    #[test]
    fn next_assignment_none_without_fitting_table() {
        let waiting = vec![party(5, false)];
        assert!(next_assignment(&waiting, &[]).is_none());
        assert!(next_assignment(&waiting, &[table(4)]).is_none());
        assert!(next_assignment(&[], &[table(4)]).is_none());
    }
}
