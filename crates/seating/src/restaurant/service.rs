//! Seating service providing a logged, journaled API over the restaurant.

use common::{PartyId, TableId};

use crate::command::{Command, CommandHandler, CommandResult};
use crate::config::SeatingConfig;
use crate::error::SeatingError;

use super::{
    AddTable, Assignment, BookParty, EmptyTable, Party, RemoveParty, RemoveTable, Restaurant,
    SeatParty, SeatingEvent,
};

/// Service for running a restaurant floor.
///
/// Wraps a [`CommandHandler`] over a [`Restaurant`], journaling applied
/// events and reporting tracing spans and metrics for each operation.
#[derive(Debug)]
pub struct SeatingService {
    handler: CommandHandler<Restaurant>,
}

impl SeatingService {
    /// Creates a service over an empty restaurant with default settings.
    pub fn new() -> Self {
        let config = SeatingConfig::default();
        Self {
            handler: CommandHandler::with_journal_limit(Restaurant::new(), config.journal_limit),
        }
    }

    /// Creates a service and adds the configured floor plan, in order.
    pub fn from_config(config: SeatingConfig) -> Result<Self, SeatingError> {
        let mut service = Self {
            handler: CommandHandler::with_journal_limit(Restaurant::new(), config.journal_limit),
        };

        for capacity in config.floor_plan {
            service.add_table(AddTable::new(capacity))?;
        }

        tracing::info!(
            tables = service.restaurant().table_count(),
            journal_limit = config.journal_limit,
            "floor plan loaded"
        );
        Ok(service)
    }

    /// Returns a reference to the underlying command handler.
    pub fn handler(&self) -> &CommandHandler<Restaurant> {
        &self.handler
    }

    pub fn restaurant(&self) -> &Restaurant {
        self.handler.aggregate()
    }

    pub fn into_restaurant(self) -> Restaurant {
        self.handler.into_aggregate()
    }

    /// Returns the journaled events, oldest first.
    pub fn journal(&self) -> impl Iterator<Item = &SeatingEvent> {
        self.handler.journal()
    }

    /// Adds a table to the floor.
    #[tracing::instrument(skip(self))]
    pub fn add_table(
        &mut self,
        cmd: AddTable,
    ) -> Result<CommandResult<Restaurant, TableId>, SeatingError> {
        self.execute(cmd)
    }

    /// Removes an empty table from the floor.
    #[tracing::instrument(skip(self))]
    pub fn remove_table(
        &mut self,
        cmd: RemoveTable,
    ) -> Result<CommandResult<Restaurant, ()>, SeatingError> {
        self.execute(cmd)
    }

    /// Books a party into the waiting queue.
    #[tracing::instrument(skip(self))]
    pub fn book_party(
        &mut self,
        cmd: BookParty,
    ) -> Result<CommandResult<Restaurant, PartyId>, SeatingError> {
        let result = self.execute(cmd)?;
        metrics::counter!("seating_parties_booked_total").increment(1);
        Ok(result)
    }

    /// Takes a waiting party out of the queue.
    #[tracing::instrument(skip(self))]
    pub fn remove_party(
        &mut self,
        cmd: RemoveParty,
    ) -> Result<CommandResult<Restaurant, ()>, SeatingError> {
        self.execute(cmd)
    }

    /// Seats the next eligible party, if any.
    #[tracing::instrument(skip(self))]
    pub fn seat_party(
        &mut self,
    ) -> Result<CommandResult<Restaurant, Option<Assignment>>, SeatingError> {
        let result = self.execute(SeatParty);

        match &result {
            Ok(CommandResult {
                output: Some(assignment),
                ..
            }) => {
                metrics::counter!("seating_parties_seated_total").increment(1);
                tracing::info!(
                    party_id = %assignment.party,
                    table_id = %assignment.table,
                    "party seated"
                );
            }
            Err(SeatingError::NoTablesAvailable(_)) => {
                metrics::counter!("seating_no_tables_available_total").increment(1);
            }
            _ => {}
        }

        result
    }

    /// Empties an occupied table and returns the departing party.
    #[tracing::instrument(skip(self))]
    pub fn empty_table(
        &mut self,
        cmd: EmptyTable,
    ) -> Result<CommandResult<Restaurant, Party>, SeatingError> {
        let result = self.execute(cmd)?;
        metrics::counter!("seating_tables_emptied_total").increment(1);
        Ok(result)
    }

    // Convenience methods

    /// Seats parties until nobody is waiting or no waiting party fits.
    ///
    /// Returns the pairings made, in order.
    #[tracing::instrument(skip(self))]
    pub fn seat_all(&mut self) -> Vec<Assignment> {
        let mut seated = Vec::new();
        while let Ok(CommandResult {
            output: Some(assignment),
            ..
        }) = self.seat_party()
        {
            seated.push(assignment);
        }

        tracing::debug!(
            seated = seated.len(),
            still_waiting = self.restaurant().waiting_count(),
            "seating round finished"
        );
        seated
    }

    fn execute<C>(
        &mut self,
        command: C,
    ) -> Result<CommandResult<Restaurant, C::Output>, SeatingError>
    where
        C: Command<Aggregate = Restaurant>,
    {
        let name = command.name();
        let result = self.handler.execute(command)?;

        tracing::debug!(
            command = name,
            version = %result.new_version,
            events = result.events.len(),
            "command applied"
        );
        metrics::gauge!("seating_waiting_parties").set(self.restaurant().waiting_count() as f64);

        Ok(result)
    }
}

impl Default for SeatingService {
    fn default() -> Self {
        Self::new()
    }
}
