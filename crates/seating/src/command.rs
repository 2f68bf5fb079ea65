//! Command handling infrastructure.

use std::collections::VecDeque;

use common::Version;

use crate::aggregate::Aggregate;

/// What a command decided: the value handed back to the caller and the
/// events that realise the change.
#[derive(Debug)]
pub struct Decision<A: Aggregate, T> {
    /// Value returned to the caller once the events are applied.
    pub output: T,

    /// Events to apply, in order. Empty when the command is a no-op.
    pub events: Vec<A::Event>,
}

impl<A: Aggregate, T> Decision<A, T> {
    /// A decision that emits a single event.
    pub fn new(output: T, event: A::Event) -> Self {
        Self {
            output,
            events: vec![event],
        }
    }

    /// A decision that changes nothing.
    pub fn unchanged(output: T) -> Self {
        Self {
            output,
            events: Vec::new(),
        }
    }
}

/// Result of command execution through a [`CommandHandler`].
#[derive(Debug)]
pub struct CommandResult<A: Aggregate, T> {
    /// The command's output.
    pub output: T,

    /// The events that were generated and applied.
    pub events: Vec<A::Event>,

    /// The version of the aggregate after the command.
    pub new_version: Version,
}

/// Trait for commands that can be executed against an aggregate.
///
/// Commands represent an intention to perform an action. They may be rejected
/// if the aggregate's current state doesn't allow the action.
pub trait Command {
    /// The type of aggregate this command targets.
    type Aggregate: Aggregate;

    /// The value returned on success.
    type Output;

    /// Returns the command name, used in logs.
    fn name(&self) -> &'static str;

    /// Validates the command against the current state and returns the
    /// events to apply. Must not have side effects.
    fn decide(
        &self,
        aggregate: &Self::Aggregate,
    ) -> Result<Decision<Self::Aggregate, Self::Output>, <Self::Aggregate as Aggregate>::Error>;
}

/// Owns an aggregate and executes commands against it.
///
/// The handler keeps a journal of the most recently applied events. With a
/// limit of 0 the journal is unbounded and can be replayed with
/// [`Aggregate::from_events`] to rebuild the aggregate.
#[derive(Debug)]
pub struct CommandHandler<A: Aggregate> {
    aggregate: A,
    journal: VecDeque<A::Event>,
    journal_limit: usize,
}

impl<A: Aggregate> CommandHandler<A> {
    /// Creates a handler around an aggregate with an unbounded journal.
    pub fn new(aggregate: A) -> Self {
        Self::with_journal_limit(aggregate, 0)
    }

    /// Creates a handler that retains at most `journal_limit` events.
    pub fn with_journal_limit(aggregate: A, journal_limit: usize) -> Self {
        Self {
            aggregate,
            journal: VecDeque::new(),
            journal_limit,
        }
    }

    /// Returns a reference to the aggregate.
    pub fn aggregate(&self) -> &A {
        &self.aggregate
    }

    /// Consumes the handler, returning the aggregate.
    pub fn into_aggregate(self) -> A {
        self.aggregate
    }

    /// Returns the journaled events, oldest first.
    pub fn journal(&self) -> impl Iterator<Item = &A::Event> {
        self.journal.iter()
    }

    /// Returns the number of journaled events.
    pub fn journal_len(&self) -> usize {
        self.journal.len()
    }

    /// Executes a command and applies the resulting events.
    pub fn execute<C>(&mut self, command: C) -> Result<CommandResult<A, C::Output>, A::Error>
    where
        C: Command<Aggregate = A>,
    {
        let Decision { output, events } = command.decide(&self.aggregate)?;

        if events.is_empty() {
            return Ok(CommandResult {
                output,
                events,
                new_version: self.aggregate.version(),
            });
        }

        let new_version = self.aggregate.commit(events.iter().cloned());
        self.record(&events);

        Ok(CommandResult {
            output,
            events,
            new_version,
        })
    }

    fn record(&mut self, events: &[A::Event]) {
        self.journal.extend(events.iter().cloned());
        if self.journal_limit > 0 {
            while self.journal.len() > self.journal_limit {
                self.journal.pop_front();
            }
        }
    }
}
