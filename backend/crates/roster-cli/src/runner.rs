use crate::commands::Commands;
use crate::error::Result as CliErrorResult;
use crate::output::CommandOutcome;

use roster_core::{
    Capability, CoreError, HydrateSource, MemberField, Mutation, Roster, RosterController,
    RosterQuery, RosterSlot, RosterStore,
};

use std::str::FromStr;

use log::{info, warn};

/// Runs one command against a store on behalf of a single caller.
pub struct Runner<S: RosterSlot> {
    store: RosterStore<S>,
    controller: RosterController,
    capability: Capability,
}

impl<S: RosterSlot> Runner<S> {
    pub fn new(store: RosterStore<S>, controller: RosterController, capability: Capability) -> Self {
        Self {
            store,
            controller,
            capability,
        }
    }

    pub fn store(&self) -> &RosterStore<S> {
        &self.store
    }

    /// Hydrate, execute, persist.
    ///
    /// A rejected operation is not an `Err`: it yields an outcome carrying the
    /// destructive notice and the unchanged roster. `Err` is reserved for
    /// storage and serialization failures.
    pub fn run(&mut self, command: &Commands) -> CliErrorResult<CommandOutcome> {
        let hydrated = self.store.hydrate()?;
        if let HydrateSource::Seed(ref reason) = hydrated.source {
            info!("Using seed roster ({reason:?}) from {}", self.store.slot().describe());
        }
        if hydrated.rejected > 0 {
            warn!("Ignored {} invalid stored record(s)", hydrated.rejected);
        }
        let roster = hydrated.roster;

        let result = match command {
            Commands::List { search, loan_only } => {
                let query = RosterQuery::new(search.as_deref().unwrap_or_default(), *loan_only);
                let view = query.apply(&roster);
                let members = view.members().iter().map(|m| (*m).clone()).collect();
                return Ok(CommandOutcome::accepted(view.empty_state(), members));
            }
            Commands::Add => self.controller.add_member(&roster, self.capability),
            Commands::Edit { id, field, value } => MemberField::from_str(field)
                .and_then(|field| {
                    self.controller
                        .edit_field(&roster, id, field, value, self.capability)
                }),
            Commands::Update { id } => self.controller.update_member(&roster, id, self.capability),
            Commands::Delete { id } => self.controller.delete_member(&roster, id, self.capability),
        };

        self.finish(roster, result)
    }

    fn finish(
        &mut self,
        roster: Roster,
        result: Result<Mutation, CoreError>,
    ) -> CliErrorResult<CommandOutcome> {
        match result {
            Ok(mutation) => {
                self.store.apply(&mutation)?;
                Ok(CommandOutcome::accepted(
                    Some(mutation.notice),
                    mutation.roster.into_members(),
                ))
            }
            Err(e) => {
                warn!("Rejected as {}: {e}", self.capability);
                Ok(CommandOutcome::rejected(e.notice(), roster.into_members()))
            }
        }
    }
}
