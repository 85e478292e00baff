//! Member roster store - hydrates from and writes back to a [`RosterSlot`].

pub mod error;
pub mod file_slot;
pub mod slot;

use crate::store::{error::Result as StorageResult, slot::RosterSlot};
use crate::{Member, Mutation, PersistIntent, Roster};

use std::collections::HashSet;

use log::{info, warn};
use serde_json::Value;

/// Why the seed roster was used instead of stored data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedReason {
    /// Slot is empty (first run)
    Missing,
    /// Stored text is not valid JSON
    Malformed(String),
    /// Stored JSON is valid but not an array
    NotAnArray,
    /// Stored array had records but none passed validation
    NoValidRecords,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HydrateSource {
    Stored,
    Seed(SeedReason),
}

/// Outcome of [`RosterStore::hydrate`].
#[derive(Debug, Clone)]
pub struct HydrateResult {
    pub roster: Roster,
    pub source: HydrateSource,
    /// Stored records dropped by validation
    pub rejected: usize,
}

impl HydrateResult {
    fn seed(reason: SeedReason) -> Self {
        Self {
            roster: Roster::seed(),
            source: HydrateSource::Seed(reason),
            rejected: 0,
        }
    }
}

pub struct RosterStore<S: RosterSlot> {
    slot: S,
}

impl<S: RosterSlot> RosterStore<S> {
    pub fn new(slot: S) -> Self {
        Self { slot }
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Load the roster.
    ///
    /// Falls back to the seed roster when the slot is empty, unparseable,
    /// not an array, or holds no valid records. Individual records that do
    /// not deserialize as a complete [`Member`], fail
    /// [`Member::validate_stored`], or repeat an earlier id are dropped.
    /// Only slot I/O failures are errors.
    pub fn hydrate(&self) -> StorageResult<HydrateResult> {
        let Some(contents) = self.slot.read()? else {
            info!("No stored roster in {} (first run)", self.slot.describe());
            return Ok(HydrateResult::seed(SeedReason::Missing));
        };

        let parsed: Value = match serde_json::from_str(&contents) {
            Ok(value) => value,
            Err(e) => {
                warn!("Stored roster in {} is malformed: {e}", self.slot.describe());
                return Ok(HydrateResult::seed(SeedReason::Malformed(e.to_string())));
            }
        };

        let Value::Array(records) = parsed else {
            warn!("Stored roster in {} is not an array", self.slot.describe());
            return Ok(HydrateResult::seed(SeedReason::NotAnArray));
        };

        let total = records.len();
        let mut seen = HashSet::with_capacity(total);
        let mut members = Vec::with_capacity(total);

        for (index, record) in records.into_iter().enumerate() {
            let member = match serde_json::from_value::<Member>(record) {
                Ok(member) => member,
                Err(e) => {
                    warn!("Dropping stored record {index}: {e}");
                    continue;
                }
            };

            if let Err(e) = member.validate_stored() {
                warn!("Dropping stored record {index}: {e}");
                continue;
            }

            if !seen.insert(member.id.clone()) {
                warn!("Dropping stored record {index}: duplicate id {}", member.id);
                continue;
            }

            members.push(member);
        }

        let rejected = total - members.len();

        if total > 0 && members.is_empty() {
            warn!(
                "All {total} stored records in {} were invalid",
                self.slot.describe()
            );
            return Ok(HydrateResult {
                rejected,
                ..HydrateResult::seed(SeedReason::NoValidRecords)
            });
        }

        info!(
            "Loaded {} members from {} ({rejected} rejected)",
            members.len(),
            self.slot.describe()
        );

        Ok(HydrateResult {
            roster: Roster::new(members),
            source: HydrateSource::Stored,
            rejected,
        })
    }

    /// Write `roster` if it is non-empty and differs from the seed.
    /// Returns whether a write happened.
    pub fn persist(&mut self, roster: &Roster) -> StorageResult<bool> {
        match PersistIntent::for_roster(roster) {
            PersistIntent::Write => self.write(roster).map(|()| true),
            PersistIntent::Skip => Ok(false),
        }
    }

    /// Carry out the persistence intent of a mutation.
    pub fn apply(&mut self, mutation: &Mutation) -> StorageResult<bool> {
        match mutation.persist {
            PersistIntent::Write => self.write(&mutation.roster).map(|()| true),
            PersistIntent::Skip => Ok(false),
        }
    }

    fn write(&mut self, roster: &Roster) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(roster)?;
        self.slot.write(&json)?;
        info!("Saved {} members to {}", roster.len(), self.slot.describe());
        Ok(())
    }
}
