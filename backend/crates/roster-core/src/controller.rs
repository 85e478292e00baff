//! Capability-gated roster mutations.
//!
//! Every operation takes the current roster by reference and returns a
//! [`Mutation`]: the next roster revision, the notice to show, and whether
//! the caller should write the new revision to storage.

use crate::{
    Capability, CoreError, Member, MemberField, MemberValidator, Notice, Result as CoreErrorResult,
    Roster,
};

use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Who may add members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AddMemberPolicy {
    /// Any signed-in user may add a blank row
    #[default]
    AnyAuthenticated,
    /// Adding is gated like edit and delete
    AdminOnly,
}

impl AddMemberPolicy {
    pub fn permits(&self, capability: Capability) -> bool {
        match self {
            Self::AnyAuthenticated => capability.is_authenticated(),
            Self::AdminOnly => capability.is_admin(),
        }
    }
}

/// Whether a mutation's roster should be written back to storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersistIntent {
    Write,
    Skip,
}

impl PersistIntent {
    /// Empty rosters and untouched seed data are never written.
    pub fn for_roster(roster: &Roster) -> Self {
        if roster.is_empty() || roster.is_seed() {
            Self::Skip
        } else {
            Self::Write
        }
    }
}

/// Result of an accepted roster operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Mutation {
    pub roster: Roster,
    pub notice: Notice,
    pub persist: PersistIntent,
    /// Member that was added, edited, validated or removed
    pub affected: Option<Member>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RosterController {
    add_policy: AddMemberPolicy,
}

impl RosterController {
    pub fn new(add_policy: AddMemberPolicy) -> Self {
        Self { add_policy }
    }

    /// Append a blank member with the next serial number.
    #[track_caller]
    pub fn add_member(
        &self,
        roster: &Roster,
        capability: Capability,
    ) -> CoreErrorResult<Mutation> {
        if !self.add_policy.permits(capability) {
            return Err(CoreError::permission_denied("add"));
        }

        let member = Member::new(roster.next_serial());
        let next = roster.with_appended(member.clone());
        info!("Added member {} (SN {})", member.id, member.sn);

        Ok(Mutation {
            persist: PersistIntent::for_roster(&next),
            notice: Notice::info(
                "Member Added",
                format!(
                    "New member (SN {}) added. Please fill in their details.",
                    member.sn
                ),
            ),
            roster: next,
            affected: Some(member),
        })
    }

    /// Set one field from raw user input. Rejected input leaves the stored
    /// value as it was.
    #[track_caller]
    pub fn edit_field(
        &self,
        roster: &Roster,
        member_id: &str,
        field: MemberField,
        raw_value: &str,
        capability: Capability,
    ) -> CoreErrorResult<Mutation> {
        if !capability.is_admin() {
            return Err(CoreError::permission_denied("edit"));
        }

        let member = roster
            .find(member_id)
            .ok_or_else(|| CoreError::member_not_found(member_id))?;

        let updated = if field.is_numeric() {
            let value = MemberValidator::parse_numeric(field, raw_value)?;
            member.with_field(field, "", value)
        } else {
            member.with_field(field, raw_value, 0.0)
        };

        debug!("Edited {} of member {}", field, member.id);
        let next = roster.with_replaced(updated.clone());

        Ok(Mutation {
            persist: PersistIntent::for_roster(&next),
            notice: Notice::info(
                "Field Updated",
                format!("{} for SN {} set.", field.header(), updated.sn),
            ),
            roster: next,
            affected: Some(updated),
        })
    }

    /// Validate a member's current values and confirm them. The roster
    /// itself is unchanged.
    #[track_caller]
    pub fn update_member(
        &self,
        roster: &Roster,
        member_id: &str,
        capability: Capability,
    ) -> CoreErrorResult<Mutation> {
        if !capability.is_admin() {
            return Err(CoreError::permission_denied("update"));
        }

        let member = roster
            .find(member_id)
            .ok_or_else(|| CoreError::member_not_found(member_id))?;

        MemberValidator::validate_name(&member.name)?;
        MemberValidator::validate_phone(&member.phone)?;

        info!("Updated member {} (SN {})", member.id, member.sn);

        Ok(Mutation {
            roster: roster.clone(),
            notice: Notice::info(
                "Update Successful",
                format!(
                    "Data for {} (SN {}) has been updated.",
                    member.name, member.sn
                ),
            ),
            persist: PersistIntent::Skip,
            affected: Some(member.clone()),
        })
    }

    /// Remove a member. An unknown id is a soft no-op.
    #[track_caller]
    pub fn delete_member(
        &self,
        roster: &Roster,
        member_id: &str,
        capability: Capability,
    ) -> CoreErrorResult<Mutation> {
        if !capability.is_admin() {
            return Err(CoreError::permission_denied("delete"));
        }

        let (next, removed) = roster.without(member_id);

        let Some(removed) = removed else {
            debug!("Delete ignored, no member {member_id}");
            return Ok(Mutation {
                roster: roster.clone(),
                notice: Notice::info(
                    "No Member Removed",
                    format!("No member with id {member_id} was found."),
                ),
                persist: PersistIntent::Skip,
                affected: None,
            });
        };

        info!("Deleted member {} (SN {})", removed.id, removed.sn);

        Ok(Mutation {
            persist: PersistIntent::for_roster(&next),
            notice: Notice::info(
                "Member Deleted",
                format!(
                    "Member {} (SN {}) has been removed.",
                    removed.name, removed.sn
                ),
            ),
            roster: next,
            affected: Some(removed),
        })
    }
}
