//! Roster value - one immutable revision of the member list.

use crate::Member;
use crate::models::seed::{SEED_MEMBERS, seed_members};

use serde::{Deserialize, Serialize};

/// Ordered member list. Mutating operations return a new revision and
/// leave `self` untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    members: Vec<Member>,
}

impl Roster {
    pub fn new(members: Vec<Member>) -> Self {
        Self { members }
    }

    /// The fixed fallback roster. Identifiers are the same on every call.
    pub fn seed() -> Self {
        Self::new(seed_members())
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn into_members(self) -> Vec<Member> {
        self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Member> {
        self.members.iter()
    }

    pub fn find(&self, id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Serial number for the next added member: max + 1, or 1 when empty.
    pub fn next_serial(&self) -> u32 {
        self.members
            .iter()
            .map(|m| m.sn)
            .max()
            .map_or(1, |max| max.saturating_add(1))
    }

    /// Same data as the seed roster, identifiers ignored.
    pub fn is_seed(&self) -> bool {
        self.members.len() == SEED_MEMBERS.len()
            && self
                .members
                .iter()
                .zip(SEED_MEMBERS.iter())
                .all(|(member, seed)| seed.matches(member))
    }

    pub(crate) fn with_appended(&self, member: Member) -> Self {
        let mut members = self.members.clone();
        members.push(member);
        Self { members }
    }

    pub(crate) fn with_replaced(&self, member: Member) -> Self {
        let members = self
            .members
            .iter()
            .map(|m| {
                if m.id == member.id {
                    member.clone()
                } else {
                    m.clone()
                }
            })
            .collect();
        Self { members }
    }

    /// New revision without `id`, plus the removed member if it was present.
    pub(crate) fn without(&self, id: &str) -> (Self, Option<Member>) {
        let removed = self.find(id).cloned();
        let members = self
            .members
            .iter()
            .filter(|m| m.id != id)
            .cloned()
            .collect();
        (Self { members }, removed)
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Member;
    type IntoIter = std::slice::Iter<'a, Member>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
