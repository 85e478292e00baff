use crate::{Member, Notice, Roster};

/// Lazily filter members by search text and outstanding loan.
///
/// A blank (whitespace-only) term matches everyone. Otherwise the term is
/// lowercased as typed and must appear in the lowercased name or phone.
pub fn filter<'a, I>(
    members: I,
    search_term: &str,
    loan_only: bool,
) -> impl Iterator<Item = &'a Member> + use<'a, I>
where
    I: IntoIterator<Item = &'a Member>,
{
    let needle = (!search_term.trim().is_empty()).then(|| search_term.to_lowercase());

    members.into_iter().filter(move |member| {
        let matches_search = needle
            .as_deref()
            .is_none_or(|needle| member.matches_search(needle));
        let matches_loan = !loan_only || member.has_outstanding_loan();
        matches_search && matches_loan
    })
}

/// Current filter inputs
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RosterQuery {
    pub search_term: String,
    pub loan_only: bool,
}

impl RosterQuery {
    pub fn new(search_term: impl Into<String>, loan_only: bool) -> Self {
        Self {
            search_term: search_term.into(),
            loan_only,
        }
    }

    pub fn has_active_filters(&self) -> bool {
        !self.search_term.trim().is_empty() || self.loan_only
    }

    pub fn apply<'a>(&self, roster: &'a Roster) -> RosterView<'a> {
        RosterView {
            members: filter(roster, &self.search_term, self.loan_only).collect(),
            has_active_filters: self.has_active_filters(),
        }
    }
}

/// Filtered projection of one roster revision.
#[derive(Debug, Clone)]
pub struct RosterView<'a> {
    members: Vec<&'a Member>,
    has_active_filters: bool,
}

impl<'a> RosterView<'a> {
    pub fn members(&self) -> &[&'a Member] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Message for an empty table, distinguishing "filtered out" from "no data".
    pub fn empty_state(&self) -> Option<Notice> {
        if !self.is_empty() {
            return None;
        }

        Some(if self.has_active_filters {
            Notice::info(
                "No Members Match Filters",
                "Try adjusting your search or filter criteria.",
            )
        } else {
            Notice::info(
                "No Member Data",
                "Click \"Add New Member\" to get started.",
            )
        })
    }
}
