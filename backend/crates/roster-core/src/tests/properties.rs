use crate::{
    Capability, Member, MemberField, MemorySlot, Roster, RosterController, RosterStore, filter,
};

use proptest::prelude::*;

/// Finite, non-negative amounts across the whole f64 range, fractions included.
fn arb_amount() -> impl Strategy<Value = f64> {
    prop::num::f64::POSITIVE
        | prop::num::f64::ZERO
        | prop::num::f64::NORMAL
        | prop::num::f64::SUBNORMAL
}

fn arb_member() -> impl Strategy<Value = Member> {
    (
        1u32..500,
        "[A-Za-z ]{0,12}",
        "[0-9x-]{0,12}",
        arb_amount(),
        arb_amount(),
        prop_oneof![Just(0.0), arb_amount()],
        arb_amount(),
    )
        .prop_map(|(sn, name, phone, amount, savings, loan, interest)| Member {
            id: Member::generate_id(),
            sn,
            name,
            phone,
            amount,
            savings,
            loan,
            interest,
        })
}

fn arb_roster() -> impl Strategy<Value = Roster> {
    prop::collection::vec(arb_member(), 0..25).prop_map(Roster::new)
}

proptest! {
    #[test]
    fn filter_is_idempotent(roster in arb_roster(), term in "[a-zA-Z0-9 ]{0,4}", loan_only in any::<bool>()) {
        let once: Vec<Member> = filter(&roster, &term, loan_only).cloned().collect();
        let twice: Vec<Member> = filter(&once, &term, loan_only).cloned().collect();

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn filter_keeps_roster_order(roster in arb_roster(), term in "[a-z]{0,2}") {
        let positions: Vec<usize> = filter(&roster, &term, false)
            .map(|m| roster.iter().position(|r| r.id == m.id).unwrap_or(usize::MAX))
            .collect();

        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn add_member_uses_max_serial_plus_one(roster in arb_roster()) {
        let expected = roster.iter().map(|m| m.sn).max().map_or(1, |max| max + 1);

        let mutation = RosterController::default()
            .add_member(&roster, Capability::Member)
            .unwrap();

        prop_assert_eq!(mutation.affected.map(|m| m.sn), Some(expected));
    }

    #[test]
    fn persist_then_hydrate_round_trips(roster in arb_roster()) {
        prop_assume!(!roster.is_empty() && !roster.is_seed());
        let mut store = RosterStore::new(MemorySlot::new());

        store.persist(&roster).unwrap();
        let hydrated = store.hydrate().unwrap();

        prop_assert_eq!(hydrated.roster, roster);
    }

    #[test]
    fn rejected_numeric_edit_never_changes_roster(raw in "[a-z]{1,6}") {
        let roster = Roster::seed();
        let id = roster.members()[0].id.clone();

        let result = RosterController::default()
            .edit_field(&roster, &id, MemberField::Amount, &raw, Capability::Admin);

        // "inf"/"nan" spellings parse as floats but are rejected as non-finite
        prop_assert!(result.is_err());
        prop_assert_eq!(roster.members()[0].amount, 1124.0);
    }
}
