mod capability;
mod member;
mod properties;

use crate::{Member, Roster};

/// Member with the given serial number and data, id derived from `sn`.
pub(crate) fn member(sn: u32, name: &str, phone: &str, loan: f64) -> Member {
    Member {
        id: format!("member-test-{sn}"),
        sn,
        name: name.to_string(),
        phone: phone.to_string(),
        amount: 100.0,
        savings: 50.0,
        loan,
        interest: 0.0,
    }
}

/// Small non-seed roster: Ann (loan), Ben, Cleo (loan).
pub(crate) fn sample_roster() -> Roster {
    Roster::new(vec![
        member(1, "Ann", "0711000001", 500.0),
        member(2, "Ben", "071-100-0002", 0.0),
        member(3, "Cleo", "0711000003", 25.0),
    ])
}
