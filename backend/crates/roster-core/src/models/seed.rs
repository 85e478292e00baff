//! Fixed fallback roster used when nothing valid is stored.

use crate::Member;

/// Seed row without an identifier. Identifiers are minted from the serial
/// number each time the seed is materialised, so they match across loads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedMember {
    pub sn: u32,
    pub name: &'static str,
    pub phone: &'static str,
    pub amount: f64,
    pub savings: f64,
    pub loan: f64,
    pub interest: f64,
}

impl SeedMember {
    const fn new(
        sn: u32,
        name: &'static str,
        phone: &'static str,
        amount: f64,
        savings: f64,
        loan: f64,
        interest: f64,
    ) -> Self {
        Self {
            sn,
            name,
            phone,
            amount,
            savings,
            loan,
            interest,
        }
    }

    /// True when `member` carries exactly this row's data, ignoring its id.
    pub fn matches(&self, member: &Member) -> bool {
        member.sn == self.sn
            && member.name == self.name
            && member.phone == self.phone
            && member.amount == self.amount
            && member.savings == self.savings
            && member.loan == self.loan
            && member.interest == self.interest
    }

    fn to_member(self, id: String) -> Member {
        Member {
            id,
            sn: self.sn,
            name: self.name.to_string(),
            phone: self.phone.to_string(),
            amount: self.amount,
            savings: self.savings,
            loan: self.loan,
            interest: self.interest,
        }
    }
}

pub const SEED_MEMBERS: [SeedMember; 11] = [
    SeedMember::new(1, "Elizabeth", "0745xxxx819", 1124.0, 1000.0, 1000.0, 133.0),
    SeedMember::new(2, "Felisters", "0708xxxx139", 1124.0, 1000.0, 0.0, 0.0),
    SeedMember::new(3, "Purity", "0707xxxx689", 1124.0, 1000.0, 0.0, 0.0),
    SeedMember::new(4, "Sharon", "0793xxxx766", 1124.0, 1000.0, 0.0, 0.0),
    SeedMember::new(5, "Lydia", "0714xxxx426", 1124.0, 1000.0, 0.0, 0.0),
    SeedMember::new(6, "Vallary", "0790xxxx356", 1124.0, 1000.0, 0.0, 0.0),
    SeedMember::new(7, "Zakia", "0748xxxx139", 1124.0, 1000.0, 6000.0, 666.0),
    SeedMember::new(8, "Oliver", "0797xxxx989", 1124.0, 1000.0, 0.0, 0.0),
    SeedMember::new(9, "Syphrine", "0799xxxx706", 1124.0, 1000.0, 1000.0, 352.0),
    SeedMember::new(10, "Phanice", "0727xxxx111", 1124.0, 0.0, 0.0, 0.0),
    SeedMember::new(11, "George", "0712xxxx345", 1000.0, 1000.0, 0.0, 0.0),
];

/// Materialise the seed roster with `member-seed-<sn>` ids.
pub fn seed_members() -> Vec<Member> {
    SEED_MEMBERS
        .iter()
        .map(|seed| seed.to_member(format!("member-seed-{}", seed.sn)))
        .collect()
}
