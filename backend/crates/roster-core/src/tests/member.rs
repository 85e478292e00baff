use crate::tests::member;
use crate::{CoreError, Member, MemberField};

use std::str::FromStr;

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok, starts_with};

#[test]
fn test_member_new() {
    let m = Member::new(4);

    assert_that!(m.id.as_str(), starts_with("member-"));
    assert_eq!(m.sn, 4);
    assert!(m.name.is_empty());
    assert!(m.phone.is_empty());
    assert_eq!(m.amount, 0.0);
    assert_eq!(m.savings, 0.0);
    assert_eq!(m.loan, 0.0);
    assert_eq!(m.interest, 0.0);
}

#[test]
fn test_member_ids_are_unique() {
    assert_ne!(Member::new(1).id, Member::new(1).id);
}

#[test]
fn test_member_field_from_str() {
    assert_eq!(MemberField::from_str("name").unwrap(), MemberField::Name);
    assert_eq!(MemberField::from_str("interest").unwrap(), MemberField::Interest);
    assert!(matches!(
        MemberField::from_str("sn"),
        Err(CoreError::InvalidField { .. })
    ));
    assert!(MemberField::from_str("id").is_err());
}

#[test]
fn test_member_field_is_numeric() {
    assert!(!MemberField::Name.is_numeric());
    assert!(!MemberField::Phone.is_numeric());
    for field in MemberField::NUMERIC {
        assert!(field.is_numeric(), "{field} should be numeric");
    }
}

#[test]
fn test_member_field_header() {
    assert_eq!(MemberField::Amount.header(), "Amount contributed");
    assert_eq!(MemberField::Loan.to_string(), "loan");
}

#[test]
fn given_member_when_serialize_then_uses_stored_field_names() {
    let m = member(7, "Zakia", "0748xxxx139", 6000.0);

    let value = serde_json::to_value(&m).unwrap();

    for key in [
        "id", "sn", "name", "phone", "amount", "savings", "loan", "interest",
    ] {
        assert!(value.get(key).is_some(), "missing key {key}");
    }
}

#[test]
fn given_integer_amounts_when_deserialize_then_ok() {
    let json = r#"{"id":"member-1","sn":1,"name":"A","phone":"","amount":1124,"savings":0,"loan":0,"interest":0}"#;

    let m: Member = serde_json::from_str(json).unwrap();

    assert_eq!(m.amount, 1124.0);
}

#[test]
fn given_valid_member_when_validate_stored_then_ok() {
    assert_that!(member(1, "Ann", "", 0.0).validate_stored(), ok(anything()));
}

#[test]
fn given_zero_serial_when_validate_stored_then_err() {
    let m = member(0, "Ann", "", 0.0);

    assert_that!(m.validate_stored(), err(anything()));
}

#[test]
fn given_negative_loan_when_validate_stored_then_err() {
    let m = member(1, "Ann", "", -5.0);

    assert_that!(m.validate_stored(), err(anything()));
}

#[test]
fn given_blank_id_when_validate_stored_then_err() {
    let mut m = member(1, "Ann", "", 0.0);
    m.id = "  ".into();

    assert_that!(m.validate_stored(), err(anything()));
}

#[test]
fn given_search_needle_when_matches_search_then_checks_name_and_phone() {
    let m = member(1, "Purity", "0707xxxx689", 0.0);

    assert!(m.matches_search("uri"));
    assert!(m.matches_search("689"));
    assert!(!m.matches_search("zak"));
    assert_that!(m.numeric(MemberField::Loan), eq(Some(0.0)));
}
