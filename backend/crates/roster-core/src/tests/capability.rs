use crate::{AuthenticatedUser, Capability};

const ADMINS: [&str; 2] = ["admin@photovault.com", "george@photovault.com"];

#[test]
fn given_no_user_when_derive_then_anonymous() {
    let capability = Capability::derive(None, &ADMINS);

    assert_eq!(capability, Capability::Anonymous);
    assert!(!capability.is_authenticated());
    assert!(!capability.is_admin());
}

#[test]
fn given_listed_email_when_derive_then_admin() {
    let user = AuthenticatedUser::with_email("george@photovault.com");

    let capability = Capability::derive(Some(&user), &ADMINS);

    assert_eq!(capability, Capability::Admin);
    assert!(capability.is_authenticated());
}

#[test]
fn given_unlisted_email_when_derive_then_member() {
    let user = AuthenticatedUser::with_email("lydia@example.com");

    assert_eq!(Capability::derive(Some(&user), &ADMINS), Capability::Member);
}

#[test]
fn given_listed_email_in_other_case_when_derive_then_member() {
    let user = AuthenticatedUser::with_email("Admin@PhotoVault.com");

    assert_eq!(Capability::derive(Some(&user), &ADMINS), Capability::Member);
}

#[test]
fn given_user_without_email_when_derive_then_member() {
    let user = AuthenticatedUser {
        email: None,
        display_name: Some("Guest".into()),
    };

    assert_eq!(Capability::derive(Some(&user), &ADMINS), Capability::Member);
}

#[test]
fn given_owned_allow_list_when_derive_then_matches() {
    let admins = vec![String::from("ops@example.com")];
    let user = AuthenticatedUser::with_email("ops@example.com");

    assert!(Capability::derive(Some(&user), &admins).is_admin());
}
