use crate::tests::{EnvGuard, setup_config_dir};
use crate::{AccessConfig, AddMemberPolicy, Config};

use std::str::FromStr;

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};
use serial_test::serial;

#[test]
fn given_default_access_config_when_validate_then_ok() {
    assert_that!(AccessConfig::default().validate(), ok(anything()));
}

#[test]
fn given_address_without_at_when_validate_then_error() {
    let access = AccessConfig {
        admin_emails: vec![String::from("admin")],
        ..AccessConfig::default()
    };

    let result = access.validate();

    assert_that!(result, err(anything()));
    assert_that!(
        result.unwrap_err().to_string(),
        contains_substring("admin_emails")
    );
}

#[test]
fn given_padded_address_when_validate_then_error() {
    let access = AccessConfig {
        admin_emails: vec![String::from(" admin@example.com")],
        ..AccessConfig::default()
    };

    assert_that!(access.validate(), err(anything()));
}

#[test]
fn given_empty_allow_list_when_validate_then_ok() {
    let access = AccessConfig {
        admin_emails: Vec::new(),
        ..AccessConfig::default()
    };

    assert_that!(access.validate(), ok(anything()));
}

#[test]
fn test_add_member_policy_from_str() {
    assert_eq!(
        AddMemberPolicy::from_str("admin_only").unwrap(),
        AddMemberPolicy::AdminOnly
    );
    assert_eq!(
        AddMemberPolicy::from_str("any_authenticated").unwrap(),
        AddMemberPolicy::AnyAuthenticated
    );
    assert!(AddMemberPolicy::from_str("Admin_Only").is_err());
}

#[test]
#[serial]
fn given_empty_admin_env_when_load_then_nobody_is_admin() {
    // Given
    let _env = setup_config_dir();
    let _admins = EnvGuard::set("ROSTER_ADMIN_EMAILS", "");

    // When
    let config = Config::load().unwrap();

    // Then
    assert!(config.access.admin_emails.is_empty());
}
