use crate::ConfigError;

use std::str::FromStr;

use serde::Deserialize;

/// Who may add roster members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AddMemberPolicy {
    #[default]
    AnyAuthenticated,
    AdminOnly,
}

impl AddMemberPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AnyAuthenticated => "any_authenticated",
            Self::AdminOnly => "admin_only",
        }
    }
}

impl FromStr for AddMemberPolicy {
    type Err = ConfigError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "any_authenticated" => Ok(Self::AnyAuthenticated),
            "admin_only" => Ok(Self::AdminOnly),
            _ => Err(ConfigError::access(format!(
                "access.add_member_policy must be any_authenticated or admin_only, got {s}"
            ))),
        }
    }
}
