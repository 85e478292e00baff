use crate::{AddMemberPolicy, ConfigError, ConfigErrorResult, DEFAULT_ADMIN_EMAILS};

use serde::Deserialize;

/// Who counts as an administrator, and who may add members.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AccessConfig {
    /// Exact (case-sensitive) email addresses granted admin rights
    pub admin_emails: Vec<String>,
    pub add_member_policy: AddMemberPolicy,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            admin_emails: DEFAULT_ADMIN_EMAILS.iter().map(|e| e.to_string()).collect(),
            add_member_policy: AddMemberPolicy::default(),
        }
    }
}

impl AccessConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for email in &self.admin_emails {
            if email.trim() != email.as_str() || !email.contains('@') {
                return Err(ConfigError::access(format!(
                    "access.admin_emails contains an invalid address: {email:?}"
                )));
            }
        }

        Ok(())
    }
}
