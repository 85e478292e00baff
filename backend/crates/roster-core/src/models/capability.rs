use serde::{Deserialize, Serialize};

/// What the authentication service hands us about the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AuthenticatedUser {
    pub email: Option<String>,
    pub display_name: Option<String>,
}

impl AuthenticatedUser {
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            display_name: None,
        }
    }
}

/// Roster permissions of the current caller. Derived per session and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// No authenticated user
    #[default]
    Anonymous,
    /// Authenticated, not on the admin allow-list
    Member,
    /// Authenticated and on the admin allow-list
    Admin,
}

impl Capability {
    /// Email comparison is exact (case-sensitive).
    pub fn derive<S: AsRef<str>>(user: Option<&AuthenticatedUser>, admin_emails: &[S]) -> Self {
        let Some(user) = user else {
            return Self::Anonymous;
        };

        match user.email.as_deref() {
            Some(email) if admin_emails.iter().any(|admin| admin.as_ref() == email) => {
                Self::Admin
            }
            _ => Self::Member,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Self::Anonymous)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Anonymous => "anonymous",
            Self::Member => "member",
            Self::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
