use crate::Notice;

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid number for {header}: {value:?} {location}")]
    InvalidNumber {
        header: &'static str,
        value: String,
        location: ErrorLocation,
    },

    #[error("Permission denied: cannot {action} members {location}")]
    PermissionDenied {
        action: &'static str,
        location: ErrorLocation,
    },

    #[error("Member not found: {id} {location}")]
    MemberNotFound { id: String, location: ErrorLocation },

    #[error("Invalid member field: {value} {location}")]
    InvalidField {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_number(header: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            header,
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn permission_denied(action: &'static str) -> Self {
        Self::PermissionDenied {
            action,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn member_not_found(id: impl Into<String>) -> Self {
        Self::MemberNotFound {
            id: id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_field(value: impl Into<String>) -> Self {
        Self::InvalidField {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// User-facing rejection notice. Every failure is shown as destructive.
    pub fn notice(&self) -> Notice {
        match self {
            Self::Validation { message, .. } => Notice::destructive("Validation Error", message),
            Self::InvalidNumber { header, .. } => Notice::destructive(
                "Invalid Input",
                format!("{header} must be a non-negative number. Reverting to previous value."),
            ),
            Self::PermissionDenied { action, .. } => Notice::destructive(
                "Permission Denied",
                format!("You do not have permission to {action} members."),
            ),
            Self::MemberNotFound { id, .. } => {
                Notice::destructive("Member Not Found", format!("No member with id {id}."))
            }
            Self::InvalidField { value, .. } => Notice::destructive(
                "Invalid Field",
                format!(
                    "{value} is not an editable field. Use name, phone, amount, savings, loan or interest."
                ),
            ),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
