//! Member entity - one row of the contributions roster.

use crate::{CoreError, MemberField, Result as CoreErrorResult};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A roster entry. Field names match the persisted JSON layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Opaque identifier, unique within a roster for its whole lifetime
    pub id: String,
    /// Display ordering only; may collide after concurrent adds
    pub sn: u32,
    pub name: String,
    pub phone: String,
    /// Amount contributed
    pub amount: f64,
    pub savings: f64,
    pub loan: f64,
    pub interest: f64,
}

impl Member {
    /// Create a blank member with a fresh identifier.
    pub fn new(sn: u32) -> Self {
        Self {
            id: Self::generate_id(),
            sn,
            name: String::new(),
            phone: String::new(),
            amount: 0.0,
            savings: 0.0,
            loan: 0.0,
            interest: 0.0,
        }
    }

    pub fn generate_id() -> String {
        format!("member-{}", Uuid::new_v4())
    }

    pub fn has_outstanding_loan(&self) -> bool {
        self.loan > 0.0
    }

    /// `needle` must already be lowercased.
    pub fn matches_search(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.phone.to_lowercase().contains(needle)
    }

    pub fn numeric(&self, field: MemberField) -> Option<f64> {
        match field {
            MemberField::Amount => Some(self.amount),
            MemberField::Savings => Some(self.savings),
            MemberField::Loan => Some(self.loan),
            MemberField::Interest => Some(self.interest),
            MemberField::Name | MemberField::Phone => None,
        }
    }

    /// Return a copy with `field` replaced. Numeric fields take `number`,
    /// text fields take `text`.
    pub(crate) fn with_field(&self, field: MemberField, text: &str, number: f64) -> Self {
        let mut updated = self.clone();
        match field {
            MemberField::Name => updated.name = text.to_string(),
            MemberField::Phone => updated.phone = text.to_string(),
            MemberField::Amount => updated.amount = number,
            MemberField::Savings => updated.savings = number,
            MemberField::Loan => updated.loan = number,
            MemberField::Interest => updated.interest = number,
        }
        updated
    }

    /// Structural checks applied to records read back from storage.
    #[track_caller]
    pub fn validate_stored(&self) -> CoreErrorResult<()> {
        if self.id.trim().is_empty() {
            return Err(CoreError::validation("id cannot be empty"));
        }

        if self.sn == 0 {
            return Err(CoreError::validation(format!(
                "sn must be positive (member {})",
                self.id
            )));
        }

        for field in MemberField::NUMERIC {
            let value = self.numeric(field).unwrap_or_default();
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::validation(format!(
                    "{} must be a non-negative number (member {}, got {value})",
                    field.as_str(),
                    self.id
                )));
            }
        }

        Ok(())
    }
}
