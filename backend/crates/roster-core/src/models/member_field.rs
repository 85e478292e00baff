use crate::{CoreError, Result as CoreErrorResult};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Editable roster columns. `id` and `sn` are never editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberField {
    Name,
    Phone,
    Amount,
    Savings,
    Loan,
    Interest,
}

impl MemberField {
    pub const NUMERIC: [MemberField; 4] = [
        MemberField::Amount,
        MemberField::Savings,
        MemberField::Loan,
        MemberField::Interest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Amount => "amount",
            Self::Savings => "savings",
            Self::Loan => "loan",
            Self::Interest => "interest",
        }
    }

    /// Column header shown to users
    pub fn header(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Phone => "Phone",
            Self::Amount => "Amount contributed",
            Self::Savings => "Savings",
            Self::Loan => "Loan",
            Self::Interest => "Interest",
        }
    }

    /// Phone is text even though it looks numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Amount | Self::Savings | Self::Loan | Self::Interest
        )
    }

    /// Value used when a numeric cell is cleared.
    pub fn default_number(&self) -> f64 {
        0.0
    }
}

impl FromStr for MemberField {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "name" => Ok(Self::Name),
            "phone" => Ok(Self::Phone),
            "amount" => Ok(Self::Amount),
            "savings" => Ok(Self::Savings),
            "loan" => Ok(Self::Loan),
            "interest" => Ok(Self::Interest),
            _ => Err(CoreError::invalid_field(s)),
        }
    }
}

impl std::fmt::Display for MemberField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
