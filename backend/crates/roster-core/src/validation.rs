use crate::{CoreError, MemberField, Result as CoreErrorResult};

const LOCAL_MOBILE_LENGTH: usize = 10;
const GROUPED_PHONE_SHAPE: [usize; 3] = [3, 3, 4];

/// Field-level checks for roster edits and updates
pub struct MemberValidator;

impl MemberValidator {
    /// Name must contain something other than whitespace.
    #[track_caller]
    pub fn validate_name(name: &str) -> CoreErrorResult<()> {
        if name.trim().is_empty() {
            return Err(CoreError::validation("Member name cannot be empty."));
        }

        Ok(())
    }

    /// Empty is allowed. Otherwise `0XXXXXXXXX` or `XXX-XXX-XXXX`.
    #[track_caller]
    pub fn validate_phone(phone: &str) -> CoreErrorResult<()> {
        let phone = phone.trim();
        if phone.is_empty() || is_local_mobile(phone) || is_grouped(phone) {
            return Ok(());
        }

        Err(CoreError::validation(
            "Phone number must be in 0XXXXXXXXX or XXX-XXX-XXXX format, or empty.",
        ))
    }

    /// Coerce raw input for a numeric column. Blank input becomes the
    /// column default.
    #[track_caller]
    pub fn parse_numeric(field: MemberField, raw: &str) -> CoreErrorResult<f64> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(field.default_number());
        }

        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
            _ => Err(CoreError::invalid_number(field.header(), raw)),
        }
    }
}

fn is_local_mobile(phone: &str) -> bool {
    phone.len() == LOCAL_MOBILE_LENGTH
        && phone.starts_with('0')
        && phone.bytes().all(|b| b.is_ascii_digit())
}

fn is_grouped(phone: &str) -> bool {
    let groups: Vec<&str> = phone.split('-').collect();
    groups.len() == GROUPED_PHONE_SHAPE.len()
        && groups
            .iter()
            .zip(GROUPED_PHONE_SHAPE)
            .all(|(group, len)| group.len() == len && group.bytes().all(|b| b.is_ascii_digit()))
}
