use thiserror::Error;

/// Reasons a modal form refuses to submit.
///
/// Forms treat these as a silent no-op; the variant only feeds a debug log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

/// Trim `value` and reject it when nothing is left.
pub fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Presence plus a minimal shape check (`local@domain`).
pub fn required_email(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let email = required(value, field)?;
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
        _ => Err(ValidationError::InvalidEmail(email)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_trims_value() {
        assert_eq!(required("  Acme  ", "name"), Ok("Acme".to_string()));
    }

    #[test]
    fn test_required_rejects_blank() {
        assert_eq!(
            required("   ", "title"),
            Err(ValidationError::MissingField("title"))
        );
    }

    #[test]
    fn test_required_email_accepts_simple_address() {
        assert_eq!(
            required_email("sarah@company.com", "email"),
            Ok("sarah@company.com".to_string())
        );
    }

    #[test]
    fn test_required_email_rejects_missing_at() {
        assert!(matches!(
            required_email("sarah.company.com", "email"),
            Err(ValidationError::InvalidEmail(_))
        ));
        assert!(matches!(
            required_email("@company.com", "email"),
            Err(ValidationError::InvalidEmail(_))
        ));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::MissingField("Approver email").to_string(),
            "Approver email is required"
        );
    }
}
