use thiserror::Error;

/// Form validation failure for an entity DTO.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{0} cannot be negative")]
    Negative(&'static str),
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: String,
        max: String,
    },
    #[error("{0} is not a valid email address")]
    InvalidEmail(&'static str),
    #[error("{0} must be a whole number")]
    NotWholeNumber(&'static str),
}

pub fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(())
}

pub fn require_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value < 0.0 || value.is_nan() {
        return Err(ValidationError::Negative(field));
    }
    Ok(())
}

/// Loose shape check, the same one an `<input type="email">` applies.
pub fn require_email(field: &'static str, value: &str) -> Result<(), ValidationError> {
    require_text(field, value)?;
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') && !domain.starts_with('.') => Ok(()),
        _ => Err(ValidationError::InvalidEmail(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_required() {
        assert_eq!(require_text("Name", "  "), Err(ValidationError::Required("Name")));
        assert!(require_text("Name", "Paracetamol").is_ok());
    }

    #[test]
    fn negative_numbers_rejected() {
        assert_eq!(
            require_non_negative("Current Stock", -1.0),
            Err(ValidationError::Negative("Current Stock"))
        );
        assert!(require_non_negative("Current Stock", 0.0).is_ok());
    }

    #[test]
    fn email_shape() {
        assert!(require_email("Email", "john.doe@pharmaconnect.com").is_ok());
        assert_eq!(
            require_email("Email", "john.doe"),
            Err(ValidationError::InvalidEmail("Email"))
        );
        assert_eq!(
            require_email("Email", "@pharmaconnect.com"),
            Err(ValidationError::InvalidEmail("Email"))
        );
    }

    #[test]
    fn messages_read_like_form_hints() {
        assert_eq!(ValidationError::Required("SKU").to_string(), "SKU is required");
    }
}
