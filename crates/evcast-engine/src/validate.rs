use std::fmt;

/// Outcome of parsing the horizon input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizonInput {
    /// Field is empty. Nothing entered yet: not an error, and no request
    /// may be issued for it.
    Unset,
    /// A usable horizon of at least one month.
    Months(u32),
}

/// Rejected horizon input (zero, negative, fractional, or non-numeric).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationError;

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "horizon must be a positive integer")
    }
}

impl std::error::Error for ValidationError {}

/// Parse the raw horizon field. Empty input is `Unset`, distinct from
/// invalid input; anything that is not an integer >= 1 is an error.
pub fn parse_horizon(raw: &str) -> Result<HorizonInput, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(HorizonInput::Unset);
    }

    match trimmed.parse::<u32>() {
        Ok(months) if months >= 1 => Ok(HorizonInput::Months(months)),
        _ => Err(ValidationError),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_integers() {
        assert_eq!(parse_horizon("1"), Ok(HorizonInput::Months(1)));
        assert_eq!(parse_horizon("12"), Ok(HorizonInput::Months(12)));
        assert_eq!(parse_horizon(" 36 "), Ok(HorizonInput::Months(36)));
    }

    #[test]
    fn empty_input_is_unset_not_an_error() {
        assert_eq!(parse_horizon(""), Ok(HorizonInput::Unset));
        assert_eq!(parse_horizon("   "), Ok(HorizonInput::Unset));
    }

    #[test]
    fn rejects_zero_and_negative() {
        assert_eq!(parse_horizon("0"), Err(ValidationError));
        assert_eq!(parse_horizon("-3"), Err(ValidationError));
    }

    #[test]
    fn rejects_fractional_and_non_numeric() {
        assert_eq!(parse_horizon("2.5"), Err(ValidationError));
        assert_eq!(parse_horizon("twelve"), Err(ValidationError));
        assert_eq!(parse_horizon("12mo"), Err(ValidationError));
    }

    #[test]
    fn error_message_names_the_constraint() {
        assert_eq!(
            ValidationError.to_string(),
            "horizon must be a positive integer"
        );
    }
}
