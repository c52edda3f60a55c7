use std::num::ParseIntError;
use thiserror::Error;

// =============================================================================
// Error taxonomy shared by every lesson
// =============================================================================

#[derive(Error, Debug)]
pub enum LessonError {
    #[error("No variant registered under '{0}'")]
    MissingHandle(String),

    #[error("Invalid {field}! Must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{operation} amount must be positive (got {amount})")]
    InvalidAmount { operation: &'static str, amount: f64 },

    #[error("Initial balance must be finite and not negative (got {0})")]
    InvalidBalance(f64),

    #[error("Invalid withdrawal amount! Requested {requested}, balance is {balance}")]
    InsufficientFunds { requested: f64, balance: f64 },

    #[error("Expected a whole number, got '{input}': {source}")]
    Parse {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Input ended before {0} was read")]
    UnexpectedEof(&'static str),

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to load lesson config: {0}")]
    Config(String),
}

impl LessonError {
    pub fn missing_handle(name: impl Into<String>) -> Self {
        Self::MissingHandle(name.into())
    }

    pub fn out_of_range(field: &'static str, value: f64, min: f64, max: f64) -> Self {
        Self::OutOfRange {
            field,
            value,
            min,
            max,
        }
    }

    /// True for rejections that leave state untouched and let the lesson carry on.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::OutOfRange { .. }
                | Self::InvalidAmount { .. }
                | Self::InvalidBalance(_)
                | Self::InsufficientFunds { .. }
        )
    }
}

impl From<toml::de::Error> for LessonError {
    fn from(err: toml::de::Error) -> Self {
        LessonError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = LessonError::out_of_range("GPA", 5.0, 0.0, 4.0);
        assert_eq!(err.to_string(), "Invalid GPA! Must be between 0 and 4 (got 5)");
        assert!(err.is_rejection());
    }

    #[test]
    fn test_missing_handle_is_not_a_rejection() {
        let err = LessonError::missing_handle("Ducati");
        assert_eq!(err.to_string(), "No variant registered under 'Ducati'");
        assert!(!err.is_rejection());
    }

    #[test]
    fn test_parse_error_keeps_source() {
        let source = "abc".parse::<i64>().unwrap_err();
        let err = LessonError::Parse {
            input: "abc".into(),
            source,
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("Expected a whole number, got 'abc'"));
    }
}
