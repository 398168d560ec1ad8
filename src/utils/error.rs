use thiserror::Error;

#[derive(Error, Debug)]
pub enum MorseError {
    #[error("Invalid morse code for '{character}': {code:?} ({reason})")]
    InvalidCode {
        character: char,
        code: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    CodeTable,
    Configuration,
    Io,
    Export,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl MorseError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MorseError::InvalidCode { .. } => ErrorCategory::CodeTable,
            MorseError::ConfigValidationError { .. }
            | MorseError::InvalidConfigValueError { .. }
            | MorseError::MissingConfigError { .. } => ErrorCategory::Configuration,
            MorseError::IoError(_) => ErrorCategory::Io,
            MorseError::SerializationError(_) | MorseError::CsvError(_) => ErrorCategory::Export,
            MorseError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::CodeTable => ErrorSeverity::Critical,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Medium,
            ErrorCategory::Export | ErrorCategory::Processing => ErrorSeverity::High,
        }
    }

    /// Process exit status the binaries use for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            MorseError::InvalidCode { character, .. } => format!(
                "Fix the code for '{}' so that it only uses '.' and '-'",
                character
            ),
            MorseError::ConfigValidationError { field, .. }
            | MorseError::InvalidConfigValueError { field, .. } => {
                format!("Check the value of '{}' in your configuration", field)
            }
            MorseError::MissingConfigError { field } => {
                format!("Provide a value for '{}'", field)
            }
            MorseError::IoError(_) => {
                "Check that the paths exist and are readable/writable".to_string()
            }
            MorseError::SerializationError(_) | MorseError::CsvError(_) => {
                "Try a different output format or output path".to_string()
            }
            MorseError::ProcessingError { .. } => {
                "Re-run with --verbose for more details".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MorseError::InvalidCode { character, code, .. } => {
                format!("The code table entry for '{}' ({}) is not valid morse", character, code)
            }
            MorseError::ConfigValidationError { field, message } => {
                format!("Configuration problem in {}: {}", field, message)
            }
            MorseError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid {}: {}", value, field, reason)
            }
            MorseError::MissingConfigError { field } => format!("{} is required", field),
            MorseError::IoError(e) => format!("File access failed: {}", e),
            MorseError::SerializationError(e) => format!("Could not write JSON: {}", e),
            MorseError::CsvError(e) => format!("Could not write CSV: {}", e),
            MorseError::ProcessingError { message } => message.clone(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MorseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_table_errors_are_critical() {
        let err = MorseError::InvalidCode {
            character: 'A',
            code: ".x".to_string(),
            reason: "unexpected symbol 'x'".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::CodeTable);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.recovery_suggestion().contains("'A'"));
    }

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = MorseError::MissingConfigError {
            field: "message".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.user_friendly_message(), "message is required");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: MorseError = io.into();
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_exit_codes_follow_severity() {
        let bad_code = MorseError::InvalidCode {
            character: '%',
            code: "._.".to_string(),
            reason: "unexpected symbol '_'".to_string(),
        };
        assert_eq!(bad_code.exit_code(), 3);

        let bad_value = MorseError::InvalidConfigValueError {
            field: "formats".to_string(),
            value: "pdf".to_string(),
            reason: "Unsupported value".to_string(),
        };
        assert_eq!(bad_value.exit_code(), 1);
    }
}
