use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("University not found: {id}")]
    NotFound { id: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Duplicate university id in catalog: {id}")]
    DuplicateIdError { id: String },

    #[error("Unsupported upload: {reason}")]
    UnsupportedUploadError { reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lookup,
    Input,
    Configuration,
    Catalog,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl MatchError {
    pub fn validation(field: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        MatchError::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            MatchError::NotFound { .. } => ErrorCategory::Lookup,
            MatchError::ValidationError { .. } | MatchError::UnsupportedUploadError { .. } => {
                ErrorCategory::Input
            }
            MatchError::MissingConfigError { .. } | MatchError::ConfigValidationError { .. } => {
                ErrorCategory::Configuration
            }
            MatchError::DuplicateIdError { .. } => ErrorCategory::Catalog,
            MatchError::IoError(_)
            | MatchError::SerializationError(_)
            | MatchError::CsvError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 查無資料不是致命錯誤
            MatchError::NotFound { .. } => ErrorSeverity::Low,
            MatchError::ValidationError { .. } | MatchError::UnsupportedUploadError { .. } => {
                ErrorSeverity::Medium
            }
            MatchError::MissingConfigError { .. }
            | MatchError::ConfigValidationError { .. }
            | MatchError::DuplicateIdError { .. } => ErrorSeverity::High,
            MatchError::IoError(_)
            | MatchError::SerializationError(_)
            | MatchError::CsvError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            MatchError::NotFound { .. } => {
                "Check the university id; use `uniquest match` to list available ids".to_string()
            }
            MatchError::ValidationError { field, .. } => {
                format!("Correct the value of '{}' and try again", field)
            }
            MatchError::MissingConfigError { field } => {
                format!("Add '{}' to the configuration file or pass it as a flag", field)
            }
            MatchError::ConfigValidationError { .. } => {
                "Make sure the configuration file is valid TOML".to_string()
            }
            MatchError::DuplicateIdError { .. } => {
                "Every university in the catalog file needs a unique id".to_string()
            }
            MatchError::UnsupportedUploadError { .. } => {
                "Upload a PDF or Word document smaller than 10MB".to_string()
            }
            MatchError::IoError(_) => "Check that the file exists and is readable".to_string(),
            MatchError::SerializationError(_) => {
                "Check that the catalog file is a JSON array of universities".to_string()
            }
            MatchError::CsvError(_) => "Retry with a different output format".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MatchError::NotFound { id } => format!("No university with id '{}'", id),
            MatchError::ValidationError { field, reason, .. } => {
                format!("Your profile has an invalid {}: {}", field, reason)
            }
            MatchError::UnsupportedUploadError { reason } => reason.clone(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_low_severity() {
        let err = MatchError::NotFound { id: "42".to_string() };
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.category(), ErrorCategory::Lookup);
        assert!(err.user_friendly_message().contains("42"));
    }

    #[test]
    fn test_validation_error_message() {
        let err = MatchError::validation("gpa", 4.5, "Value must be between 0 and 4");
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(
            err.to_string(),
            "Invalid value for gpa: '4.5' (Value must be between 0 and 4)"
        );
    }
}
