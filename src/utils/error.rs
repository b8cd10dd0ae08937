use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookwormsError {
    #[error("Roster file not found: {path}")]
    RosterNotFound { path: String },

    #[error("Malformed roster in {path}: {source}")]
    MalformedRoster {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Output,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BookwormsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BookwormsError::RosterNotFound { .. } | BookwormsError::MalformedRoster { .. } => {
                ErrorCategory::Input
            }
            BookwormsError::ConfigError { .. }
            | BookwormsError::MissingConfigError { .. }
            | BookwormsError::InvalidConfigValueError { .. }
            | BookwormsError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            BookwormsError::SerializationError(_) | BookwormsError::CsvError(_) => {
                ErrorCategory::Output
            }
            BookwormsError::IoError(_) | BookwormsError::ProcessingError { .. } => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            BookwormsError::RosterNotFound { .. } => ErrorSeverity::Medium,
            BookwormsError::ConfigError { .. }
            | BookwormsError::MissingConfigError { .. }
            | BookwormsError::InvalidConfigValueError { .. }
            | BookwormsError::ConfigValidationError { .. } => ErrorSeverity::High,
            BookwormsError::MalformedRoster { .. }
            | BookwormsError::IoError(_)
            | BookwormsError::SerializationError(_)
            | BookwormsError::CsvError(_)
            | BookwormsError::ProcessingError { .. } => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            BookwormsError::RosterNotFound { path } => {
                format!("Check that '{}' exists and the path is spelled correctly", path)
            }
            BookwormsError::MalformedRoster { .. } => {
                "The roster must be a JSON array of {\"name\", \"books\": [{\"author\", \"title\"}]} objects"
                    .to_string()
            }
            BookwormsError::IoError(_) => {
                "Check file permissions and available disk space".to_string()
            }
            BookwormsError::SerializationError(_) | BookwormsError::CsvError(_) => {
                "Try a different output format with --format".to_string()
            }
            BookwormsError::MissingConfigError { field } => {
                format!("Provide a value for '{}' on the command line or in the config file", field)
            }
            BookwormsError::InvalidConfigValueError { field, .. }
            | BookwormsError::ConfigValidationError { field, .. } => {
                format!("Fix the value of '{}' and run again", field)
            }
            BookwormsError::ConfigError { .. } => {
                "Check the configuration file syntax".to_string()
            }
            BookwormsError::ProcessingError { .. } => "Run again with --verbose for details".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BookwormsError::RosterNotFound { path } => format!("Cannot find roster file '{}'", path),
            BookwormsError::MalformedRoster { path, .. } => {
                format!("Roster file '{}' is not valid roster JSON", path)
            }
            BookwormsError::MissingConfigError { field } => format!("Missing required setting '{}'", field),
            BookwormsError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BookwormsError>;
