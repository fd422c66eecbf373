use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Cannot divide by zero")]
    DivisionByZero,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Arithmetic,
    Io,
    Data,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code used by the binaries. Never zero.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl DemoError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DemoError::DivisionByZero => ErrorCategory::Arithmetic,
            DemoError::IoError(_) => ErrorCategory::Io,
            DemoError::CsvError(_)
            | DemoError::SerializationError(_)
            | DemoError::ProcessingError { .. } => ErrorCategory::Data,
            DemoError::ConfigError { .. }
            | DemoError::ConfigValidationError { .. }
            | DemoError::InvalidConfigValueError { .. }
            | DemoError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DemoError::IoError(_) => ErrorSeverity::Critical,
            DemoError::CsvError(_) | DemoError::ProcessingError { .. } => ErrorSeverity::Medium,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Arithmetic => "Use a non-zero divisor",
            ErrorCategory::Io => "Check that the file exists and is readable",
            ErrorCategory::Data => "Check that every data value is a plain number",
            ErrorCategory::Configuration => {
                "Fix the configuration file or command-line arguments and retry"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DemoError::DivisionByZero => "Division by zero is not allowed".to_string(),
            DemoError::IoError(e) => format!("Could not access a file: {}", e),
            DemoError::CsvError(e) => format!("Could not read the CSV data: {}", e),
            DemoError::MissingConfigError { field } => {
                format!("The setting '{}' is required", field)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
