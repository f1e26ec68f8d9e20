use thiserror::Error;

#[derive(Error, Debug)]
pub enum TourError {
    #[error("No value present")]
    NoValuePresent,

    #[error("Stream builder already finalized")]
    BuilderFinalized,

    #[error("Unknown demo: {name}")]
    UnknownDemo { name: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Regex error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// 錯誤嚴重程度，決定程序退出碼
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl TourError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TourError::IoError(_) => ErrorSeverity::Critical,
            TourError::SerializationError(_) => ErrorSeverity::Medium,
            _ => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TourError::NoValuePresent => {
                "A demo read the value of an empty result".to_string()
            }
            TourError::BuilderFinalized => {
                "A demo added to a stream builder after it was built".to_string()
            }
            TourError::UnknownDemo { name } => format!("There is no demo called '{}'", name),
            TourError::IoError(e) => format!("Could not read or write a file: {}", e),
            TourError::CsvError(e) => format!("The roster CSV is malformed: {}", e),
            TourError::TomlError(e) => format!("The tour configuration is malformed: {}", e),
            TourError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TourError::NoValuePresent => "Check the result with is_some() before reading it",
            TourError::BuilderFinalized => "Create a new StreamBuilder for every stream",
            TourError::UnknownDemo { .. } => "Run with --list to see the available demos",
            TourError::IoError(_) => "Check that the file exists and is readable",
            TourError::CsvError(_) => "The roster needs a first_name,last_name,age header",
            TourError::TomlError(_)
            | TourError::ConfigError { .. }
            | TourError::InvalidConfigValueError { .. } => "Fix the configuration and run again",
            TourError::SerializationError(_) => "Try --format text",
            TourError::RegexError(_) => "Check the regular expression syntax",
        }
    }
}

pub type Result<T> = std::result::Result<T, TourError>;
