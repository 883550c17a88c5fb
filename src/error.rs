/// Error types for taskmind
///
/// The parsing, recurrence and suggestion engines never fail. These errors
/// come from the edges: loading config, reading snapshots, CLI arguments.
/// Uses thiserror for ergonomic error handling.

use thiserror::Error;

/// Main error type for taskmind operations
#[derive(Error, Debug)]
pub enum TaskmindError {
    /// I/O errors (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Config file could not be parsed
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Date argument not in YYYY-MM-DD form
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Recurrence rule text that could not be understood
    #[error("Invalid recurrence rule: {0}")]
    InvalidRule(String),

    /// Snapshot file that does not describe an analysis context
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Result type alias for taskmind operations
pub type Result<T> = std::result::Result<T, TaskmindError>;

/// Convert TaskmindError to a user-friendly error message
impl TaskmindError {
    pub fn user_message(&self) -> String {
        match self {
            TaskmindError::Io(e) => {
                format!("File system error. Check permissions. Details: {}", e)
            }
            TaskmindError::Serialization(e) => {
                format!("Data format error: {}", e)
            }
            TaskmindError::ConfigParse(e) => {
                format!("Config file is not valid TOML: {}", e)
            }
            TaskmindError::Config(msg) => {
                format!("Configuration issue: {}", msg)
            }
            TaskmindError::InvalidDate(value) => {
                format!("'{}' is not a date. Use YYYY-MM-DD", value)
            }
            TaskmindError::InvalidRule(value) => {
                format!(
                    "'{}' is not a recurrence rule. Example: {{\"frequency\":\"weekly\",\"daysOfWeek\":[1,3]}}",
                    value
                )
            }
            TaskmindError::InvalidSnapshot(msg) => {
                format!("Snapshot could not be loaded: {}", msg)
            }
            TaskmindError::Generic(msg) => msg.clone(),
        }
    }
}
