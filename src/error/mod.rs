use std::path::PathBuf;
use thiserror::Error;

pub mod codes;

pub use codes::{describe_error_code, ErrorCode};

/// Broad classification of a decoding failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatCategory {
    /// The payload is not syntactically valid
    Syntax,
    /// The payload is well formed but a field has the wrong type
    Data,
    /// The payload ended before a complete value was read
    Eof,
}

/// An event payload that could not be structurally decoded.
///
/// Keeps the decoder's position so callers can report where the payload
/// went wrong.
#[derive(Error, Debug)]
#[error("{inner}")]
pub struct FormatError {
    #[source]
    inner: serde_json::Error,
}

impl FormatError {
    /// Line of the payload at which decoding failed (1-based)
    pub fn line(&self) -> usize {
        self.inner.line()
    }

    /// Column of the payload at which decoding failed (1-based)
    pub fn column(&self) -> usize {
        self.inner.column()
    }

    /// Classify the failure
    pub fn category(&self) -> FormatCategory {
        use serde_json::error::Category;

        match self.inner.classify() {
            Category::Data => FormatCategory::Data,
            Category::Eof => FormatCategory::Eof,
            // Decoding from an in-memory slice never produces Io
            Category::Syntax | Category::Io => FormatCategory::Syntax,
        }
    }
}

impl From<serde_json::Error> for FormatError {
    fn from(inner: serde_json::Error) -> Self {
        Self { inner }
    }
}

/// An event payload that decoded but broke a semantic rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct InvalidInputError {
    message: String,
}

impl InvalidInputError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn null_payload() -> Self {
        Self::new("payload is null")
    }

    pub fn missing_field(field: &str) -> Self {
        Self::new(format!("missing required field '{field}'"))
    }

    pub fn empty_action() -> Self {
        Self::new("action must not be empty")
    }

    pub fn action_too_long(len: usize, max: usize) -> Self {
        Self::new(format!("action is {len} characters long, maximum is {max}"))
    }

    pub fn negative_time(time: f64) -> Self {
        Self::new(format!("time must not be negative, got {time}"))
    }

    pub fn sum_overflow(time: f64) -> Self {
        Self::new(format!("time {time} would overflow the running total"))
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Rejection returned by [`crate::stats::Accumulator::record`].
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("malformed event payload: {0}")]
    Format(#[from] FormatError),

    #[error("invalid event: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl RecordError {
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Format(_) => ErrorCode::INPUT_FORMAT,
            Self::InvalidInput(_) => ErrorCode::INPUT_INVALID,
        }
    }
}

impl From<serde_json::Error> for RecordError {
    fn from(err: serde_json::Error) -> Self {
        Self::Format(FormatError::from(err))
    }
}

/// Configuration loading and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for '{field}': {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                ErrorCode::CONFIG_NOT_FOUND
            }
            Self::Io { .. } => ErrorCode::CONFIG_GENERIC,
            Self::Parse(_) => ErrorCode::CONFIG_PARSE_ERROR,
            Self::Invalid { .. } => ErrorCode::CONFIG_INVALID_VALUE,
        }
    }
}

/// Errors raised while parsing or replaying a scenario script
#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("failed to read scenario script: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to write scenario script: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid generator settings: {0}")]
    InvalidSettings(String),

    #[error("row {row}: expected 3 fields, found {found}")]
    MalformedRow { row: usize, found: usize },

    #[error("row {row}: unknown command '{command}'")]
    UnknownCommand { row: usize, command: String },

    #[error("row {row}: invalid value '{value}'")]
    InvalidValue { row: usize, value: String },

    #[error("row {row}: {source}")]
    Rejected {
        row: usize,
        #[source]
        source: RecordError,
    },

    #[error("scenario worker task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl ScenarioError {
    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Csv(_) | Self::MalformedRow { .. } | Self::InvalidValue { .. } => {
                ErrorCode::SCENARIO_INVALID_SYNTAX
            }
            Self::Io(_) | Self::InvalidSettings(_) => ErrorCode::SCENARIO_GENERIC,
            Self::UnknownCommand { .. } => ErrorCode::SCENARIO_UNKNOWN_COMMAND,
            Self::Rejected { .. } => ErrorCode::SCENARIO_EVENT_REJECTED,
            Self::Join(_) => ErrorCode::SCENARIO_TASK_FAILED,
        }
    }
}
