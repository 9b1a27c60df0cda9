//! Domain error types.

/// Errors raised by timestamp parsing and interval arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatetimeError {
    #[error("invalid datetime format '{input}': {reason}")]
    InvalidFormat { input: String, reason: String },

    #[error("unsupported interval format: {0}")]
    UnsupportedInterval(String),

    #[error("year {year} cannot be written as YYYY")]
    YearOutOfRange { year: i64 },
}

impl DatetimeError {
    pub(crate) fn invalid(input: &str, reason: impl Into<String>) -> Self {
        DatetimeError::InvalidFormat {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Top-level error type for tradeclock.
#[derive(Debug, thiserror::Error)]
pub enum TradeclockError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error(transparent)]
    Datetime(#[from] DatetimeError),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl TradeclockError {
    /// Process exit status for this error kind.
    pub fn exit_status(&self) -> u8 {
        match self {
            TradeclockError::Io(_) | TradeclockError::Csv(_) => 1,
            TradeclockError::ConfigParse { .. }
            | TradeclockError::ConfigMissing { .. }
            | TradeclockError::ConfigInvalid { .. } => 2,
            TradeclockError::Datetime(DatetimeError::UnsupportedInterval(_)) => 4,
            TradeclockError::Datetime(_) => 3,
        }
    }
}

impl From<&TradeclockError> for std::process::ExitCode {
    fn from(err: &TradeclockError) -> Self {
        std::process::ExitCode::from(err.exit_status())
    }
}
