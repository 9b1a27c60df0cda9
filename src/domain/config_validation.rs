//! Schedule configuration validation.
//!
//! Validates the `[schedule]` section before any window is produced.

use crate::domain::error::{DatetimeError, TradeclockError};
use crate::domain::interval::IntervalSpec;
use crate::domain::ops::{is_after, to_utc};
use crate::ports::config_port::ConfigPort;
use std::path::PathBuf;

const SECTION: &str = "schedule";

/// A validated `[schedule]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleConfig {
    pub start: String,
    pub end: String,
    pub interval: String,
    pub output: Option<PathBuf>,
}

pub fn validate_schedule_config(config: &dyn ConfigPort) -> Result<ScheduleConfig, TradeclockError> {
    let start = validate_timestamp(config, "start")?;
    let end = validate_timestamp(config, "end")?;
    let interval = validate_interval(config)?;

    if is_after(&start, &end)? {
        return Err(invalid("start", "start must not be after end".to_string()));
    }

    Ok(ScheduleConfig {
        start,
        end,
        interval,
        output: config.get_string(SECTION, "output").map(PathBuf::from),
    })
}

fn require(config: &dyn ConfigPort, key: &str) -> Result<String, TradeclockError> {
    config
        .get_string(SECTION, key)
        .ok_or_else(|| TradeclockError::ConfigMissing {
            section: SECTION.to_string(),
            key: key.to_string(),
        })
}

fn validate_timestamp(config: &dyn ConfigPort, key: &str) -> Result<String, TradeclockError> {
    let value = require(config, key)?;
    to_utc(&value).map_err(|e| invalid(key, e.to_string()))?;
    Ok(value)
}

fn validate_interval(config: &dyn ConfigPort) -> Result<String, TradeclockError> {
    let value = require(config, "interval")?;
    match IntervalSpec::lookup(&value) {
        Ok(_) => Ok(value),
        Err(DatetimeError::UnsupportedInterval(token)) => Err(invalid(
            "interval",
            format!("unsupported interval '{token}'"),
        )),
        Err(e) => Err(e.into()),
    }
}

fn invalid(key: &str, reason: String) -> TradeclockError {
    TradeclockError::ConfigInvalid {
        section: SECTION.to_string(),
        key: key.to_string(),
        reason,
    }
}
