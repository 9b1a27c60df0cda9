//! tradeclock — timestamp normalization and trading interval arithmetic.
//!
//! Pure datetime logic lives in [`domain`], port traits in [`ports`],
//! concrete implementations in [`adapters`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;

pub use domain::error::DatetimeError;
pub use domain::ops::{add_interval, compare, is_after, to_utc};
