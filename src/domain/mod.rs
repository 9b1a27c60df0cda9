//! Core domain types and logic.

pub mod calendar;
pub mod civil;
pub mod timestamp;
pub mod interval;
pub mod ops;
pub mod schedule;
pub mod config_validation;
pub mod error;
