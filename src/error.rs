//! Error types for the simulation core.
//!
//! This module provides a unified error type [`SimError`] and a convenient
//! [`Result`] alias.

use thiserror::Error;

/// Errors surfaced by configuration, parameter tuning, and stepping.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SimError {
    /// A configuration point or tunable value failed range validation.
    #[error("invalid parameter `{name}` = {value}")]
    InvalidParameter { name: &'static str, value: f64 },
    /// A step produced a non-finite acceleration or state variable. The
    /// step was discarded; the state is as it was before the call.
    #[error("numeric instability at theta1 = {theta1}, theta2 = {theta2}; step discarded")]
    NumericInstability { theta1: f64, theta2: f64 },
}

/// Convenient Result type alias for simulation operations.
pub type Result<T> = std::result::Result<T, SimError>;
