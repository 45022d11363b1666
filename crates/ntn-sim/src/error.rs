//! Error types for the ntn-sim crate.

use std::fmt;

/// Result type for ntn-sim operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised when a simulation configuration is rejected.
///
/// Stepping never fails once a configuration has been validated, so this is
/// the only error class in the crate.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The scenario has no satellites.
    NoSatellites,
    /// A satellite's orbital radius is not a positive finite number.
    InvalidRadius {
        /// Index of the offending satellite.
        index: usize,
        /// The rejected radius.
        radius: f64,
    },
    /// A satellite's orbital period is zero or not finite.
    InvalidPeriod {
        /// Index of the offending satellite.
        index: usize,
        /// The rejected period.
        period: f64,
    },
    /// Per-satellite parameter lists disagree on the satellite count.
    LengthMismatch {
        /// Name of the list that disagrees.
        field: &'static str,
        /// Number of satellites declared.
        expected: usize,
        /// Number of entries actually provided.
        actual: usize,
    },
    /// A scalar parameter is out of its valid range.
    OutOfRange {
        /// Name of the parameter.
        field: &'static str,
        /// The rejected value.
        value: f64,
        /// Human-readable constraint.
        constraint: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSatellites => write!(f, "scenario must contain at least one satellite"),
            Self::InvalidRadius { index, radius } => {
                write!(
                    f,
                    "satellite {index} has invalid orbital radius {radius}: must be > 0"
                )
            }
            Self::InvalidPeriod { index, period } => {
                write!(
                    f,
                    "satellite {index} has invalid orbital period {period}: must be non-zero"
                )
            }
            Self::LengthMismatch {
                field,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{field} has {actual} entries but {expected} satellites were declared"
                )
            }
            Self::OutOfRange {
                field,
                value,
                constraint,
            } => {
                write!(f, "{field} = {value} is out of range: must be {constraint}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
