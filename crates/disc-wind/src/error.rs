//! Error types for building discs, rate tables and configurations.
//!
//! The removal step itself never fails: degenerate cells are handled by
//! value substitution. Errors only arise when the inputs are assembled.

use thiserror::Error;

/// Invalid disc layout.
#[derive(Debug, Error, PartialEq)]
pub enum DiscError {
    #[error("disc must contain at least one annulus")]
    NoAnnuli,

    #[error("{field} has {actual} entries, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("edge radii must be non-negative and strictly increasing (violated at index {index})")]
    NonMonotonicEdges { index: usize },

    #[error("{field}[{index}] = {value} must be finite and non-negative")]
    InvalidValue {
        field: &'static str,
        index: usize,
        value: f64,
    },
}

/// Invalid rate table.
#[derive(Debug, Error, PartialEq)]
pub enum TableError {
    #[error("{axis} axis needs at least two nodes, got {len}")]
    AxisTooShort { axis: &'static str, len: usize },

    #[error("{axis} axis must be positive and strictly increasing")]
    AxisNotIncreasing { axis: &'static str },

    #[error("rate grid holds {actual} values, expected {expected}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("rate at node {index} is {value}; rates must be positive and finite")]
    InvalidRate { index: usize, value: f64 },
}

/// Invalid photoevaporation configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Shorthand result for disc construction.
pub type DiscResult<T> = Result<T, DiscError>;

/// Shorthand result for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;
