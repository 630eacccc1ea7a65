//! Errors raised while configuring a function from its parameters.

use thiserror::Error;

/// Reasons a parameter list cannot describe a function.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidArgument {
    /// No parameters were supplied, or they contained only whitespace.
    #[error("No breakpoints supplied")]
    Empty,

    /// A breakpoint token is not of the form `x;y`.
    ///
    /// Examples: `"1"`, `"1;2;3"`, `"a;b"`
    #[error("Malformed breakpoint: '{0}'")]
    MalformedPoint(String),

    /// A breakpoint coordinate parsed to infinity or NaN.
    #[error("Breakpoint '{0}' has a non-finite coordinate")]
    NonFiniteCoordinate(String),

    /// Fewer than two distinct breakpoints remain.
    #[error("At least two distinct breakpoints are required, found {0}")]
    InsufficientPoints(usize),
}

/// Failure returned by `set`. The function keeps its previous state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FunctionError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),

    /// Breakpoint x-coordinates decrease somewhere in the sequence.
    #[error(
        "Breakpoints are not in ascending order: {previous} > {current} at index {index}"
    )]
    OrderViolation {
        index: usize,
        previous: f64,
        current: f64,
    },
}

impl FunctionError {
    /// True for the `InvalidArgument` family of failures.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, FunctionError::InvalidArgument(_))
    }
}
