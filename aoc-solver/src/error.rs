//! Error types for the solver library

use thiserror::Error;

/// Error type for turning raw input into shared data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input does not have the expected shape
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Something the puzzle requires is absent from the input
    #[error("Missing data: {0}")]
    MissingData(String),
}

/// Error type for answering a single part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The part number is within range but has no implementation
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The part number is zero or above the solver's part count
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// Solving ran but could not produce an answer
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error type for registry lookups and solver creation
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("Solver not found for year {0} day {1}")]
    NotFound(u16, u8),
    #[error("Year {0} day {1} is outside the supported range")]
    InvalidYearDay(u16, u8),
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// Error type for registration failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// A solver already occupies this year-day slot
    #[error("Duplicate solver registration for year {0} day {1}")]
    DuplicateSolver(u16, u8),
    /// Year or day falls outside the supported calendar
    #[error("Year {0} day {1} is outside the supported range")]
    InvalidYearDay(u16, u8),
}
