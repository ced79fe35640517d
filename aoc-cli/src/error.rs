//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;
use thiserror_ext::Arc as ArcDerive;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// At least one selected part did not produce an answer
    #[error("{0} of {1} part(s) failed")]
    Failures(usize, usize),
}

/// Failure to produce an answer for one part.
///
/// Wrapped in an `Arc` newtype so a single input or parse failure can be
/// reported against every part of the day.
#[derive(Error, Debug, ArcDerive)]
#[thiserror_ext(newtype(name = ArcExecutorError))]
pub enum ExecutorError {
    #[error("Input unavailable for {year}/{day:02}: {source}")]
    Input {
        year: u16,
        day: u8,
        #[source]
        source: InputError,
    },

    #[error("{0}")]
    Solver(#[from] aoc_solver::SolverError),
}

/// Errors reading puzzle input
#[derive(Error, Debug)]
pub enum InputError {
    #[error("no input file at {}", .0.display())]
    Missing(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
