//! Solver framework for day-numbered puzzle collections
//!
//! Each puzzle is a batch computation from raw text to a handful of answers.
//! A solver declares how it parses its input into shared data and how each
//! part is answered from that data; the framework takes care of dispatching
//! part numbers, timing parse and solve phases and locating solvers by
//! `(year, day)`.
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, RegistryBuilder, SolveError};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Widths;
//!
//! impl AocParser for Widths {
//!     type SharedData<'a> = Vec<usize>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         Ok(input.lines().map(str::len).collect())
//!     }
//! }
//!
//! impl PartSolver<1> for Widths {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().max().copied().unwrap_or(0).to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Widths {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.len().to_string())
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register_solver::<Widths>(2024, 1)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2024, 1, "###\n#.#\n###").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "3");
//! assert_eq!(solver.solve(2).unwrap().answer, "3");
//! ```
//!
//! # Key Concepts
//!
//! - [`AocParser`] turns raw input into `SharedData`, the state every part
//!   works against. Parts receive it mutably, so a part may cache work that a
//!   later part reuses.
//! - [`PartSolver<N>`] answers part `N`. `#[derive(AocSolver)]` generates the
//!   [`Solver`] impl that routes a runtime part number to the right impl.
//! - [`DynSolver`] is the type-erased face of a parsed puzzle, produced by the
//!   [`SolverRegistry`].
//! - `#[derive(AutoRegisterSolver)]` with `#[aoc(year = .., day = .., tags = [..])]`
//!   submits a [`SolverPlugin`] so binaries can discover solvers by linking
//!   the crate that defines them.

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance, TimeSpan};
pub use registry::{
    FactoryInfo, RegisterableSolver, RegistryBuilder, SolverFactory, SolverPlugin,
    SolverRegistry, BASE_YEAR, DAYS_PER_YEAR, MAX_YEARS,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-exported for the code generated by `AutoRegisterSolver`
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
