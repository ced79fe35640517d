//! Parsing and solving traits

use crate::error::{ParseError, SolveError};

/// Turns raw puzzle input into the data every part works against.
///
/// `SharedData` may borrow from the input (`&'a str`, slices of lines) or own
/// a freshly built structure. Parts get it by `&mut`, so it is also the place
/// to cache an expensive computation that several parts read.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Walls;
///
/// impl AocParser for Walls {
///     type SharedData<'a> = Vec<&'a str>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         let rows: Vec<&str> = input.lines().collect();
///         if rows.is_empty() {
///             return Err(ParseError::MissingData("no rows".into()));
///         }
///         Ok(rows)
///     }
/// }
///
/// assert_eq!(Walls::parse("#.#\n###").unwrap().len(), 2);
/// ```
pub trait AocParser {
    type SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Answers part `N` of a puzzle.
///
/// The part number is a const generic so that `#[derive(AocSolver)]` can
/// check at compile time that every declared part has an implementation.
pub trait PartSolver<const N: u8>: AocParser {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A complete solver: parsing plus runtime dispatch over its parts.
///
/// Usually derived with `#[derive(AocSolver)]`, which forwards
/// `solve_part(shared, n)` to `<Self as PartSolver<n>>::solve(shared)`.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct CountHashes;
///
/// impl AocParser for CountHashes {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input)
///     }
/// }
///
/// impl Solver for CountHashes {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.matches('#').count().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut shared = CountHashes::parse("#.#").unwrap();
/// assert_eq!(CountHashes::solve_part(&mut shared, 1).unwrap(), "2");
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver answers
    const PARTS: u8;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

pub trait SolverExt: Solver {
    /// Like [`Solver::solve_part`], but rejects part 0 and parts above
    /// [`Solver::PARTS`] with [`SolveError::PartOutOfRange`].
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
