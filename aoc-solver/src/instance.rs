//! Parsed solver instances and their type-erased interface

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Wall-clock interval covered by one parse or solve call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSpan {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeSpan {
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Run `f`, returning its output along with the interval it took.
    /// Failures carry no timing.
    fn measure<T, E>(f: impl FnOnce() -> Result<T, E>) -> Result<(T, Self), E> {
        let start = Utc::now();
        let value = f()?;
        Ok((
            value,
            Self {
                start,
                end: Utc::now(),
            },
        ))
    }
}

/// Answer for one part together with when it was computed
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub answer: String,
    pub span: TimeSpan,
}

impl SolveResult {
    pub fn duration(&self) -> TimeDelta {
        self.span.duration()
    }
}

/// Parsed input for one `(year, day)` puzzle, ready to answer its parts.
///
/// Parsing happens once in [`SolverInstance::new`]; every later
/// [`DynSolver::solve`] call reuses the same shared data, so work cached in
/// it by one part is visible to the next.
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parsed: TimeSpan,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let (shared, parsed) = TimeSpan::measure(|| S::parse(input))?;
        Ok(Self {
            year,
            day,
            shared,
            parsed,
        })
    }
}

/// Object-safe interface over any [`SolverInstance`].
///
/// # Example
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn report(mut solver: Box<dyn DynSolver + '_>) -> Result<(), aoc_solver::SolveError> {
///     for part in 1..=solver.parts() {
///         let result = solver.solve(part)?;
///         println!("part {}: {} ({})", part, result.answer, result.duration());
///     }
///     println!("parsed in {}", solver.parse_duration());
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Answer `part`, rejecting parts outside `1..=parts()`
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    /// When parsing began and ended
    fn parse_span(&self) -> TimeSpan;

    fn year(&self) -> u16;

    fn day(&self) -> u8;

    fn parts(&self) -> u8;

    fn parse_duration(&self) -> TimeDelta {
        self.parse_span().duration()
    }
}

impl<S: SolverExt> DynSolver for SolverInstance<'_, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let shared = &mut self.shared;
        let (answer, span) = TimeSpan::measure(|| S::solve_part_checked_range(shared, part))?;
        Ok(SolveResult { answer, span })
    }

    fn parse_span(&self) -> TimeSpan {
        self.parsed
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{AocParser, PartSolver};

    /// Part 1 counts lines, part 2 reports how many times a part ran
    struct LineCount;

    struct Counted {
        lines: usize,
        calls: usize,
    }

    impl AocParser for LineCount {
        type SharedData<'a> = Counted;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            if input.is_empty() {
                return Err(ParseError::MissingData("no lines".to_string()));
            }
            Ok(Counted {
                lines: input.lines().count(),
                calls: 0,
            })
        }
    }

    impl PartSolver<1> for LineCount {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            shared.calls += 1;
            Ok(shared.lines.to_string())
        }
    }

    impl PartSolver<2> for LineCount {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            shared.calls += 1;
            Ok(shared.calls.to_string())
        }
    }

    impl Solver for LineCount {
        const PARTS: u8 = 2;

        fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => <Self as PartSolver<1>>::solve(shared),
                2 => <Self as PartSolver<2>>::solve(shared),
                _ => Err(SolveError::PartNotImplemented(part)),
            }
        }
    }

    #[test]
    fn test_instance_reports_identity_and_timing() {
        let solver = SolverInstance::<LineCount>::new(2024, 16, "a\nb\nc").unwrap();
        assert_eq!((solver.year(), solver.day(), solver.parts()), (2024, 16, 2));

        let span = solver.parse_span();
        assert!(span.start <= span.end);
        assert_eq!(solver.parse_duration(), span.duration());
        assert!(solver.parse_duration() >= TimeDelta::zero());
    }

    #[test]
    fn test_parts_share_parsed_data() {
        let mut solver = SolverInstance::<LineCount>::new(2024, 16, "a\nb\nc").unwrap();
        let first = solver.solve(1).unwrap();
        assert_eq!(first.answer, "3");
        assert!(first.duration() >= TimeDelta::zero());
        assert_eq!(solver.solve(2).unwrap().answer, "2");
        assert_eq!(solver.solve(2).unwrap().answer, "3");
    }

    #[test]
    fn test_out_of_range_part_is_rejected() {
        let mut solver = SolverInstance::<LineCount>::new(2024, 16, "a").unwrap();
        assert!(matches!(solver.solve(0), Err(SolveError::PartOutOfRange(0))));
        assert!(matches!(solver.solve(3), Err(SolveError::PartOutOfRange(3))));
    }

    #[test]
    fn test_parse_failure_propagates() {
        assert!(matches!(
            SolverInstance::<LineCount>::new(2024, 16, ""),
            Err(ParseError::MissingData(_))
        ));
    }
}
