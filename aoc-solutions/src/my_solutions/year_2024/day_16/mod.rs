//! Reindeer maze: cheapest route from `S` to `E` when stepping forward costs
//! 1 and turning 90 degrees costs 1000, and how many tiles lie on any of the
//! cheapest routes.

pub mod bucket_queue;
pub mod grid;
pub mod paths;
pub mod search;
pub mod state;

use anyhow::Context;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use grid::Grid;
use search::SearchOutcome;

/// Answer printed for both parts when no route reaches the finish
pub const UNREACHABLE: &str = "unreachable";

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 16, tags = ["grid", "dijkstra"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    grid: Grid,
    outcome: Option<SearchOutcome>,
}

impl SharedData {
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Search result, computed on first use and shared by both parts
    pub fn outcome(&mut self) -> &SearchOutcome {
        self.outcome.get_or_insert_with(|| search::search(&self.grid))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse(input)
            .context("malformed maze")
            .map(|grid| SharedData {
                grid,
                outcome: None,
            })
            .map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .outcome()
            .best_finish_distance()
            .map_or_else(|| UNREACHABLE.to_string(), |cost| cost.to_string()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let outcome = shared.outcome();
        if outcome.best_finish_distance().is_none() {
            return Ok(UNREACHABLE.to_string());
        }
        Ok(paths::optimal_cells(outcome).len().to_string())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    fn answers(input: &str) -> (String, String) {
        let mut shared = Solver::parse(input).unwrap();
        let part1 = Solver::solve_part(&mut shared, 1).unwrap();
        let part2 = Solver::solve_part(&mut shared, 2).unwrap();
        (part1, part2)
    }

    #[test]
    fn test_examples() {
        assert_eq!(answers(fixtures::EXAMPLE_ONE), ("7036".into(), "45".into()));
        assert_eq!(answers(fixtures::EXAMPLE_TWO), ("11048".into(), "64".into()));
    }

    #[test]
    fn test_single_turn() {
        assert_eq!(answers(fixtures::SINGLE_TURN), ("1006".into(), "7".into()));
    }

    #[test]
    fn test_symmetric_detour() {
        assert_eq!(answers(fixtures::SYMMETRIC_DETOUR), ("3008".into(), "16".into()));
    }

    #[test]
    fn test_unreachable_reported() {
        assert_eq!(
            answers(fixtures::WALLED_OFF),
            (UNREACHABLE.into(), UNREACHABLE.into())
        );
    }

    #[test]
    fn test_part_two_alone() {
        let mut shared = Solver::parse(fixtures::EXAMPLE_ONE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "45");
        assert!(shared.outcome.is_some());
    }

    #[test]
    fn test_malformed_grid_is_parse_error() {
        match Solver::parse("#####\n#S..#\n#####") {
            Err(ParseError::InvalidFormat(message)) => {
                assert_eq!(message, "malformed maze: no finish tile 'E' found");
            }
            other => panic!("expected InvalidFormat, got {:?}", other.map(|_| ())),
        }
    }
}
