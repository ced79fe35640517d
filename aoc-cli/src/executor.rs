//! Sequential executor for running solvers

use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::inputs::InputSource;
use aoc_solver::{DynSolver, SolverRegistry};
use chrono::TimeDelta;
use log::{debug, warn};
use std::ops::RangeInclusive;

/// Result from a single part
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, ArcExecutorError>,
    /// Only set on the first part run for a day, so sums count each parse once
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// A solver selected to run, with the parts to run for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

pub struct Executor {
    registry: SolverRegistry,
    inputs: InputSource,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    pub fn new(registry: SolverRegistry, config: &Config) -> Self {
        Self {
            registry,
            inputs: config.inputs.clone(),
            year_filter: config.year_filter,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
        }
    }

    pub fn inputs(&self) -> &InputSource {
        &self.inputs
    }

    /// Registered solvers matching the filters, ordered by year then day
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on the part filter and the solver's part count
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0,
            None => 1..=max_parts,
        }
    }

    /// Run every work item in order, handing each part's result to `emit`
    /// as soon as it is available.
    pub fn execute<F>(&self, work_items: &[WorkItem], mut emit: F)
    where
        F: FnMut(SolverResult),
    {
        for work in work_items {
            self.run_work_item(work, &mut emit);
        }
    }

    fn run_work_item<F>(&self, work: &WorkItem, emit: &mut F)
    where
        F: FnMut(SolverResult),
    {
        let (year, day) = (work.year, work.day);

        let input = match self.inputs.read(year, day) {
            Ok(input) => input,
            Err(source) => {
                warn!("skipping {}/{:02}: {}", year, day, source);
                let error = ArcExecutorError::from(ExecutorError::Input { year, day, source });
                emit_failure(work, &error, emit);
                return;
            }
        };
        debug!("{}/{:02}: read {} bytes of input", year, day, input.len());

        let mut solver = match self.registry.create_solver(year, day, &input) {
            Ok(solver) => solver,
            Err(e) => {
                let error = ArcExecutorError::from(ExecutorError::Solver(e));
                emit_failure(work, &error, emit);
                return;
            }
        };

        let mut parse_duration = Some(solver.parse_duration());
        for part in work.parts.clone() {
            let mut result = solve_part(year, day, part, &mut *solver);
            result.parse_duration = parse_duration.take();
            emit(result);
        }
    }
}

/// Report the same failure against every part of a work item
fn emit_failure<F>(work: &WorkItem, error: &ArcExecutorError, emit: &mut F)
where
    F: FnMut(SolverResult),
{
    for part in work.parts.clone() {
        emit(SolverResult {
            year: work.year,
            day: work.day,
            part,
            answer: Err(error.clone()),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        });
    }
}

fn solve_part(year: u16, day: u8, part: u8, solver: &mut dyn DynSolver) -> SolverResult {
    match solver.solve(part) {
        Ok(solved) => SolverResult {
            year,
            day,
            part,
            solve_duration: solved.duration(),
            answer: Ok(solved.answer),
            parse_duration: None,
        },
        Err(e) => SolverResult {
            year,
            day,
            part,
            answer: Err(ExecutorError::Solver(e.into()).into()),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::RegistryBuilder;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const MAZE: &str = "#######\n#.....#\n#.###.#\n#S###E#\n#.###.#\n#.....#\n#######\n";

    fn config(inputs: InputSource, part_filter: Option<u8>) -> Config {
        Config {
            year_filter: Some(2024),
            day_filter: Some(16),
            part_filter,
            tags: Vec::new(),
            inputs,
            quiet: true,
            log_level: log::LevelFilter::Warn,
        }
    }

    fn registry() -> SolverRegistry {
        RegistryBuilder::new()
            .register_solver_plugins(|plugin| plugin.year == 2024 && plugin.day == 16)
            .unwrap()
            .build()
    }

    fn run(executor: &Executor) -> Vec<SolverResult> {
        let mut results = Vec::new();
        executor.execute(&executor.collect_work_items(), |r| results.push(r));
        results
    }

    #[test]
    fn test_work_items_respect_filters() {
        let executor = Executor::new(
            registry(),
            &config(InputSource::Directory(PathBuf::from("/nonexistent")), None),
        );
        assert_eq!(
            executor.collect_work_items(),
            vec![WorkItem {
                year: 2024,
                day: 16,
                parts: 1..=2
            }]
        );

        let executor = Executor::new(
            registry(),
            &config(InputSource::Directory(PathBuf::from("/nonexistent")), Some(2)),
        );
        assert_eq!(executor.collect_work_items()[0].parts, 2..=2);
    }

    #[test]
    fn test_solves_maze_from_directory() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("2024_day16.txt"), MAZE).unwrap();
        let executor = Executor::new(
            registry(),
            &config(InputSource::Directory(temp.path().to_path_buf()), None),
        );

        let results = run(&executor);
        let answers: Vec<(u8, String)> = results
            .iter()
            .map(|r| (r.part, r.answer.as_ref().unwrap().clone()))
            .collect();
        assert_eq!(answers, vec![(1, "3008".to_string()), (2, "16".to_string())]);
        assert!(results[0].parse_duration.is_some());
        assert!(results[1].parse_duration.is_none());
    }

    #[test]
    fn test_missing_input_fails_every_part() {
        let temp = TempDir::new().unwrap();
        let executor = Executor::new(
            registry(),
            &config(InputSource::Directory(temp.path().to_path_buf()), None),
        );

        let results = run(&executor);
        assert_eq!(results.len(), 2);
        for result in &results {
            let error = result.answer.as_ref().unwrap_err();
            assert!(matches!(error.inner(), ExecutorError::Input { year: 2024, day: 16, .. }));
        }
    }

    #[test]
    fn test_malformed_input_reports_parse_error() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("maze.txt");
        fs::write(&file, "#####\n#S..#\n#####\n").unwrap();
        let executor = Executor::new(registry(), &config(InputSource::File(file), Some(1)));

        let results = run(&executor);
        assert_eq!(results.len(), 1);
        let error = results[0].answer.as_ref().unwrap_err();
        assert!(matches!(
            error.inner(),
            ExecutorError::Solver(aoc_solver::SolverError::ParseError(_))
        ));
    }
}
