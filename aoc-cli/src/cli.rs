//! CLI argument parsing using clap

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Day-numbered puzzle solver runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run puzzle solvers against local input files", version)]
pub struct Args {
    /// Year to run (runs all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated, all must match)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding inputs named `{year}_day{day:02}.txt`
    #[arg(long, default_value = "~/.cache/aoc_solver")]
    pub input_dir: PathBuf,

    /// Read this file instead of the input directory; the filters must
    /// then select exactly one solver
    #[arg(short, long, conflicts_with = "input_dir")]
    pub input: Option<PathBuf>,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_filters() {
        let args = Args::try_parse_from([
            "aoc", "-y", "2024", "-d", "16", "-p", "2", "-t", "grid,dijkstra", "-vv",
        ])
        .unwrap();
        assert_eq!(args.year, Some(2024));
        assert_eq!(args.day, Some(16));
        assert_eq!(args.part, Some(2));
        assert_eq!(args.tags, vec!["grid", "dijkstra"]);
        assert_eq!(args.verbose, 2);
        assert!(args.input.is_none());
    }

    #[test]
    fn test_out_of_range_day_rejected() {
        assert!(Args::try_parse_from(["aoc", "--day", "26"]).is_err());
        assert!(Args::try_parse_from(["aoc", "--part", "3"]).is_err());
    }
}
