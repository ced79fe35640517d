//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::inputs::InputSource;
use log::LevelFilter;
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Every tag must be present on a solver for it to run
    pub tags: Vec<String>,
    pub inputs: InputSource,
    pub quiet: bool,
    /// Default log level when RUST_LOG is unset
    pub log_level: LevelFilter,
}

impl Config {
    pub fn from_args(args: Args) -> Self {
        let inputs = match args.input {
            Some(file) => InputSource::File(expand_tilde(&file)),
            None => InputSource::Directory(expand_tilde(&args.input_dir)),
        };

        Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            inputs,
            quiet: args.quiet,
            log_level: log_level(args.verbose),
        }
    }
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_expand_tilde() {
        let plain = PathBuf::from("/var/inputs");
        assert_eq!(expand_tilde(&plain), plain);

        let relative = PathBuf::from("inputs/~");
        assert_eq!(expand_tilde(&relative), relative);

        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~")), home);
            assert_eq!(
                expand_tilde(Path::new("~/.cache/aoc_solver")),
                home.join(".cache/aoc_solver")
            );
        }
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(log_level(0), LevelFilter::Warn);
        assert_eq!(log_level(1), LevelFilter::Info);
        assert_eq!(log_level(2), LevelFilter::Debug);
        assert_eq!(log_level(9), LevelFilter::Trace);
    }

    #[test]
    fn test_input_file_selects_file_source() {
        let args = Args::try_parse_from(["aoc", "--input", "/tmp/maze.txt"]).unwrap();
        let config = Config::from_args(args);
        assert!(matches!(
            config.inputs,
            InputSource::File(ref path) if path == Path::new("/tmp/maze.txt")
        ));
    }

    #[test]
    fn test_default_directory_source() {
        let args = Args::try_parse_from(["aoc", "--input-dir", "/srv/inputs", "-q"]).unwrap();
        let config = Config::from_args(args);
        assert!(config.quiet);
        assert!(matches!(
            config.inputs,
            InputSource::Directory(ref dir) if dir == Path::new("/srv/inputs")
        ));
    }
}
