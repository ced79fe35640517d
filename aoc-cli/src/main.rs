//! AOC CLI - Command-line interface for running puzzle solvers

mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod output;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aoc_solver::RegistryBuilder;
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::Executor;
use inputs::InputSource;
use output::OutputFormatter;

fn main() {
    let args = Args::parse();
    let config = Config::from_args(args);

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .init();

    if let Err(e) = run(config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: Config) -> Result<(), CliError> {
    let registry = build_registry(&config.tags)?;
    log::debug!("{} solver(s) registered", registry.len());

    let executor = Executor::new(registry, &config);

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    if let InputSource::File(path) = executor.inputs()
        && work_items.len() != 1
    {
        return Err(CliError::Config(format!(
            "--input {} needs the filters to select exactly one solver, {} selected",
            path.display(),
            work_items.len()
        )));
    }

    let missing: Vec<_> = work_items
        .iter()
        .filter(|w| !executor.inputs().contains(w.year, w.day))
        .collect();
    if !missing.is_empty() && !config.quiet {
        println!("Missing {} input file(s):", missing.len());
        for w in &missing {
            println!("  - {}", executor.inputs().path_for(w.year, w.day).display());
        }
    }

    if !config.quiet {
        println!("Running {} solver(s)...", work_items.len());
    }

    let formatter = OutputFormatter::new(config.quiet);
    let mut results = Vec::new();
    executor.execute(&work_items, |result| {
        formatter.print_result(&result);
        results.push(result);
    });

    formatter.print_summary(&results);

    let failures = results.iter().filter(|r| r.answer.is_err()).count();
    if failures > 0 {
        return Err(CliError::Failures(failures, results.len()));
    }
    Ok(())
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<aoc_solver::SolverRegistry, CliError> {
    let builder = RegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
