//! Output formatting for solver results

use crate::executor::SolverResult;
use chrono::TimeDelta;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &SolverResult) {
        match (&result.answer, self.quiet) {
            (Ok(answer), true) => println!("{}", answer),
            (Ok(_), false) => println!("{}", format_full(result)),
            (Err(e), true) => eprintln!("Error: {}", e),
            (Err(e), false) => eprintln!("{}: Error - {}", prefix(result), e),
        }
    }

    /// Print a summary after all results
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }

        let total = results.len();
        let successes = results.iter().filter(|r| r.answer.is_ok()).count();
        let failures = total - successes;

        let total_parse_time: TimeDelta = results.iter().filter_map(|r| r.parse_duration).sum();
        let total_solve_time: TimeDelta = results
            .iter()
            .filter(|r| r.answer.is_ok())
            .map(|r| r.solve_duration)
            .sum();

        println!();
        println!("--- Summary ---");
        println!("Parts: {} solved, {} failed", successes, failures);
        println!("Total parse time: {}", format_duration(total_parse_time));
        println!("Total solve time: {}", format_duration(total_solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(self.start_time.elapsed())
        );
    }
}

fn prefix(result: &SolverResult) -> String {
    format!("{}/{:02} Part {}", result.year, result.day, result.part)
}

/// `2024/16 Part 1: 7036 (parse: 1.20ms, solve: 3.40ms)`
fn format_full(result: &SolverResult) -> String {
    let answer = result.answer.as_deref().unwrap_or("-");
    let parse_timing = result
        .parse_duration
        .map(|d| format!("parse: {}, ", format_duration(d)))
        .unwrap_or_default();
    format!(
        "{}: {} ({}solve: {})",
        prefix(result),
        answer,
        parse_timing,
        format_duration(result.solve_duration)
    )
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    match TimeDelta::from_std(d) {
        Ok(delta) => format_duration(delta),
        Err(_) => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn result(answer: &str, parse_micros: Option<i64>, solve_micros: i64) -> SolverResult {
        SolverResult {
            year: 2024,
            day: 16,
            part: 1,
            answer: Ok(answer.to_string()),
            parse_duration: parse_micros.map(TimeDelta::microseconds),
            solve_duration: TimeDelta::microseconds(solve_micros),
        }
    }

    #[test]
    fn test_duration_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1_500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2_250)), "2.25s");
        assert_eq!(format_duration(TimeDelta::microseconds(-20)), "-20µs");
        assert_eq!(
            format_std_duration(std::time::Duration::from_micros(42)),
            "42µs"
        );
    }

    #[test]
    fn test_full_line() {
        assert_eq!(
            format_full(&result("7036", Some(1_200), 3_400)),
            "2024/16 Part 1: 7036 (parse: 1.20ms, solve: 3.40ms)"
        );
        assert_eq!(
            format_full(&result("unreachable", None, 12)),
            "2024/16 Part 1: unreachable (solve: 12µs)"
        );
    }

    proptest! {
        #[test]
        fn prop_duration_always_has_unit(micros in 0i64..10_000_000_000) {
            let text = format_duration(TimeDelta::microseconds(micros));
            prop_assert!(text.ends_with("µs") || text.ends_with("ms") || text.ends_with('s'));
            prop_assert!(text.chars().next().is_some_and(|c| c.is_ascii_digit()));
        }
    }
}
