//! Output formatting for solver results

use crate::executor::SolverResult;
use aoc_solver::FactoryInfo;
use chrono::TimeDelta;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &SolverResult) {
        if self.quiet {
            self.print_quiet(result);
        } else {
            self.print_full(result);
        }
    }

    /// Print in quiet mode (just the answer)
    fn print_quiet(&self, result: &SolverResult) {
        match &result.answer {
            Ok(answer) => println!("{}", answer),
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    /// Print full output with timing
    fn print_full(&self, result: &SolverResult) {
        match &result.answer {
            Ok(_) => println!("{}", format_full(result)),
            Err(_) => eprintln!("{}", format_full(result)),
        }
    }

    /// Print the registered solvers, one line per year/day
    pub fn print_list<I>(&self, infos: I)
    where
        I: IntoIterator<Item = FactoryInfo>,
    {
        let mut count = 0;
        for info in infos {
            println!("{}", format_info(&info));
            count += 1;
        }
        if count == 0 {
            eprintln!("Warning: no solvers registered");
        } else if !self.quiet {
            println!();
            println!("{} solver(s) registered", count);
        }
    }

    /// Print a summary after all results
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }
        println!();
        for line in summary_lines(results, self.start_time.elapsed()) {
            println!("{}", line);
        }
    }
}

/// `YYYY/DD Part N: answer (parse: .., solve: ..)`, or the error for a failed part
fn format_full(result: &SolverResult) -> String {
    let prefix = format!("{}/{:02} Part {}", result.year, result.day, result.part);

    match &result.answer {
        Ok(answer) => {
            let parse_timing = result
                .parse_duration
                .map(|d| format!("parse: {}, ", format_duration(d)))
                .unwrap_or_default();
            format!(
                "{}: {} ({}solve: {})",
                prefix,
                answer,
                parse_timing,
                format_duration(result.solve_duration)
            )
        }
        Err(e) => format!("{}: Error - {}", prefix, e),
    }
}

fn format_info(info: &FactoryInfo) -> String {
    let mut line = format!(
        "{}/{:02} ({} part{})",
        info.year,
        info.day,
        info.parts,
        if info.parts == 1 { "" } else { "s" }
    );
    if !info.tags.is_empty() {
        line.push_str(&format!(" [{}]", info.tags.join(", ")));
    }
    line
}

fn summary_lines(results: &[SolverResult], elapsed: std::time::Duration) -> Vec<String> {
    let total = results.len();
    let successes = results.iter().filter(|r| r.answer.is_ok()).count();
    let failures = total - successes;

    let total_parse_time: TimeDelta = results.iter().filter_map(|r| r.parse_duration).sum();
    let total_solve_time: TimeDelta = results
        .iter()
        .filter(|r| r.answer.is_ok())
        .map(|r| r.solve_duration)
        .sum();

    vec![
        "--- Summary ---".to_string(),
        format!("Parts: {} solved, {} failed", successes, failures),
        format!("Total parse time: {}", format_duration(total_parse_time)),
        format!("Total solve time: {}", format_duration(total_solve_time)),
        format!("Elapsed wall-clock time: {}", format_std_duration(elapsed)),
    ]
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
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}
