//! Sequential executor for running solvers against local inputs

use crate::config::Config;
use crate::error::{CliError, InputError};
use crate::inputs::{self, InputStore};
use aoc_solver::{DynSolver, ParseError, SolverError, SolverRegistry};
use chrono::TimeDelta;
use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Result from a single part execution
#[derive(Debug)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, CliError>,
    /// Parse time, reported on the first part solved for a day
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Where puzzle inputs come from
enum InputSource {
    Directory(InputStore),
    File(PathBuf),
}

impl InputSource {
    fn read(&self, year: u16, day: u8) -> Result<String, InputError> {
        match self {
            InputSource::Directory(store) => store.get(year, day),
            InputSource::File(path) => inputs::read_input(path),
        }
    }
}

/// Runs every selected solver in (year, day) order, one part after another
pub struct Executor {
    registry: SolverRegistry,
    inputs: InputSource,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Self {
        let inputs = match &config.input_file {
            Some(path) => InputSource::File(path.clone()),
            None => InputSource::Directory(InputStore::new(config.input_dir.clone())),
        };

        Self {
            registry,
            inputs,
            year_filter: config.year_filter,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
        }
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .storage()
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

    /// Filter parts based on the part filter and solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0,
            None => 1..=max_parts,
        }
    }

    /// Execute the work items, handing each part's result to `on_result` as it completes
    pub fn execute<F>(&self, work_items: &[WorkItem], mut on_result: F) -> Result<(), CliError>
    where
        F: FnMut(SolverResult),
    {
        if matches!(self.inputs, InputSource::File(_)) && work_items.len() != 1 {
            return Err(CliError::Config(format!(
                "--input requires exactly one selected solver, found {}",
                work_items.len()
            )));
        }

        for work in work_items {
            self.run_solver(work, &mut on_result);
        }
        Ok(())
    }

    /// Read the input once, parse once, then solve each part in order
    fn run_solver<F>(&self, work: &WorkItem, on_result: &mut F)
    where
        F: FnMut(SolverResult),
    {
        let input = match self.inputs.read(work.year, work.day) {
            Ok(input) => input,
            Err(e) => {
                for part in work.parts.clone() {
                    on_result(make_error_result(work, part, e.duplicate().into()));
                }
                return;
            }
        };

        let mut solver = match self.registry.create_solver(work.year, work.day, &input) {
            Ok(solver) => solver,
            Err(e) => {
                for part in work.parts.clone() {
                    on_result(make_error_result(work, part, duplicate_solver_error(&e).into()));
                }
                return;
            }
        };

        let mut parse_duration = Some(solver.parse_duration());
        for part in work.parts.clone() {
            let mut result = solve_part(work, part, &mut *solver);
            result.parse_duration = parse_duration.take();
            on_result(result);
        }
    }
}

/// Rebuild a registry error so every selected part can report it
fn duplicate_solver_error(e: &SolverError) -> SolverError {
    match e {
        SolverError::NotFound(year, day) => SolverError::NotFound(*year, *day),
        SolverError::InvalidYearDay(year, day) => SolverError::InvalidYearDay(*year, *day),
        SolverError::ParseError(parse) => SolverError::ParseError(parse.clone()),
        other => SolverError::ParseError(ParseError::Other(other.to_string())),
    }
}

fn make_error_result(work: &WorkItem, part: u8, error: CliError) -> SolverResult {
    SolverResult {
        year: work.year,
        day: work.day,
        part,
        answer: Err(error),
        parse_duration: None,
        solve_duration: TimeDelta::zero(),
    }
}

fn solve_part(work: &WorkItem, part: u8, solver: &mut dyn DynSolver) -> SolverResult {
    match solver.solve(part) {
        Ok(solved) => SolverResult {
            year: work.year,
            day: work.day,
            part,
            solve_duration: solved.duration(),
            answer: Ok(solved.answer),
            parse_duration: None,
        },
        Err(e) => make_error_result(work, part, SolverError::from(e).into()),
    }
}
