use std::ops::RangeInclusive;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 2, tags = ["strings"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<RangeInclusive<u64>>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .trim()
            .split(',')
            .map(|range| {
                let range = range.trim();
                let (start, end) = range
                    .split_once('-')
                    .ok_or_else(|| ParseError::InvalidFormat(format!("invalid range: {}", range)))?;
                let start: u64 = start.parse().map_err(|_| {
                    ParseError::InvalidFormat(format!("invalid start of range: {}", start))
                })?;
                let end: u64 = end.parse().map_err(|_| {
                    ParseError::InvalidFormat(format!("invalid end of range: {}", end))
                })?;
                Ok(start..=end)
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sum_matching(shared, repeated_twice).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sum_matching(shared, repeated_at_least_twice).to_string())
    }
}

fn sum_matching(ranges: &[RangeInclusive<u64>], is_invalid: fn(&[u8]) -> bool) -> u64 {
    ranges
        .iter()
        .flat_map(|range| range.clone())
        .filter(|id| is_invalid(id.to_string().as_bytes()))
        .sum()
}

/// Whether `digits` is one block written exactly twice.
fn repeated_twice(digits: &[u8]) -> bool {
    let (first, second) = digits.split_at(digits.len() / 2);
    digits.len() % 2 == 0 && first == second
}

/// Whether `digits` is one block written two or more times.
fn repeated_at_least_twice(digits: &[u8]) -> bool {
    (1..=digits.len() / 2)
        .filter(|block| digits.len() % block == 0)
        .any(|block| {
            digits
                .chunks(block)
                .all(|chunk| chunk == &digits[..block])
        })
}
