use std::ops::RangeInclusive;

use anyhow::{anyhow, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 5, tags = ["intervals"])]
pub struct Solver;

#[derive(Debug)]
pub struct Inventory {
    /// Fresh ingredient ranges, sorted and merged so none overlap or touch
    fresh: Vec<RangeInclusive<u64>>,
    available: Vec<u64>,
}

impl AocParser for Solver {
    type SharedData<'a> = Inventory;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_inventory(input).map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))
    }
}

fn parse_inventory(input: &str) -> anyhow::Result<Inventory> {
    let mut lines = input.lines().map(str::trim).enumerate();

    let ranges = lines
        .by_ref()
        .skip_while(|(_, line)| line.is_empty())
        .take_while(|(_, line)| !line.is_empty())
        .map(|(line_idx, line)| {
            let (start, end) = line
                .split_once('-')
                .ok_or_else(|| anyhow!("expected `start-end`, got {:?}", line))
                .with_context(|| format!("(line {})", line_idx + 1))?;
            let start: u64 = start.parse().with_context(|| format!("(line {})", line_idx + 1))?;
            let end: u64 = end.parse().with_context(|| format!("(line {})", line_idx + 1))?;
            Ok(start..=end)
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let available = lines
        .filter(|(_, line)| !line.is_empty())
        .map(|(line_idx, line)| {
            line.parse()
                .with_context(|| format!("(line {}) bad ingredient id {:?}", line_idx + 1, line))
        })
        .collect::<anyhow::Result<Vec<u64>>>()?;

    Ok(Inventory {
        fresh: merge_ranges(ranges),
        available,
    })
}

/// Sorts ranges by start and folds overlapping or adjacent ones together.
fn merge_ranges(ranges: Vec<RangeInclusive<u64>>) -> Vec<RangeInclusive<u64>> {
    ranges
        .into_iter()
        .filter(|range| !range.is_empty())
        .sorted_by_key(|range| *range.start())
        .coalesce(|prev, next| {
            if *next.start() <= prev.end().saturating_add(1) {
                Ok(*prev.start()..=*prev.end().max(next.end()))
            } else {
                Err((prev, next))
            }
        })
        .collect()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let fresh = &shared.fresh;
        let count = shared
            .available
            .iter()
            .filter(|&&id| {
                // First range ending at or after `id` is the only candidate
                let idx = fresh.partition_point(|range| *range.end() < id);
                fresh.get(idx).is_some_and(|range| range.contains(&id))
            })
            .count();
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared
            .fresh
            .iter()
            .map(|range| range.end() - range.start() + 1)
            .sum();
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "3-5\n10-14\n16-20\n12-18\n\n1\n5\n8\n11\n17\n32\n";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "3");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "14");
    }

    #[test]
    fn test_merge_ranges() {
        assert_eq!(
            merge_ranges(vec![10..=14, 3..=5, 16..=20, 12..=18, 6..=6]),
            vec![3..=6, 10..=20]
        );
        assert_eq!(merge_ranges(vec![1..=10, 2..=3]), vec![1..=10]);
    }

    #[test]
    fn test_bad_line_is_reported() {
        let err = Solver::parse("3-5\n7\n\n1").unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(msg) if msg.contains("line 2")));
    }

    #[test]
    fn test_leading_blank_lines_keep_numbering() {
        let err = Solver::parse("\n3-5\nx\n\n1").unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(msg) if msg.contains("line 3")));
    }
}
