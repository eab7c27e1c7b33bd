//! Property-based tests for the AocSolver derive macro

use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};
use proptest::prelude::*;

/// Parses comma separated `lo-hi` ranges
#[derive(AocSolver)]
#[aoc_solver(max_parts = 3)]
struct RangeSolver;

impl AocParser for RangeSolver {
    type SharedData<'a> = Vec<(u32, u32)>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .trim()
            .split(',')
            .map(|range| {
                let (lo, hi) = range
                    .split_once('-')
                    .ok_or_else(|| ParseError::InvalidFormat(range.to_string()))?;
                let lo = lo.parse().map_err(|_| ParseError::InvalidFormat(lo.into()))?;
                let hi = hi.parse().map_err(|_| ParseError::InvalidFormat(hi.into()))?;
                Ok((lo, hi))
            })
            .collect()
    }
}

impl PartSolver<1> for RangeSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

impl PartSolver<2> for RangeSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let covered: u64 = shared.iter().map(|&(lo, hi)| (hi - lo) as u64 + 1).sum();
        Ok(covered.to_string())
    }
}

impl PartSolver<3> for RangeSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // Sorting in place is visible to later calls
        shared.sort_unstable();
        Ok(shared
            .first()
            .map(|(lo, _)| lo.to_string())
            .unwrap_or_default())
    }
}

fn ranges_strategy() -> impl Strategy<Value = Vec<(u32, u32)>> {
    prop::collection::vec((0u32..1000, 0u32..1000), 1..8).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(a, b)| (a.min(b), a.max(b)))
            .collect()
    })
}

fn render(ranges: &[(u32, u32)]) -> String {
    ranges
        .iter()
        .map(|(lo, hi)| format!("{}-{}", lo, hi))
        .collect::<Vec<_>>()
        .join(",")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// `solve_part(shared, n)` gives the same answer as `PartSolver<n>::solve`
    #[test]
    fn solve_part_dispatches_to_part_solver(ranges in ranges_strategy(), part in 1u8..=3) {
        let input = render(&ranges);
        let mut via_dispatch = RangeSolver::parse(&input).unwrap();
        let mut direct = RangeSolver::parse(&input).unwrap();

        let dispatched = RangeSolver::solve_part(&mut via_dispatch, part).unwrap();
        let expected = match part {
            1 => <RangeSolver as PartSolver<1>>::solve(&mut direct),
            2 => <RangeSolver as PartSolver<2>>::solve(&mut direct),
            3 => <RangeSolver as PartSolver<3>>::solve(&mut direct),
            _ => unreachable!(),
        }
        .unwrap();

        prop_assert_eq!(dispatched, expected);
        prop_assert_eq!(via_dispatch, direct);
    }

    /// Parts outside `1..=max_parts` are reported as not implemented
    #[test]
    fn invalid_part_returns_not_implemented(invalid_part in prop_oneof![Just(0u8), 4u8..=255]) {
        let mut shared = RangeSolver::parse("1-2").unwrap();

        match RangeSolver::solve_part(&mut shared, invalid_part) {
            Err(SolveError::PartNotImplemented(p)) => prop_assert_eq!(p, invalid_part),
            other => prop_assert!(false, "expected PartNotImplemented, got {:?}", other),
        }
    }

    /// A mutating part leaves its changes in the shared data
    #[test]
    fn mutation_is_visible_to_later_parts(ranges in ranges_strategy()) {
        let mut shared = RangeSolver::parse(&render(&ranges)).unwrap();
        let mut sorted = ranges.clone();
        sorted.sort_unstable();

        let first = RangeSolver::solve_part(&mut shared, 3).unwrap();
        prop_assert_eq!(first, sorted[0].0.to_string());
        prop_assert_eq!(&shared, &sorted);

        // Read-only parts still agree after the mutation
        let count = RangeSolver::solve_part(&mut shared, 1).unwrap();
        prop_assert_eq!(count, ranges.len().to_string());
    }
}

#[test]
fn test_parts_constant() {
    assert_eq!(RangeSolver::PARTS, 3);
}

#[test]
fn test_parse_error_surfaces() {
    assert!(matches!(
        RangeSolver::parse("1-2,oops"),
        Err(ParseError::InvalidFormat(_))
    ));
}
