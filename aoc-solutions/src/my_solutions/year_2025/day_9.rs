use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::border_fill::{max_clear_rectangle, rectangle_area};
use crate::utils::grid::Point;

/// Red tile coordinates are shrunk by this factor before flood filling.
pub const SCALE_DIVISOR: i64 = 10;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 9, tags = ["grid", "geometry"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Point>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(line_idx, line)| {
                line.split_once(',')
                    .and_then(|(x, y)| {
                        Some(Point::new(x.trim().parse().ok()?, y.trim().parse().ok()?))
                    })
                    .ok_or_else(|| {
                        ParseError::InvalidFormat(format!(
                            "(line {}) expected `x,y`, got {:?}",
                            line_idx + 1,
                            line
                        ))
                    })
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    /// Any two red tiles as opposite corners
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let largest = shared
            .iter()
            .tuple_combinations()
            .map(|(&a, &b)| rectangle_area(a, b))
            .max()
            .unwrap_or(0);
        Ok(largest.to_string())
    }
}

impl PartSolver<2> for Solver {
    /// Only rectangles made of red and green tiles
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        max_clear_rectangle(shared, SCALE_DIVISOR)
            .map(|area| area.to_string())
            .map_err(SolveError::failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "7,1\n11,1\n11,7\n9,7\n9,5\n2,5\n2,3\n7,3\n";

    #[test]
    fn test_example_part1() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "50");
    }

    #[test]
    fn test_example_inside_unscaled() {
        // The example is too small to scale down
        let tiles = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(max_clear_rectangle(&tiles, 1), Ok(24));
    }

    #[test]
    fn test_scaled_square() {
        let mut shared = Solver::parse("0,0\n100,0\n100,100\n0,100\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "10201");
    }

    #[test]
    fn test_diagonal_input_fails() {
        let mut shared = Solver::parse("0,0\n10,0\n20,20\n").unwrap();
        assert!(matches!(
            Solver::solve_part(&mut shared, 2),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn test_bad_line() {
        assert!(Solver::parse("1,2\n3;4\n").is_err());
    }

    #[test]
    fn test_bad_line_number_counts_blank_lines() {
        let err = Solver::parse("1,2\n\n3;4\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(msg) if msg.starts_with("(line 3)")));
    }
}
