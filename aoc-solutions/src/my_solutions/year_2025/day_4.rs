use std::collections::{HashSet, VecDeque};

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{CharGrid, Point};

/// A roll with fewer than this many neighbouring rolls can be reached by a forklift.
const CROWDED: usize = 4;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 4, tags = ["grid"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = HashSet<Point>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let grid = CharGrid::parse(input)?;
        if let Some(bad) = grid
            .points()
            .find(|&p| !matches!(grid.get(p), Some(b'@' | b'.')))
        {
            return Err(ParseError::InvalidFormat(format!(
                "unexpected cell at {},{}",
                bad.x, bad.y
            )));
        }
        Ok(grid.positions(b'@').collect())
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let accessible = shared
            .iter()
            .filter(|&&roll| is_accessible(shared, roll))
            .count();
        Ok(accessible.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(remove_all_accessible(shared.clone()).to_string())
    }
}

fn neighbor_rolls(rolls: &HashSet<Point>, roll: Point) -> impl Iterator<Item = Point> + '_ {
    roll.neighbors8().filter(|p| rolls.contains(p))
}

fn is_accessible(rolls: &HashSet<Point>, roll: Point) -> bool {
    neighbor_rolls(rolls, roll).count() < CROWDED
}

/// Removes accessible rolls until none remain accessible; returns how many went.
///
/// Removing a roll only ever frees up its neighbours, so only those need
/// rechecking.
fn remove_all_accessible(mut rolls: HashSet<Point>) -> usize {
    let mut queue: VecDeque<Point> = rolls
        .iter()
        .copied()
        .filter(|&roll| is_accessible(&rolls, roll))
        .collect();
    let mut removed = 0;

    while let Some(roll) = queue.pop_front() {
        if !rolls.remove(&roll) {
            continue;
        }
        removed += 1;
        let freed: Vec<Point> = neighbor_rolls(&rolls, roll)
            .filter(|&next| is_accessible(&rolls, next))
            .collect();
        queue.extend(freed);
    }

    removed
}
