use std::collections::BTreeSet;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};
use crate::utils::grid::{CharGrid, Direction, Point};

const START: u8 = b'S';
const SPLITTER: u8 = b'^';

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 7, tags = ["grid", "dp"])]
pub struct Solver;

#[derive(Debug)]
pub struct Manifold {
    grid: CharGrid,
    start: Point,
}

impl Manifold {
    /// First splitter at or below `from` in the same column.
    fn splitter_below(&self, from: Point) -> Option<Point> {
        std::iter::successors(Some(from), |p| Some(p.step(Direction::Down)))
            .map_while(|p| self.grid.get(p).map(|cell| (p, cell)))
            .find(|&(_, cell)| cell == SPLITTER)
            .map(|(p, _)| p)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Manifold;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let grid = CharGrid::parse(input)?;
        let start = {
            let mut starts = grid.positions(START);
            let start = starts
                .next()
                .ok_or_else(|| ParseError::MissingData("no start point".to_string()))?;
            if starts.next().is_some() {
                return Err(ParseError::InvalidFormat(
                    "more than one start point".to_string(),
                ));
            }
            start
        };
        Ok(Manifold { grid, start })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let width = shared.grid.width() as i64;
        let mut beams = BTreeSet::from([shared.start.x]);
        let mut splits = 0usize;

        for y in shared.start.y + 1..shared.grid.height() as i64 {
            let mut next = BTreeSet::new();
            for &x in &beams {
                if shared.grid.get(Point::new(x, y)) == Some(SPLITTER) {
                    splits += 1;
                    next.extend([x - 1, x + 1].into_iter().filter(|x| (0..width).contains(x)));
                } else {
                    next.insert(x);
                }
            }
            beams = next;
        }

        Ok(splits.to_string())
    }
}

/// Number of extra timelines created below a point: each splitter a beam
/// reaches forks one more, then both halves continue.
struct Timelines<'a> {
    manifold: &'a Manifold,
}

impl DpProblem<Point, u64> for Timelines<'_> {
    fn deps(&self, from: &Point) -> Vec<Point> {
        self.manifold
            .splitter_below(*from)
            .map(|splitter| {
                vec![
                    splitter.step(Direction::Left),
                    splitter.step(Direction::Right),
                ]
            })
            .unwrap_or_default()
    }

    fn compute(&self, from: &Point, deps: Vec<u64>) -> u64 {
        match self.manifold.splitter_below(*from) {
            Some(_) => 1 + deps.iter().sum::<u64>(),
            None => 0,
        }
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let cache = DpCache::new(HashMapBackend::new(), Timelines { manifold: shared });
        let forks = cache.get(&shared.start).map_err(SolveError::failed)?;
        Ok((1 + forks).to_string())
    }
}
