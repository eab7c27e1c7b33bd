use anyhow::{anyhow, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use petgraph::unionfind::UnionFind;

/// Closest pairs wired up before the circuits are measured.
pub const CONNECTIONS: usize = 1000;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 8, tags = ["graph", "union-find"])]
pub struct Solver;

pub type JunctionBox = [i64; 3];

#[derive(Debug)]
pub struct Playground {
    boxes: Vec<JunctionBox>,
    /// Index pairs ordered by distance, closest first
    closest_pairs: Option<Vec<(usize, usize)>>,
}

impl Playground {
    /// The boxes together with their index pairs, closest first.
    fn closest_pairs(&mut self) -> (&[JunctionBox], &[(usize, usize)]) {
        let boxes = &self.boxes;
        let pairs = self.closest_pairs.get_or_insert_with(|| {
            (0..boxes.len())
                .tuple_combinations()
                .sorted_by_key(|&(a, b)| (distance_squared(boxes[a], boxes[b]), a, b))
                .collect()
        });
        (boxes, pairs)
    }
}

fn distance_squared(a: JunctionBox, b: JunctionBox) -> i64 {
    a.iter().zip(b).map(|(p, q)| (p - q) * (p - q)).sum()
}

impl AocParser for Solver {
    type SharedData<'a> = Playground;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .trim_end()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                parse_box(line.trim()).with_context(|| format!("(line {})", line_idx + 1))
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map(|boxes| Playground {
                boxes,
                closest_pairs: None,
            })
            .map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))
    }
}

fn parse_box(line: &str) -> anyhow::Result<JunctionBox> {
    let coords: Vec<i64> = line
        .split(',')
        .map(|part| part.trim().parse())
        .collect::<Result<_, _>>()?;
    coords
        .try_into()
        .map_err(|coords: Vec<i64>| anyhow!("expected 3 coordinates, got {}", coords.len()))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(largest_circuits_product(shared, CONNECTIONS).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        last_connection_product(shared).map(|product| product.to_string())
    }
}

/// Wires up the `connections` closest pairs (pairs already in one circuit
/// still use up a connection) and multiplies the sizes of the three largest
/// circuits.
fn largest_circuits_product(playground: &mut Playground, connections: usize) -> u64 {
    let (boxes, pairs) = playground.closest_pairs();
    let mut circuits = UnionFind::new(boxes.len());
    for &(a, b) in pairs.iter().take(connections) {
        circuits.union(a, b);
    }

    circuits
        .into_labeling()
        .into_iter()
        .counts()
        .into_values()
        .sorted_unstable_by(|a, b| b.cmp(a))
        .take(3)
        .map(|size| size as u64)
        .product()
}

/// Joins closest pairs until every box is in one circuit and multiplies the
/// X coordinates of the pair that completed it.
fn last_connection_product(playground: &mut Playground) -> Result<i64, SolveError> {
    let (boxes, pairs) = playground.closest_pairs();
    let count = boxes.len();
    let mut circuits = UnionFind::new(count);
    let mut remaining = count;

    for &(a, b) in pairs {
        if circuits.union(a, b) {
            remaining -= 1;
            if remaining == 1 {
                return Ok(boxes[a][0] * boxes[b][0]);
            }
        }
    }

    Err(SolveError::failed(format!(
        "{} junction box(es) never form a connection",
        count
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
162,817,812
57,618,57
906,360,560
592,479,940
352,342,300
466,668,158
542,29,236
431,825,988
739,650,466
52,470,668
216,146,977
819,987,18
117,168,530
805,96,715
346,949,466
970,615,88
941,993,340
862,61,35
984,92,344
425,690,689
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(largest_circuits_product(&mut shared, 10), 40);
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "25272");
    }

    #[test]
    fn test_pairs_sorted_by_distance() {
        let mut shared = Solver::parse("0,0,0\n10,0,0\n1,1,1\n").unwrap();
        assert_eq!(shared.closest_pairs().1, &[(0, 2), (1, 2), (0, 1)]);
    }

    #[test]
    fn test_single_box_cannot_connect() {
        let mut shared = Solver::parse("1,2,3\n").unwrap();
        assert!(matches!(
            Solver::solve_part(&mut shared, 2),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn test_bad_coordinates() {
        assert!(Solver::parse("1,2\n").is_err());
        assert!(Solver::parse("1,2,x\n").is_err());
    }
}
