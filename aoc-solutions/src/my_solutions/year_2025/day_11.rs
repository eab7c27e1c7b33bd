use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::path_counter::{PathCountError, PathGraph};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 11, tags = ["graph", "dp"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = PathGraph<'a>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut graph = PathGraph::new();
        for (line_idx, line) in input.lines().map(str::trim).enumerate() {
            if line.is_empty() {
                continue;
            }
            let (device, outputs) = line.split_once(':').ok_or_else(|| {
                ParseError::InvalidFormat(format!(
                    "(line {}) expected `device: outputs`, got {:?}",
                    line_idx + 1,
                    line
                ))
            })?;
            graph.add_node(device.trim());
            for output in outputs.split_whitespace() {
                graph.add_edge(device.trim(), output);
            }
        }
        Ok(graph)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let paths = shared
            .count_paths("you", "out")
            .map_err(SolveError::failed)?;
        Ok(paths.to_string())
    }
}

impl PartSolver<2> for Solver {
    /// Paths from `svr` to `out` through both `dac` and `fft`, in either order
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let through = |waypoints: [&str; 4]| -> Result<u64, PathCountError> {
            waypoints.windows(2).try_fold(1u64, |acc, leg| {
                let paths = shared.count_paths(leg[0], leg[1])?;
                acc.checked_mul(paths).ok_or(PathCountError::Overflow)
            })
        };

        let total = through(["svr", "fft", "dac", "out"])
            .and_then(|a| {
                let b = through(["svr", "dac", "fft", "out"])?;
                a.checked_add(b).ok_or(PathCountError::Overflow)
            })
            .map_err(SolveError::failed)?;
        Ok(total.to_string())
    }
}
