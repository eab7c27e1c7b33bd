use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

/// Every present fits in a 3x3 box.
const PRESENT_AREA: u64 = 9;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2025, day = 12, tags = ["packing"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    width: u64,
    height: u64,
    quantities: Vec<u64>,
}

impl Region {
    /// Whether the presents fit without interlocking any shapes.
    fn fits_boxed(&self) -> bool {
        self.width * self.height >= PRESENT_AREA * self.quantities.iter().sum::<u64>()
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Region>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let region_re = Regex::new(r"^(\d+)x(\d+):\s*([\d ]+)$")
            .map_err(|e| ParseError::Other(e.to_string()))?;

        // Shape drawings are skipped; only region lines match
        input
            .lines()
            .map(str::trim)
            .filter_map(|line| region_re.captures(line))
            .map(|caps| {
                let number = |s: &str| {
                    s.parse::<u64>()
                        .map_err(|e| ParseError::InvalidFormat(format!("{:?}: {}", s, e)))
                };
                Ok(Region {
                    width: number(&caps[1])?,
                    height: number(&caps[2])?,
                    quantities: caps[3]
                        .split_whitespace()
                        .map(number)
                        .collect::<Result<_, _>>()?,
                })
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .iter()
            .filter(|region| region.fits_boxed())
            .count()
            .to_string())
    }
}
