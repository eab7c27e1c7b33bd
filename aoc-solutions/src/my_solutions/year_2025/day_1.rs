use anyhow::{anyhow, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

const DIAL_SIZE: u32 = 100;
const DIAL_START: u32 = 50;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 1, tags = ["dial"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Left(u32),
    Right(u32),
}

#[derive(Debug)]
pub struct SharedData {
    rotations: Vec<Rotation>,
    common_result: Option<CommonResult>,
}

#[derive(Debug, Clone, Copy)]
struct CommonResult {
    stops_on_zero: u32,
    clicks_on_zero: u32,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .trim_end()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                parse_rotation(line.trim()).with_context(|| format!("(line {})", line_idx + 1))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|rotations| SharedData {
                rotations,
                common_result: None,
            })
            .map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))
    }
}

fn parse_rotation(line: &str) -> anyhow::Result<Rotation> {
    let (direction, clicks) = line.split_at_checked(1).ok_or_else(|| anyhow!("empty line"))?;
    let clicks: u32 = clicks.parse()?;
    match direction {
        "L" => Ok(Rotation::Left(clicks)),
        "R" => Ok(Rotation::Right(clicks)),
        other => Err(anyhow!("first character need to be 'L' or 'R', got {:?}", other)),
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(solve_once_for_both(shared).stops_on_zero.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(solve_once_for_both(shared).clicks_on_zero.to_string())
    }
}

fn solve_once_for_both(shared: &mut SharedData) -> CommonResult {
    *shared
        .common_result
        .get_or_insert_with(|| turn_dial(&shared.rotations))
}

fn turn_dial(rotations: &[Rotation]) -> CommonResult {
    let mut position = DIAL_START;
    let mut result = CommonResult {
        stops_on_zero: 0,
        clicks_on_zero: 0,
    };

    for &rotation in rotations {
        let (passes, next) = match rotation {
            Rotation::Right(clicks) => {
                ((position + clicks) / DIAL_SIZE, (position + clicks) % DIAL_SIZE)
            }
            Rotation::Left(clicks) => {
                let passes = match position {
                    0 => clicks / DIAL_SIZE,
                    p if clicks >= p => 1 + (clicks - p) / DIAL_SIZE,
                    _ => 0,
                };
                let back = clicks % DIAL_SIZE;
                (passes, (position + DIAL_SIZE - back) % DIAL_SIZE)
            }
        };

        result.clicks_on_zero += passes;
        position = next;
        if position == 0 {
            result.stops_on_zero += 1;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82\n";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "3");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "6");
    }

    #[test]
    fn test_full_turns_pass_zero_each_time() {
        let mut shared = Solver::parse("R1000").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "10");

        // Starting on zero does not count as passing it
        let mut shared = Solver::parse("L50\nL100\nL5").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "2");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "2");
    }

    #[test]
    fn test_parse_errors_name_the_line() {
        let err = Solver::parse("R10\nX5").unwrap_err();
        assert!(matches!(&err, ParseError::InvalidFormat(msg) if msg.contains("line 2")));
        assert!(Solver::parse("L-3").is_err());
    }
}
