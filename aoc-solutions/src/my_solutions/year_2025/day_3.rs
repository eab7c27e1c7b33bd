use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 3, tags = ["greedy"])]
pub struct Solver;

/// Battery banks, one digit per battery
pub type Banks = Vec<Vec<u8>>;

impl AocParser for Solver {
    type SharedData<'a> = Banks;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(line_idx, line)| {
                line.bytes()
                    .map(|b| match b {
                        b'0'..=b'9' => Ok(b - b'0'),
                        _ => Err(ParseError::InvalidFormat(format!(
                            "(line {}) not a digit: {:?}",
                            line_idx + 1,
                            b as char
                        ))),
                    })
                    .collect::<Result<Vec<u8>, _>>()
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        total_joltage(shared, 2)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        total_joltage(shared, 12)
    }
}

fn total_joltage(banks: &[Vec<u8>], batteries: usize) -> Result<String, SolveError> {
    banks
        .iter()
        .map(|bank| {
            max_joltage(bank, batteries).ok_or_else(|| {
                SolveError::failed(format!(
                    "bank of {} batteries cannot turn on {}",
                    bank.len(),
                    batteries
                ))
            })
        })
        .sum::<Result<u64, _>>()
        .map(|total| total.to_string())
}

/// Largest number formed by `count` digits of `bank`, keeping their order.
///
/// Each pick takes the leftmost maximum among the digits that still leave
/// enough batteries for the remaining picks.
fn max_joltage(bank: &[u8], count: usize) -> Option<u64> {
    if bank.len() < count {
        return None;
    }

    let mut start = 0;
    let mut value = 0u64;
    for remaining in (0..count).rev() {
        let window = &bank[start..bank.len() - remaining];
        let (offset, &digit) = window
            .iter()
            .enumerate()
            .rev()
            .max_by_key(|&(_, digit)| digit)?;
        value = value * 10 + digit as u64;
        start += offset + 1;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "987654321111111\n811111111111119\n234234234234278\n818181911112111\n";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "357");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "3121910778619");
    }

    #[test]
    fn test_max_joltage() {
        assert_eq!(max_joltage(&[9, 8, 7, 6], 2), Some(98));
        assert_eq!(max_joltage(&[8, 1, 1, 9], 2), Some(89));
        assert_eq!(max_joltage(&[1, 9, 9], 2), Some(99));
        assert_eq!(max_joltage(&[5], 2), None);
    }

    #[test]
    fn test_short_bank_fails() {
        let mut shared = Solver::parse("12345").unwrap();
        assert!(matches!(
            Solver::solve_part(&mut shared, 2),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn test_bad_digit_line_counts_blank_lines() {
        let err = Solver::parse("12\n\n1x").unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(msg) if msg.starts_with("(line 3)")));
    }
}
