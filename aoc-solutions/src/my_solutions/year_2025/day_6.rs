use std::ops::Range;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 6, tags = ["parsing"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Multiply,
}

impl Operation {
    fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'+' => Some(Operation::Add),
            b'*' => Some(Operation::Multiply),
            _ => None,
        }
    }

    fn apply(self, operands: impl IntoIterator<Item = u64>) -> u64 {
        match self {
            Operation::Add => operands.into_iter().sum(),
            Operation::Multiply => operands.into_iter().product(),
        }
    }
}

/// The worksheet as laid out in the input, padded to a common width
#[derive(Debug)]
pub struct Worksheet<'a> {
    number_rows: Vec<&'a [u8]>,
    operator_row: &'a [u8],
    width: usize,
}

impl Worksheet<'_> {
    fn cell(row: &[u8], column: usize) -> u8 {
        row.get(column).copied().unwrap_or(b' ')
    }

    fn is_blank_column(&self, column: usize) -> bool {
        Self::cell(self.operator_row, column) == b' '
            && self
                .number_rows
                .iter()
                .all(|row| Self::cell(row, column) == b' ')
    }

    /// Column ranges of each problem, split on all-blank columns.
    fn blocks(&self) -> Vec<Range<usize>> {
        (0..self.width)
            .chunk_by(|&column| self.is_blank_column(column))
            .into_iter()
            .filter(|(blank, _)| !blank)
            .filter_map(|(_, mut columns)| {
                let start = columns.next()?;
                let end = columns.last().unwrap_or(start) + 1;
                Some(start..end)
            })
            .collect()
    }

    fn operation(&self, block: &Range<usize>) -> Result<Operation, SolveError> {
        block
            .clone()
            .find_map(|column| Operation::from_byte(Self::cell(self.operator_row, column)))
            .ok_or_else(|| {
                SolveError::failed(format!("no operator under columns {:?}", block))
            })
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Worksheet<'a>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut rows: Vec<&[u8]> = input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::as_bytes)
            .collect();
        let operator_row = rows
            .pop()
            .ok_or_else(|| ParseError::MissingData("empty worksheet".to_string()))?;

        if let Some(bad) = operator_row
            .iter()
            .find(|&&b| b != b' ' && Operation::from_byte(b).is_none())
        {
            return Err(ParseError::InvalidFormat(format!(
                "unexpected operator {:?}",
                *bad as char
            )));
        }
        if let Some(bad) = rows
            .iter()
            .flat_map(|row| row.iter())
            .find(|&&b| b != b' ' && !b.is_ascii_digit())
        {
            return Err(ParseError::InvalidFormat(format!(
                "unexpected character {:?} in numbers",
                *bad as char
            )));
        }

        let width = rows
            .iter()
            .chain(std::iter::once(&operator_row))
            .map(|row| row.len())
            .max()
            .unwrap_or(0);

        Ok(Worksheet {
            number_rows: rows,
            operator_row,
            width,
        })
    }
}

impl PartSolver<1> for Solver {
    /// Numbers read left to right within each row
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        grand_total(shared, |sheet, block| {
            sheet
                .number_rows
                .iter()
                .filter_map(|row| digits_to_number(block.clone().map(|c| Worksheet::cell(row, c))))
                .collect()
        })
    }
}

impl PartSolver<2> for Solver {
    /// Numbers read top to bottom within each character column
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        grand_total(shared, |sheet, block| {
            block
                .clone()
                .filter_map(|column| {
                    digits_to_number(
                        sheet
                            .number_rows
                            .iter()
                            .map(|row| Worksheet::cell(row, column)),
                    )
                })
                .collect()
        })
    }
}

fn grand_total(
    sheet: &Worksheet<'_>,
    operands: impl Fn(&Worksheet<'_>, &Range<usize>) -> Vec<u64>,
) -> Result<String, SolveError> {
    sheet
        .blocks()
        .iter()
        .map(|block| Ok(sheet.operation(block)?.apply(operands(sheet, block))))
        .sum::<Result<u64, SolveError>>()
        .map(|total| total.to_string())
}

/// Concatenates the digits among `cells`, skipping blanks. `None` if there are none.
fn digits_to_number(cells: impl Iterator<Item = u8>) -> Option<u64> {
    cells
        .filter(u8::is_ascii_digit)
        .fold(None, |acc, d| Some(acc.unwrap_or(0) * 10 + (d - b'0') as u64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "123 328  51 64 \n 45 64  387 23 \n  6 98  215 314\n*   +   *   +  \n";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "4277556");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "3263827");
    }

    #[test]
    fn test_blocks_tolerate_trimmed_lines() {
        // Trailing spaces stripped by an editor
        let trimmed = "123 328  51 64\n 45 64  387 23\n  6 98  215 314\n*   +   *   +\n";
        let shared = Solver::parse(trimmed).unwrap();
        assert_eq!(shared.blocks(), vec![0..3, 4..7, 8..11, 12..15]);
    }

    #[test]
    fn test_digits_to_number() {
        assert_eq!(digits_to_number(b" 4 2".iter().copied()), Some(42));
        assert_eq!(digits_to_number(b"   ".iter().copied()), None);
    }

    #[test]
    fn test_rejects_unknown_operator() {
        assert!(Solver::parse("1 2\n- +\n").is_err());
    }
}
