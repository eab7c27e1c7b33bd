//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Trait for parsing puzzle input into data shared by every part
///
/// `SharedData` may borrow from the input, which keeps label-heavy puzzles
/// free of string copies:
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Devices;
///
/// impl AocParser for Devices {
///     type SharedData<'a> = Vec<(&'a str, Vec<&'a str>)>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|line| {
///                 let (label, outputs) = line
///                     .split_once(':')
///                     .ok_or_else(|| ParseError::InvalidFormat(line.to_string()))?;
///                 Ok((label, outputs.split_whitespace().collect()))
///             })
///             .collect()
///     }
/// }
///
/// let devices = Devices::parse("you: bbb ccc\nbbb: out").unwrap();
/// assert_eq!(devices[0], ("you", vec!["bbb", "ccc"]));
/// ```
pub trait AocParser {
    /// Parsed input plus anything a part wants to leave behind for later parts
    type SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Solves part `N` of a puzzle
///
/// Each part is its own impl so `#[derive(AocSolver)]` can build the
/// dispatch table at compile time.
///
/// ```
/// use aoc_solver::{AocParser, PartSolver, ParseError, SolveError};
///
/// struct Batteries;
///
/// impl AocParser for Batteries {
///     type SharedData<'a> = Vec<&'a [u8]>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.lines().map(str::as_bytes).collect())
///     }
/// }
///
/// impl PartSolver<1> for Batteries {
///     fn solve(banks: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         let best = banks
///             .iter()
///             .filter_map(|bank| bank.iter().max())
///             .map(|&digit| u32::from(digit - b'0'))
///             .sum::<u32>();
///         Ok(best.to_string())
///     }
/// }
///
/// let mut banks = Batteries::parse("1239\n811").unwrap();
/// assert_eq!(<Batteries as PartSolver<1>>::solve(&mut banks).unwrap(), "17");
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    /// Solve this part with mutable access to the shared data
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// Core trait that all solvers implement
///
/// Usually derived with `#[derive(AocSolver)]`, which dispatches
/// `solve_part(shared, n)` to `<Self as PartSolver<n>>::solve(shared)`.
/// A hand-written impl looks like:
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct Dial;
///
/// impl AocParser for Dial {
///     type SharedData<'a> = Vec<i32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|line| match line.split_at_checked(1) {
///                 Some(("L", n)) => n.parse::<i32>().map(|n| -n),
///                 Some(("R", n)) => n.parse(),
///                 _ => "".parse(),
///             }
///             .map_err(|_| ParseError::InvalidFormat(line.to_string())))
///             .collect()
///     }
/// }
///
/// impl Solver for Dial {
///     const PARTS: u8 = 1;
///
///     fn solve_part(turns: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(turns.iter().sum::<i32>().rem_euclid(100).to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut turns = Dial::parse("L68\nR30").unwrap();
/// assert_eq!(Dial::solve_part(&mut turns, 1).unwrap(), "62");
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part of the problem
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError::PartNotImplemented)` - The part is not implemented
    /// * `Err(SolveError::SolveFailed)` - An error occurred while solving
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked access to [`Solver::solve_part`]
pub trait SolverExt: Solver {
    /// Solve `part`, rejecting 0 and anything above `PARTS` with `PartOutOfRange`
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
