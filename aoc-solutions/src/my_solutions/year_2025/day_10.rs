use std::collections::VecDeque;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

/// Light states are searched exhaustively, so the diagram stays small.
const MAX_LIGHTS: usize = 20;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 10, tags = ["bfs", "linear-algebra"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    /// Bit `i` set when light `i` must end up on
    lights: u32,
    light_count: usize,
    /// Counter indices wired to each button
    buttons: Vec<Vec<usize>>,
    joltages: Vec<u64>,
}

impl Machine {
    fn button_mask(&self, button: usize) -> u32 {
        self.buttons[button]
            .iter()
            .fold(0, |mask, &light| mask ^ (1 << light))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Machine>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let lights_re = Regex::new(r"\[([.#]+)\]").map_err(|e| ParseError::Other(e.to_string()))?;
        let button_re = Regex::new(r"\(([\d,]*)\)").map_err(|e| ParseError::Other(e.to_string()))?;
        let joltage_re = Regex::new(r"\{([\d,]+)\}").map_err(|e| ParseError::Other(e.to_string()))?;

        input
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(line_idx, line)| {
                let bad = |what: &str| {
                    ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, what))
                };

                let pattern = lights_re
                    .captures(line)
                    .map(|c| c[1].as_bytes().to_vec())
                    .ok_or_else(|| bad("missing light diagram"))?;
                if pattern.len() > MAX_LIGHTS {
                    return Err(bad("too many lights"));
                }
                let lights = pattern
                    .iter()
                    .enumerate()
                    .filter(|&(_, &b)| b == b'#')
                    .fold(0u32, |mask, (i, _)| mask | (1 << i));

                let joltages = joltage_re
                    .captures(line)
                    .ok_or_else(|| bad("missing joltage requirements"))
                    .and_then(|c| parse_numbers::<u64>(&c[1]).ok_or_else(|| bad("bad joltage")))?;

                let buttons = button_re
                    .captures_iter(line)
                    .map(|c| parse_numbers::<usize>(&c[1]).ok_or_else(|| bad("bad button")))
                    .collect::<Result<Vec<_>, _>>()?;

                let wired = pattern.len().min(joltages.len());
                if buttons.iter().flatten().any(|&i| i >= wired) {
                    return Err(bad("button wired to a missing light or counter"));
                }

                Ok(Machine {
                    lights,
                    light_count: pattern.len(),
                    buttons,
                    joltages,
                })
            })
            .collect()
    }
}

fn parse_numbers<T: std::str::FromStr>(list: &str) -> Option<Vec<T>> {
    list.split(',')
        .filter(|n| !n.is_empty())
        .map(|n| n.parse().ok())
        .collect()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        sum_per_machine(shared, fewest_presses_for_lights)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        sum_per_machine(shared, fewest_presses_for_joltage)
    }
}

fn sum_per_machine(
    machines: &[Machine],
    presses: fn(&Machine) -> Option<u64>,
) -> Result<String, SolveError> {
    machines
        .iter()
        .enumerate()
        .map(|(idx, machine)| {
            presses(machine).ok_or_else(|| {
                SolveError::failed(format!("machine {} cannot be configured", idx + 1))
            })
        })
        .sum::<Result<u64, _>>()
        .map(|total| total.to_string())
}

/// BFS over light states, starting from all lights off.
fn fewest_presses_for_lights(machine: &Machine) -> Option<u64> {
    let masks: Vec<u32> = (0..machine.buttons.len())
        .map(|b| machine.button_mask(b))
        .collect();
    let mut distance = vec![None; 1 << machine.light_count];
    distance[0] = Some(0u64);
    let mut queue = VecDeque::from([0u32]);

    while let Some(state) = queue.pop_front() {
        let presses = distance[state as usize]?;
        if state == machine.lights {
            return Some(presses);
        }
        for &mask in &masks {
            let next = state ^ mask;
            if distance[next as usize].is_none() {
                distance[next as usize] = Some(presses + 1);
                queue.push_back(next);
            }
        }
    }

    None
}

/// Fewest presses making every counter equal its joltage.
///
/// Presses per button form a non-negative integer solution of `A x = b`,
/// where `A[i][j]` is 1 when button `j` feeds counter `i`. The system is
/// brought into reduced row echelon form with integer arithmetic; every
/// assignment of the free buttons within their bounds then determines the
/// pivot buttons.
fn fewest_presses_for_joltage(machine: &Machine) -> Option<u64> {
    let system = ReducedSystem::new(machine)?;

    // A button can never be pressed more often than its smallest counter allows
    let bounds: Vec<i64> = system
        .free
        .iter()
        .map(|&button| {
            machine.buttons[button]
                .iter()
                .map(|&counter| machine.joltages[counter] as i64)
                .min()
                .unwrap_or(0)
        })
        .collect();

    let mut values = vec![0i64; system.free.len()];
    let mut best: Option<u64> = None;
    loop {
        if let Some(total) = system.total_presses(&values) {
            best = Some(best.map_or(total, |b| b.min(total)));
        }

        // Odometer step over the free buttons
        let mut digit = 0;
        loop {
            if digit == values.len() {
                return best;
            }
            if values[digit] < bounds[digit] {
                values[digit] += 1;
                break;
            }
            values[digit] = 0;
            digit += 1;
        }
    }
}

#[derive(Debug)]
struct ReducedSystem {
    /// Pivot rows; last entry is the right-hand side
    rows: Vec<Vec<i64>>,
    pivots: Vec<usize>,
    free: Vec<usize>,
}

impl ReducedSystem {
    /// `None` if the system has no rational solution at all.
    fn new(machine: &Machine) -> Option<Self> {
        let columns = machine.buttons.len();
        let mut rows: Vec<Vec<i64>> = machine
            .joltages
            .iter()
            .map(|&joltage| {
                let mut row = vec![0; columns + 1];
                row[columns] = joltage as i64;
                row
            })
            .collect();
        for (button, counters) in machine.buttons.iter().enumerate() {
            for &counter in counters {
                rows[counter][button] += 1;
            }
        }

        let mut pivots = Vec::new();
        let mut free = Vec::new();
        let mut rank = 0;

        for column in 0..columns {
            let Some(pivot_row) = (rank..rows.len()).find(|&r| rows[r][column] != 0) else {
                free.push(column);
                continue;
            };
            rows.swap(rank, pivot_row);

            for r in 0..rows.len() {
                if r == rank || rows[r][column] == 0 {
                    continue;
                }
                let (pivot, factor) = (rows[rank][column], rows[r][column]);
                let eliminated: Vec<i64> = rows[r]
                    .iter()
                    .zip(&rows[rank])
                    .map(|(&x, &p)| x * pivot - p * factor)
                    .collect();
                rows[r] = eliminated;
                normalize(&mut rows[r]);
            }
            normalize(&mut rows[rank]);
            if rows[rank][column] < 0 {
                rows[rank].iter_mut().for_each(|x| *x = -*x);
            }

            pivots.push(column);
            rank += 1;
        }

        // Leftover rows read `0 = rhs`
        if rows[rank..].iter().any(|row| row[columns] != 0) {
            return None;
        }
        rows.truncate(rank);

        Some(Self { rows, pivots, free })
    }

    /// Total presses when the free buttons take `values`, if every pivot
    /// button then gets a non-negative whole number of presses.
    fn total_presses(&self, values: &[i64]) -> Option<u64> {
        let rhs = self.pivots.len() + self.free.len();
        let mut total: i64 = values.iter().sum();

        for (row, &pivot) in self.rows.iter().zip(&self.pivots) {
            let remainder = row[rhs]
                - self
                    .free
                    .iter()
                    .zip(values)
                    .map(|(&column, &value)| row[column] * value)
                    .sum::<i64>();
            let coefficient = row[pivot];
            if remainder % coefficient != 0 || remainder / coefficient < 0 {
                return None;
            }
            total += remainder / coefficient;
        }

        u64::try_from(total).ok()
    }
}

/// Divides a row by the gcd of its entries.
fn normalize(row: &mut [i64]) {
    let divisor = row.iter().fold(0, |acc, &x| gcd(acc, x.abs()));
    if divisor > 1 {
        row.iter_mut().for_each(|x| *x /= divisor);
    }
}

fn gcd(a: i64, b: i64) -> i64 {
    if b == 0 { a } else { gcd(b, a % b) }
}
