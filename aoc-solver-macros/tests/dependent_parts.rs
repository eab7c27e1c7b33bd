use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};

/// Dial rotations plus the positions part 1 leaves behind
#[derive(Debug, Clone)]
struct DialState {
    turns: Vec<i32>,
    positions: Option<Vec<i32>>,
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct DialSolver;

impl AocParser for DialSolver {
    type SharedData<'a> = DialState;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let turns = input
            .lines()
            .map(|line| -> Result<_, ParseError> {
                let (dir, amount) = line
                    .split_at_checked(1)
                    .ok_or_else(|| ParseError::MissingData(line.to_string()))?;
                let amount: i32 = amount
                    .parse()
                    .map_err(|_| ParseError::InvalidFormat(line.to_string()))?;
                match dir {
                    "L" => Ok(-amount),
                    "R" => Ok(amount),
                    _ => Err(ParseError::InvalidFormat(line.to_string())),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DialState {
            turns,
            positions: None,
        })
    }
}

fn positions(turns: &[i32]) -> Vec<i32> {
    turns
        .iter()
        .scan(50, |pos, turn| {
            *pos = (*pos + turn).rem_euclid(100);
            Some(*pos)
        })
        .collect()
}

impl PartSolver<1> for DialSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let positions = shared.positions.insert(positions(&shared.turns));
        Ok(positions.iter().filter(|&&p| p == 0).count().to_string())
    }
}

impl PartSolver<2> for DialSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // Reuse part 1's positions when it already ran
        let positions = match &shared.positions {
            Some(positions) => positions.clone(),
            None => positions(&shared.turns),
        };
        Ok(positions.last().copied().unwrap_or(50).to_string())
    }
}

const INPUT: &str = "L50\nR25\nL25\nR100";

#[test]
fn test_part1_stores_positions() {
    let mut shared = DialSolver::parse(INPUT).unwrap();

    let result = DialSolver::solve_part(&mut shared, 1).unwrap();
    assert_eq!(result, "3");
    assert_eq!(shared.positions, Some(vec![0, 25, 0, 0]));
}

#[test]
fn test_part2_uses_part1_data() {
    let mut shared = DialSolver::parse(INPUT).unwrap();

    DialSolver::solve_part(&mut shared, 1).unwrap();
    // Tamper with the stored positions to prove part 2 reads them
    shared.positions = Some(vec![7]);

    let result = DialSolver::solve_part(&mut shared, 2).unwrap();
    assert_eq!(result, "7");
}

#[test]
fn test_part2_solves_independently() {
    let mut shared = DialSolver::parse(INPUT).unwrap();

    let result = DialSolver::solve_part(&mut shared, 2).unwrap();
    assert_eq!(result, "0");
    assert_eq!(shared.positions, None);
}

#[test]
fn test_bad_direction_is_rejected() {
    assert!(matches!(
        DialSolver::parse("U10"),
        Err(ParseError::InvalidFormat(_))
    ));
    assert!(matches!(DialSolver::parse("\n"), Err(ParseError::MissingData(_))));
}
