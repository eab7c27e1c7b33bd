use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError,
    SolverRegistryBuilder,
};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 24, tags = ["test", "combined"])]
struct CombinedMacroSolver;

impl AocParser for CombinedMacroSolver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(input.split_whitespace().collect())
    }
}

impl PartSolver<1> for CombinedMacroSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

impl PartSolver<2> for CombinedMacroSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.join("-"))
    }
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2016, day = 25)]
struct UntaggedSolver;

impl AocParser for UntaggedSolver {
    type SharedData<'a> = usize;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.len())
    }
}

impl PartSolver<1> for UntaggedSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.to_string())
    }
}

#[test]
fn test_combined_solver_auto_registers() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .expect("Failed to register plugins")
        .build();

    let info = registry.storage().get_info(2016, 24).expect("solver registered");
    assert_eq!(info.parts, 2);
    assert_eq!(info.tags, &["test", "combined"]);

    let mut solver = registry
        .create_solver(2016, 24, "a b c")
        .expect("Failed to create solver - was it registered?");

    assert_eq!(solver.solve(1).unwrap().answer, "3");
    assert_eq!(solver.solve(2).unwrap().answer, "a-b-c");
}

#[test]
fn test_filtered_registration_by_tag() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"combined"))
        .expect("Failed to register plugins")
        .build();

    assert!(registry.storage().contains(2016, 24));
    assert!(!registry.storage().contains(2016, 25));
}

#[test]
fn test_untagged_plugin_has_no_tags() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.year == 2016 && plugin.day == 25)
        .unwrap()
        .build();

    let info = registry.storage().get_info(2016, 25).unwrap();
    assert!(info.tags.is_empty());
    assert_eq!(registry.create_solver(2016, 25, "abcd").unwrap().solve(1).unwrap().answer, "4");
}
