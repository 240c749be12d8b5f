/// Asserts predator and victim counts of a simulation state.
#[macro_export]
macro_rules! assert_population {
    ($state:expr, $predators:expr, $victims:expr) => {
        assert_eq!(
            ($state.predators.len(), $state.victims.len()),
            ($predators, $victims),
            "Population mismatch (predators, victims)"
        );
    };
}

/// Asserts that every agent of a state sits on a valid cell of its grid.
#[macro_export]
macro_rules! assert_all_in_grid {
    ($state:expr) => {
        for agent in $state.predators.iter().chain(&$state.victims) {
            assert!(
                $state.rules.grid.contains_cell(agent.cell()),
                "Agent {:?} left the {}x{} field",
                agent,
                $state.rules.grid.size(),
                $state.rules.grid.size()
            );
        }
    };
}
