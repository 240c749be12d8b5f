mod common;

use common::small_config;
use predation_lib::model::config::AppConfig;
use predation_lib::model::engine::PopulationEngine;
use predation_lib::model::render::FrameBuffer;

fn run(config: &AppConfig, ticks: usize) -> (PopulationEngine, FrameBuffer) {
    let mut engine = PopulationEngine::new();
    engine.start(config).expect("Failed to start engine");
    let mut sink = FrameBuffer::default();
    for _ in 0..ticks {
        engine.advance(&mut sink);
    }
    (engine, sink)
}

#[test]
fn test_same_seed_same_run() {
    let mut config = AppConfig::default();
    config.simulation.seed = Some(12345);

    let (engine1, sink1) = run(&config, 50);
    let (engine2, sink2) = run(&config, 50);
    let (s1, s2) = (engine1.state().unwrap(), engine2.state().unwrap());

    assert_eq!(s1.tick, s2.tick);
    assert_eq!(s1.predators, s2.predators, "Predators should match");
    assert_eq!(s1.victims, s2.victims, "Victims should match");
    assert_eq!(s1.totals, s2.totals);
    assert_eq!(s1.termination, s2.termination);
    assert_eq!(sink1.message, sink2.message);

    let cells1: Vec<_> = sink1.cells.iter().map(|c| (c.x, c.y, c.species)).collect();
    let cells2: Vec<_> = sink2.cells.iter().map(|c| (c.x, c.y, c.species)).collect();
    assert_eq!(cells1, cells2, "Rendered frames should match");
}

#[test]
fn test_small_runs_are_reproducible() {
    for seed in 0..10 {
        let config = small_config(seed);
        let mut a = PopulationEngine::new();
        let mut b = PopulationEngine::new();
        a.start(&config).unwrap();
        b.start(&config).unwrap();

        let outcome_a = a.run_to_end(&mut FrameBuffer::default());
        let outcome_b = b.run_to_end(&mut FrameBuffer::default());

        assert_eq!(outcome_a, outcome_b, "seed {seed}");
        assert_eq!(a.state().unwrap().tick, b.state().unwrap().tick);
    }
}
