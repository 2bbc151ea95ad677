//! Generated scenarios replayed end to end

use actiontime::scenario::{
    generate_scenario, parse_script, run_scenario, write_script, Balance, GeneratorConfig,
};
use actiontime::Accumulator;
use std::fs::File;
use std::sync::Arc;
use tempfile::TempDir;

fn generator(balance: Balance) -> GeneratorConfig {
    GeneratorConfig {
        actions: vec!["jump".to_string(), "stand".to_string(), "walk".to_string()],
        adds_per_action: 200,
        max_time: 1e6,
        balance,
        seed: Some(7),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_generated_scenarios_pass_for_every_balance() {
    for balance in [Balance::Write, Balance::Read, Balance::Balanced] {
        let commands = generate_scenario(&generator(balance)).unwrap();
        let accumulator = Arc::new(Accumulator::new());

        let report = run_scenario(Arc::clone(&accumulator), commands).await.unwrap();

        assert!(report.passed(), "{balance:?}: {:?}", report.mismatches);
        assert_eq!(report.adds, 600);
        assert_eq!(report.checks, 3);
        assert_eq!(accumulator.len(), 3);
    }
}

#[tokio::test]
async fn test_script_file_round_trip_replays() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("scenario.csv");

    let commands = generate_scenario(&generator(Balance::Balanced)).unwrap();
    write_script(File::create(&path).unwrap(), &commands).unwrap();

    let parsed = parse_script(File::open(&path).unwrap()).unwrap();
    assert_eq!(parsed, commands);

    let report = run_scenario(Arc::new(Accumulator::new()), parsed).await.unwrap();
    assert!(report.passed());
    assert_eq!(report.snapshots, 600);
}
