//! Random scenario generation

use super::command::ScenarioCommand;
use crate::error::ScenarioError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Smallest time a generated event can take
pub const MIN_TIME: f64 = 0.0001;

/// Mix of reads and writes in a generated scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Balance {
    /// Only asynchronous adds
    Write,
    /// Synchronous adds followed by a block of asynchronous snapshots
    Read,
    /// Asynchronous adds interleaved with asynchronous snapshots
    #[default]
    Balanced,
}

/// Settings for [`generate_scenario`]
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub actions: Vec<String>,
    /// Number of events generated per action
    pub adds_per_action: usize,
    /// Exclusive upper bound of generated times
    pub max_time: f64,
    pub balance: Balance,
    /// Fixed seed for reproducible scenarios
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            actions: Vec::new(),
            adds_per_action: 1,
            max_time: 1e6,
            balance: Balance::default(),
            seed: None,
        }
    }
}

/// Generate a scenario that ends by checking the exact mean of every action
pub fn generate_scenario(
    config: &GeneratorConfig,
) -> Result<Vec<ScenarioCommand>, ScenarioError> {
    if config.actions.is_empty() {
        return Err(ScenarioError::InvalidSettings(
            "at least one action is required".to_string(),
        ));
    }
    if config.adds_per_action == 0 {
        return Err(ScenarioError::InvalidSettings(
            "at least one add per action is required".to_string(),
        ));
    }
    if !config.max_time.is_finite() || config.max_time <= MIN_TIME {
        return Err(ScenarioError::InvalidSettings(format!(
            "maximum time must be greater than {MIN_TIME}"
        )));
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut actions: Vec<&str> = Vec::new();
    for action in &config.actions {
        if !actions.contains(&action.as_str()) {
            actions.push(action);
        }
    }

    let action_times: Vec<(&str, Vec<f64>)> = actions
        .iter()
        .map(|action| {
            let times: Vec<f64> = (0..config.adds_per_action)
                .map(|_| rng.random_range(MIN_TIME..config.max_time))
                .collect();
            (*action, times)
        })
        .collect();

    let mut streams: Vec<Vec<ScenarioCommand>> = Vec::new();
    for (action, times) in &action_times {
        streams.push(
            times
                .iter()
                .map(|&time| match config.balance {
                    Balance::Read => ScenarioCommand::Add {
                        action: action.to_string(),
                        time,
                    },
                    Balance::Write | Balance::Balanced => ScenarioCommand::AddAsync {
                        action: action.to_string(),
                        time,
                    },
                })
                .collect(),
        );
        if config.balance == Balance::Balanced {
            streams.push(snapshot_stream(action, times.len()));
        }
    }

    let mut commands = interleave(streams);

    if config.balance == Balance::Read {
        let reads = action_times
            .iter()
            .map(|(action, times)| snapshot_stream(action, times.len()))
            .collect();
        commands.extend(interleave(reads));
    }

    commands.push(ScenarioCommand::Sync);
    commands.extend(action_times.iter().map(|(action, times)| ScenarioCommand::Get {
        action: action.to_string(),
        expected: times.iter().sum::<f64>() / times.len() as f64,
    }));

    Ok(commands)
}

fn snapshot_stream(action: &str, len: usize) -> Vec<ScenarioCommand> {
    (0..len)
        .map(|_| ScenarioCommand::GetAsync {
            action: action.to_string(),
        })
        .collect()
}

/// Round-robin merge of equally long streams
fn interleave(streams: Vec<Vec<ScenarioCommand>>) -> Vec<ScenarioCommand> {
    let len = streams.iter().map(Vec::len).min().unwrap_or(0);
    let mut iters: Vec<_> = streams.into_iter().map(Vec::into_iter).collect();

    let mut merged = Vec::with_capacity(len * iters.len());
    for _ in 0..len {
        merged.extend(iters.iter_mut().filter_map(Iterator::next));
    }
    merged
}
