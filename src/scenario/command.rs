//! Scenario script commands and their CSV form
//!
//! A script is a header-less CSV file using `|` as the quote character. Each
//! row is `command,action,value`:
//!
//! ```text
//! addasync,jump,120.5
//! getasync,jump,0
//! sync,,0
//! get,jump,120.5
//! ```

use crate::error::ScenarioError;
use std::io::{Read, Write};

const QUOTE: u8 = b'|';

/// One step of a scenario script
#[derive(Debug, Clone, PartialEq)]
pub enum ScenarioCommand {
    /// Record an event and wait for the result
    Add { action: String, time: f64 },
    /// Record an event on a worker task
    AddAsync { action: String, time: f64 },
    /// Take a snapshot on a worker task
    GetAsync { action: String },
    /// Wait for every outstanding worker task
    Sync,
    /// Check the reported average of `action`
    Get { action: String, expected: f64 },
}

impl ScenarioCommand {
    /// Name used for the command in scripts
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::AddAsync { .. } => "addasync",
            Self::GetAsync { .. } => "getasync",
            Self::Sync => "sync",
            Self::Get { .. } => "get",
        }
    }

    fn to_record(&self) -> [String; 3] {
        let (action, value) = match self {
            Self::Add { action, time } | Self::AddAsync { action, time } => {
                (action.as_str(), *time)
            }
            Self::GetAsync { action } => (action.as_str(), 0.0),
            Self::Sync => ("", 0.0),
            Self::Get { action, expected } => (action.as_str(), *expected),
        };
        [self.name().to_string(), action.to_string(), value.to_string()]
    }
}

/// Parse a scenario script
pub fn parse_script<R: Read>(reader: R) -> Result<Vec<ScenarioCommand>, ScenarioError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quote(QUOTE)
        .from_reader(reader);

    let mut commands = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        let row = index + 1;

        if record.len() != 3 {
            return Err(ScenarioError::MalformedRow {
                row,
                found: record.len(),
            });
        }

        let action = record[1].to_string();
        let value = || parse_value(row, &record[2]);

        let command = match record[0].trim() {
            "add" => ScenarioCommand::Add {
                action,
                time: value()?,
            },
            "addasync" => ScenarioCommand::AddAsync {
                action,
                time: value()?,
            },
            "getasync" => ScenarioCommand::GetAsync { action },
            "sync" => ScenarioCommand::Sync,
            "get" => ScenarioCommand::Get {
                action,
                expected: value()?,
            },
            other => {
                return Err(ScenarioError::UnknownCommand {
                    row,
                    command: other.to_string(),
                })
            }
        };
        commands.push(command);
    }

    Ok(commands)
}

fn parse_value(row: usize, value: &str) -> Result<f64, ScenarioError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| ScenarioError::InvalidValue {
            row,
            value: value.to_string(),
        })
}

/// Write commands in script form
pub fn write_script<W: Write>(
    writer: W,
    commands: &[ScenarioCommand],
) -> Result<(), ScenarioError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote(QUOTE)
        .from_writer(writer);

    for command in commands {
        csv_writer.write_record(command.to_record())?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_commands() {
        let script = "add,jump,1\naddasync,jump,2.5\ngetasync,jump,0\nsync,,0\nget,jump,1.75\n";
        let commands = parse_script(script.as_bytes()).unwrap();

        assert_eq!(
            commands,
            vec![
                ScenarioCommand::Add {
                    action: "jump".to_string(),
                    time: 1.0
                },
                ScenarioCommand::AddAsync {
                    action: "jump".to_string(),
                    time: 2.5
                },
                ScenarioCommand::GetAsync {
                    action: "jump".to_string()
                },
                ScenarioCommand::Sync,
                ScenarioCommand::Get {
                    action: "jump".to_string(),
                    expected: 1.75
                },
            ]
        );
    }

    #[test]
    fn test_parse_quoted_action() {
        let commands = parse_script("add,|jump, high|,3\n".as_bytes()).unwrap();
        assert_eq!(
            commands[0],
            ScenarioCommand::Add {
                action: "jump, high".to_string(),
                time: 3.0
            }
        );
    }

    #[test]
    fn test_parse_errors_report_row() {
        let err = parse_script("add,jump,1\nfly,jump,1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ScenarioError::UnknownCommand { row: 2, .. }));

        let err = parse_script("add,jump,fast\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ScenarioError::InvalidValue { row: 1, .. }));

        let err = parse_script("sync,0\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ScenarioError::MalformedRow { row: 1, found: 2 }));
    }

    #[test]
    fn test_value_ignored_for_sync_and_getasync() {
        let commands = parse_script("getasync,jump,\nsync,,\n".as_bytes()).unwrap();
        assert_eq!(commands.len(), 2);
    }

    #[test]
    fn test_written_script_parses_back() {
        let commands = vec![
            ScenarioCommand::AddAsync {
                action: "a,b".to_string(),
                time: 0.125,
            },
            ScenarioCommand::Sync,
            ScenarioCommand::Get {
                action: "a,b".to_string(),
                expected: 0.125,
            },
        ];

        let mut buffer = Vec::new();
        write_script(&mut buffer, &commands).unwrap();
        let text = String::from_utf8(buffer.clone()).unwrap();
        assert!(text.contains("|a,b|"));

        assert_eq!(parse_script(buffer.as_slice()).unwrap(), commands);
    }
}
