//! Error handling utilities
//!
//! This module provides centralized error handling for the application.

use crate::error::{describe_error_code, ConfigError, RecordError, ScenarioError};
use tracing::error;

/// Exit code for an error, based on the typed error at the root of the chain
pub fn exit_code_for(error: &anyhow::Error) -> i32 {
    if error.downcast_ref::<ConfigError>().is_some() {
        2
    } else if error.downcast_ref::<RecordError>().is_some() {
        3
    } else if error.downcast_ref::<ScenarioError>().is_some() {
        4
    } else {
        1
    }
}

fn error_code(error: &anyhow::Error) -> Option<u16> {
    if let Some(err) = error.downcast_ref::<ConfigError>() {
        Some(err.code())
    } else if let Some(err) = error.downcast_ref::<RecordError>() {
        Some(err.code())
    } else {
        error.downcast_ref::<ScenarioError>().map(ScenarioError::code)
    }
}

/// Handle fatal errors and exit with appropriate status code
///
/// # Verbose Mode Behavior
/// - `verbose = 0`: The error message only
/// - `verbose >= 1`: Includes the error code description and the full error chain
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {}", error);

    match error_code(&error) {
        Some(code) => eprintln!("Error [E{code:04}]: {error}"),
        None => eprintln!("Error: {error}"),
    }

    if verbose >= 1 {
        if let Some(code) = error_code(&error) {
            eprintln!("  ({})", describe_error_code(code));
        }
        eprintln!("\nError chain:");
        for (i, cause) in error.chain().enumerate() {
            eprintln!("  {}: {}", i, cause);
        }
    }

    std::process::exit(exit_code_for(&error))
}
