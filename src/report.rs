//! Maps a run outcome to the runner's own exit code and writes the matching
//! diagnostic to stderr.
use tracing::error;

use crate::error::{Error, Result};
use crate::types::{InvocationResult, Tool};

/// Exit code for any failure that happens before the child could run.
pub const INTERNAL_FAILURE: i32 = 1;

/// Child's code when it ran, `INTERNAL_FAILURE` otherwise. Usage errors never
/// reach here; clap exits on its own.
pub fn exit_code(outcome: &Result<InvocationResult>) -> i32 {
    match outcome {
        Ok(result) => result.exit_code,
        Err(_) => INTERNAL_FAILURE,
    }
}

/// Logs a failed run. Demucs gets the full cause chain.
pub fn report_error(tool: Tool, err: &Error) {
    match err {
        Error::InputNotFound { .. } => error!("Error: {}", err),
        Error::OutputDir { .. } | Error::Spawn { .. } => {
            if tool == Tool::Demucs {
                error!("Error running {}: {}", tool, err.chain());
            } else {
                error!("Error running {}: {}", tool, err);
            }
        }
    }
}
