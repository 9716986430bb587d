use std::process::{Command, ExitStatus};

use tracing::debug;

use crate::core::command::CommandVector;
use crate::error::{Error, Result};
use crate::types::InvocationResult;

/// Runs a command vector to completion and reports how the child exited.
pub trait Invoker {
    fn invoke(&self, command: &CommandVector) -> Result<InvocationResult>;
}

/// Spawns a real child process with inherited stdio and blocks until it exits.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemInvoker;

impl Invoker for SystemInvoker {
    fn invoke(&self, command: &CommandVector) -> Result<InvocationResult> {
        debug!("spawning {:?}", command.program());
        let status = Command::new(command.program())
            .args(command.args())
            .status()
            .map_err(|source| Error::Spawn {
                program: command.program().to_string_lossy().into_owned(),
                source,
            })?;

        Ok(InvocationResult {
            exit_code: exit_code_of(status),
        })
    }
}

/// Exit code of a finished child. A child killed by a signal has no code; on Unix
/// that becomes the negated signal number, elsewhere `1`.
pub fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }

    1
}
