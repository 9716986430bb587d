use std::fs;

use tracing::debug;

use super::params::InvocationRequest;
use crate::error::{Error, Result};

/// Checks the input is a regular file and creates the output directory tree.
/// A no-op for tools that leave path validation to the external program.
pub fn prepare_paths(request: &InvocationRequest) -> Result<()> {
    if !request.tool.validates_paths() {
        debug!("{} validates its own paths; skipping checks", request.tool);
        return Ok(());
    }

    if !request.input.is_file() {
        return Err(Error::InputNotFound {
            path: request.input.clone(),
        });
    }

    fs::create_dir_all(&request.output).map_err(|source| Error::OutputDir {
        path: request.output.clone(),
        source,
    })?;

    Ok(())
}
