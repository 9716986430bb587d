//! High-level library API: run one separation request end to end.
//! Prefer this entrypoint over wiring `core` and `io` by hand when embedding
//! the runners in another program.
use tracing::info;

use crate::core::command::CommandVector;
use crate::core::params::InvocationRequest;
use crate::core::validate::prepare_paths;
use crate::error::Result;
use crate::io::Invoker;
use crate::types::InvocationResult;

/// Validate (when the tool asks for it), build the command vector, and hand it
/// to `invoker`. Nothing is spawned if validation fails.
pub fn run(request: &InvocationRequest, invoker: &dyn Invoker) -> Result<InvocationResult> {
    info!("Input file: {}", request.input.display());
    info!("Output directory: {}", request.output.display());
    info!("{}: {}", request.tool.selector_label(), request.selector);

    prepare_paths(request)?;

    let command = CommandVector::build(request);
    info!("Running command: {}", command);

    let result = invoker.invoke(&command)?;
    info!("{} exit code: {}", request.tool, result.exit_code);
    Ok(result)
}
