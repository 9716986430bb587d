use tracing_subscriber::EnvFilter;

use crate::api;
use crate::core::params::InvocationRequest;
use crate::io::SystemInvoker;
use crate::report::{exit_code, report_error};
use crate::types::Tool;

use super::args::{DemucsArgs, RuntimeArgs, SpleeterArgs};

/// Installs a stderr subscriber scoped to this crate. Later calls are no-ops.
pub fn init_logging(tool: Tool, runtime: &RuntimeArgs) {
    let level = if runtime.log {
        tracing::Level::DEBUG
    } else {
        tool.default_log_level()
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!(
            "stemrun={}",
            level.as_str().to_ascii_lowercase()
        )))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .try_init();
}

fn execute(request: InvocationRequest, runtime: &RuntimeArgs) -> i32 {
    init_logging(request.tool, runtime);

    let outcome = api::run(&request, &SystemInvoker);
    if let Err(err) = &outcome {
        report_error(request.tool, err);
    }
    exit_code(&outcome)
}

pub fn run_demucs(args: DemucsArgs) -> i32 {
    let request = InvocationRequest::new(Tool::Demucs, args.input, args.output)
        .with_selector(args.model)
        .with_runtime(args.runtime.python.clone());
    execute(request, &args.runtime)
}

pub fn run_spleeter(args: SpleeterArgs) -> i32 {
    let request = InvocationRequest::new(Tool::Spleeter, args.input, args.output)
        .with_selector(args.preset)
        .with_runtime(args.runtime.python.clone());
    execute(request, &args.runtime)
}
