use std::path::PathBuf;

use crate::types::Tool;

#[cfg(windows)]
pub const DEFAULT_RUNTIME: &str = "python";
#[cfg(not(windows))]
pub const DEFAULT_RUNTIME: &str = "python3";

/// Everything needed to run one separation: which tool, where to read and write,
/// which model/preset, and the interpreter that hosts the tool's module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    pub tool: Tool,
    pub input: PathBuf,
    pub output: PathBuf,
    /// Model name for Demucs, preset identifier for Spleeter
    pub selector: String,
    /// Interpreter used as argv[0]; resolved through the search path if not absolute
    pub runtime: PathBuf,
}

impl InvocationRequest {
    pub fn new(tool: Tool, input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            tool,
            input: input.into(),
            output: output.into(),
            selector: tool.default_selector().to_string(),
            runtime: PathBuf::from(DEFAULT_RUNTIME),
        }
    }

    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = selector.into();
        self
    }

    pub fn with_runtime(mut self, runtime: impl Into<PathBuf>) -> Self {
        self.runtime = runtime.into();
        self
    }
}
