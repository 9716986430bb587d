//! Shared types: the `Tool` being wrapped and the `InvocationResult` it yields.
use std::fmt;

/// External separation engine a runner delegates to.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Tool {
    /// Neural stem separation (`python -m demucs`).
    Demucs,
    /// Spectrogram-based separation (`python -m spleeter separate`).
    Spleeter,
}

impl Tool {
    /// Python module passed to `-m`.
    pub fn module(self) -> &'static str {
        match self {
            Tool::Demucs => "demucs",
            Tool::Spleeter => "spleeter",
        }
    }

    /// Model name (Demucs) or preset (Spleeter) used when none is given.
    pub fn default_selector(self) -> &'static str {
        match self {
            Tool::Demucs => "htdemucs",
            Tool::Spleeter => "spleeter:2stems",
        }
    }

    /// Label the selector is reported under.
    pub fn selector_label(self) -> &'static str {
        match self {
            Tool::Demucs => "Model",
            Tool::Spleeter => "Preset",
        }
    }

    /// Only the Demucs runner checks the input file and creates the output directory;
    /// Spleeter is left to validate paths itself.
    pub fn validates_paths(self) -> bool {
        matches!(self, Tool::Demucs)
    }

    /// Level at which the runner reports progress when `--log` is not given.
    pub fn default_log_level(self) -> tracing::Level {
        match self {
            Tool::Demucs => tracing::Level::INFO,
            Tool::Spleeter => tracing::Level::WARN,
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Tool::Demucs => "Demucs",
            Tool::Spleeter => "Spleeter",
        };
        write!(f, "{}", s)
    }
}

/// Outcome of a child process that actually ran.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct InvocationResult {
    pub exit_code: i32,
}
