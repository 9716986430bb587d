//! Command Line Interface (CLI) layer shared by both runner binaries.
//!
//! This module defines argument parsing (`args`) and the orchestration
//! logic (`runner`) that turns parsed flags into an `InvocationRequest`,
//! runs it, and yields the process exit code.
//!
//! If you are embedding the runners into another application, prefer
//! `stemrun::api` instead of calling the CLI code.
pub mod args;
pub mod runner;

pub use args::{DemucsArgs, SpleeterArgs};
pub use runner::{run_demucs, run_spleeter};
