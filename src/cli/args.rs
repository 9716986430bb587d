use clap::{Args, Parser};
use std::path::PathBuf;

use crate::core::params::DEFAULT_RUNTIME;

/// Flags shared by both runners
#[derive(Args, Debug, Clone)]
pub struct RuntimeArgs {
    /// Python interpreter that hosts the separation package
    #[arg(long, value_name = "PATH", default_value = DEFAULT_RUNTIME)]
    pub python: PathBuf,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

#[derive(Parser, Debug)]
#[command(
    name = "demucs_runner",
    version,
    args_override_self = true,
    about = "Run Demucs neural stem separation on one audio file"
)]
pub struct DemucsArgs {
    /// Input audio file (must exist)
    #[arg(long)]
    pub input: PathBuf,

    /// Output directory (created if missing)
    #[arg(long)]
    pub output: PathBuf,

    /// Demucs model name
    #[arg(long, default_value = "htdemucs")]
    pub model: String,

    #[command(flatten)]
    pub runtime: RuntimeArgs,
}

#[derive(Parser, Debug)]
#[command(
    name = "spleeter_runner",
    version,
    args_override_self = true,
    about = "Run Spleeter separation on one audio file"
)]
pub struct SpleeterArgs {
    /// Input audio file
    #[arg(long)]
    pub input: PathBuf,

    /// Output directory
    #[arg(long)]
    pub output: PathBuf,

    /// Spleeter preset, e.g. spleeter:2stems, spleeter:4stems, spleeter:5stems
    #[arg(long, default_value = "spleeter:2stems")]
    pub preset: String,

    #[command(flatten)]
    pub runtime: RuntimeArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn argument_definitions_are_consistent() {
        DemucsArgs::command().debug_assert();
        SpleeterArgs::command().debug_assert();
    }

    #[test]
    fn demucs_defaults() {
        let args =
            DemucsArgs::try_parse_from(["demucs_runner", "--input", "song.wav", "--output", "out/"])
                .unwrap();
        assert_eq!(args.input, PathBuf::from("song.wav"));
        assert_eq!(args.output, PathBuf::from("out/"));
        assert_eq!(args.model, "htdemucs");
        assert_eq!(args.runtime.python, PathBuf::from(DEFAULT_RUNTIME));
        assert!(!args.runtime.log);
    }

    #[test]
    fn spleeter_preset_and_python_override() {
        let args = SpleeterArgs::try_parse_from([
            "spleeter_runner",
            "--input",
            "a.mp3",
            "--output",
            "b",
            "--preset",
            "spleeter:5stems",
            "--python",
            "/opt/venv/bin/python",
            "--log",
        ])
        .unwrap();
        assert_eq!(args.preset, "spleeter:5stems");
        assert_eq!(args.runtime.python, PathBuf::from("/opt/venv/bin/python"));
        assert!(args.runtime.log);
    }

    #[test]
    fn missing_required_flags_are_usage_errors() {
        let err = DemucsArgs::try_parse_from(["demucs_runner", "--output", "out"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = SpleeterArgs::try_parse_from(["spleeter_runner", "--input", "a"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn repeated_flags_keep_the_last_value() {
        let args = DemucsArgs::try_parse_from([
            "demucs_runner",
            "--input",
            "first.wav",
            "--output",
            "a",
            "--input",
            "second.wav",
            "--output",
            "b",
        ])
        .unwrap();
        assert_eq!(args.input, PathBuf::from("second.wav"));
        assert_eq!(args.output, PathBuf::from("b"));

        let args = SpleeterArgs::try_parse_from([
            "spleeter_runner",
            "--input",
            "in.wav",
            "--output",
            "out",
            "--preset",
            "spleeter:4stems",
            "--preset",
            "spleeter:5stems",
        ])
        .unwrap();
        assert_eq!(args.preset, "spleeter:5stems");
    }

    #[test]
    fn flag_without_value_is_rejected() {
        let err = DemucsArgs::try_parse_from(["demucs_runner", "--input", "a", "--output"])
            .unwrap_err();
        assert_ne!(err.kind(), ErrorKind::DisplayHelp);
        assert_eq!(err.exit_code(), 2);
    }
}
