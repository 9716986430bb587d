use std::ffi::{OsStr, OsString};
use std::fmt;

use super::params::InvocationRequest;
use crate::types::Tool;

/// Child argv, runtime first. Built once from a request and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandVector {
    tokens: Vec<OsString>,
}

impl CommandVector {
    /// Lays out the tool-specific flags in the order each tool's CLI expects:
    ///
    /// - Demucs: `<runtime> -m demucs -n <model> -o <output> <input>`
    /// - Spleeter: `<runtime> -m spleeter separate -p <preset> -i <input> -o <output>`
    pub fn build(request: &InvocationRequest) -> Self {
        let mut tokens: Vec<OsString> = vec![
            request.runtime.clone().into_os_string(),
            "-m".into(),
            request.tool.module().into(),
        ];

        match request.tool {
            Tool::Demucs => {
                tokens.push("-n".into());
                tokens.push(request.selector.clone().into());
                tokens.push("-o".into());
                tokens.push(request.output.clone().into_os_string());
                tokens.push(request.input.clone().into_os_string());
            }
            Tool::Spleeter => {
                tokens.push("separate".into());
                tokens.push("-p".into());
                tokens.push(request.selector.clone().into());
                tokens.push("-i".into());
                tokens.push(request.input.clone().into_os_string());
                tokens.push("-o".into());
                tokens.push(request.output.clone().into_os_string());
            }
        }

        Self { tokens }
    }

    pub fn program(&self) -> &OsStr {
        &self.tokens[0]
    }

    pub fn args(&self) -> &[OsString] {
        &self.tokens[1..]
    }

    pub fn tokens_lossy(&self) -> Vec<String> {
        self.tokens
            .iter()
            .map(|t| t.to_string_lossy().into_owned())
            .collect()
    }
}

impl fmt::Display for CommandVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens_lossy().join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demucs_layout() {
        let req = InvocationRequest::new(Tool::Demucs, "song.wav", "out/").with_runtime("py");
        let cmd = CommandVector::build(&req);
        assert_eq!(
            cmd.tokens_lossy(),
            ["py", "-m", "demucs", "-n", "htdemucs", "-o", "out/", "song.wav"]
        );
        assert_eq!(cmd.program(), OsStr::new("py"));
        assert_eq!(cmd.args().len(), 7);
    }

    #[test]
    fn spleeter_layout_uses_subcommand_and_flag_pairs() {
        let req = InvocationRequest::new(Tool::Spleeter, "in.mp3", "stems")
            .with_runtime("py")
            .with_selector("spleeter:4stems");
        let cmd = CommandVector::build(&req);
        assert_eq!(
            cmd.tokens_lossy(),
            [
                "py",
                "-m",
                "spleeter",
                "separate",
                "-p",
                "spleeter:4stems",
                "-i",
                "in.mp3",
                "-o",
                "stems"
            ]
        );
    }

    #[test]
    fn selector_is_passed_verbatim() {
        let req = InvocationRequest::new(Tool::Demucs, "a b.wav", "x")
            .with_runtime("py")
            .with_selector("");
        let cmd = CommandVector::build(&req);
        let tokens = cmd.tokens_lossy();
        assert_eq!(tokens[4], "");
        assert_eq!(tokens[7], "a b.wav");
    }

    #[test]
    fn display_joins_with_spaces() {
        let req = InvocationRequest::new(Tool::Demucs, "s.wav", "o").with_runtime("py");
        assert_eq!(
            CommandVector::build(&req).to_string(),
            "py -m demucs -n htdemucs -o o s.wav"
        );
    }
}
