#![doc = r#"
stemrun: thin runners for external audio stem separators.

Two binaries ship with this crate:

- `demucs_runner` checks that the input file exists and creates the output directory.
  It then runs `python -m demucs -n <model> -o <output> <input>`.
- `spleeter_runner` runs `python -m spleeter separate -p <preset> -i <input> -o <output>`
  and leaves path validation to Spleeter.

Both runners inherit the child's stdout/stderr and exit with the child's exit code. They
exit with `1` when the child could not be started or a precondition failed, and with
clap's usage code when flags are wrong.

Library use
-----------
```rust,no_run
use stemrun::{InvocationRequest, SystemInvoker, Tool, api};

fn main() -> stemrun::Result<()> {
    let request = InvocationRequest::new(Tool::Demucs, "song.wav", "stems/")
        .with_selector("htdemucs_ft")
        .with_runtime("/opt/venv/bin/python");

    let result = api::run(&request, &SystemInvoker)?;
    println!("demucs exited with {}", result.exit_code);
    Ok(())
}
```

Inspecting the command without running it
-----------------------------------------
```rust
use stemrun::{CommandVector, InvocationRequest, Tool};

let request = InvocationRequest::new(Tool::Spleeter, "in.mp3", "out").with_runtime("python3");
assert_eq!(
    CommandVector::build(&request).to_string(),
    "python3 -m spleeter separate -p spleeter:2stems -i in.mp3 -o out"
);
```

Useful modules
--------------
- [`api`]: end-to-end `run`.
- [`core`]: request, command builder, path validation.
- [`io`]: the `Invoker` seam and `SystemInvoker`.
- [`report`]: exit-code mapping and diagnostics.
- [`error`]: crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod cli;
pub mod core;
pub mod error;
pub mod io;
pub mod report;
pub mod types;

pub use crate::core::command::CommandVector;
pub use crate::core::params::InvocationRequest;
pub use error::{Error, Result};
pub use io::{Invoker, SystemInvoker};
pub use types::{InvocationResult, Tool};
