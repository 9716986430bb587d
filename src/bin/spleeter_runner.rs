//! Spleeter runner entrypoint. Paths are handed to Spleeter unchecked.

use clap::Parser;

use stemrun::cli::{SpleeterArgs, run_spleeter};

fn main() {
    let args = SpleeterArgs::parse();
    std::process::exit(run_spleeter(args));
}
