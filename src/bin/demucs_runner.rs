//! Demucs runner entrypoint: parse flags, check the input file, create the
//! output directory, run `python -m demucs`, and exit with its status.

use clap::Parser;

use stemrun::cli::{DemucsArgs, run_demucs};

fn main() {
    let args = DemucsArgs::parse();
    std::process::exit(run_demucs(args));
}
