//! Opens the window and clears it every frame; no pipeline.

use std::process::ExitCode;

fn main() -> ExitCode {
    triad_demos::run::<()>("Triad Window")
}
