use std::process::ExitCode;

use triad_demos::scenes::Sierpinski;

fn main() -> ExitCode {
    triad_demos::run::<Sierpinski>("Triad Sierpinski")
}
