use std::process::ExitCode;

use triad_demos::scenes::Triangle;

fn main() -> ExitCode {
    triad_demos::run::<Triangle>("Triad Triangle")
}
