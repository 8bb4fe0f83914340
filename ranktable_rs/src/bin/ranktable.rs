use std::process::ExitCode;

fn main() -> ExitCode {
    ranktable::cli::run()
}
