use std::process::ExitCode;

use bundlegen::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse_lenient(std::env::args_os());
    bundlegen::cli::init_tracing(args.verbose);

    match bundlegen::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
