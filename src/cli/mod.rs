use anyhow::Result;
use tracing_subscriber::EnvFilter;

pub use args::Arguments;
pub use exit_status::ExitStatus;

mod args;
mod exit_status;
mod prompt;
mod report;
mod run;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    for flag in &args.unsupported {
        report::print_unsupported_flag(flag);
    }

    let result = run::run(&args)?;
    report::print_summary(&result);

    Ok(ExitStatus::from(&result))
}

/// Log to stderr; `RUST_LOG` wins over the `--verbose` default.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "bundlegen=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
