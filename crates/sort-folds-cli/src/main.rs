use clap::Parser;
use sort_folds_cli::{Cli, logging, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logging::init() {
        eprintln!("sort-folds: failed to initialize logging: {e}");
    }

    match run(&cli) {
        Ok(report) => {
            if !cli.in_place {
                print!("{}", report.output);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "sort-folds failed");
            eprintln!("sort-folds: {e}");
            ExitCode::FAILURE
        }
    }
}
