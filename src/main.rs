//! CLI entry point for the escape-time field renderer

use clap::Parser;
use escapefield::fractal::FieldConfig;
use escapefield::io::cli::{Cli, FieldProcessor};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => report(&error),
    }
}

fn run(cli: Cli) -> escapefield::Result<()> {
    let config = FieldConfig::standard()?;
    FieldProcessor::new(cli, config).process()?;
    Ok(())
}

// Allow print for the final error message
#[allow(clippy::print_stderr)]
fn report(error: &escapefield::FieldError) -> ExitCode {
    eprintln!("{error}");
    ExitCode::from(error.exit_code())
}
