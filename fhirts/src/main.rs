mod commands;
mod ops;
mod reports;

use std::process::ExitCode;

use clap::Parser;
use eyre::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::Cli;

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let errors = cli.run()?;
    Ok(exit_code(errors))
}

/// Logs go to stderr so stdout stays reserved for reports and errors.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "fhirts=info,fhirts_spec=info,fhirts_codegen=info,fhirts_codegen_typescript=info",
        _ => "debug",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// The exit status is the number of errors, saturating at 255.
fn exit_code(errors: usize) -> ExitCode {
    ExitCode::from(u8::try_from(errors).unwrap_or(u8::MAX))
}
