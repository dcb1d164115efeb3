mod check;
mod completions;
mod generate;

use std::path::{Path, PathBuf};

use check::CheckCommand;
use clap::{ArgAction, Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use fhirts_spec::{Config, FhirtsToml};
use generate::GenerateCommand;

/// Default config file, used when present in the working directory.
const DEFAULT_CONFIG: &str = "fhirts.toml";

/// Extension trait for exiting on config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for fhirts_spec::ConfigResult<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "fhirts")]
#[command(version)]
#[command(about = "Generate TypeScript declarations from the FHIR specification")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Run the selected command and return the number of errors reported.
    pub fn run(&self) -> Result<usize> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run().map(|()| 0),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate fhir.d.ts and valueSets.ts from the specification
    Generate(GenerateCommand),

    /// Load and resolve the specification without writing anything
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Options shared by commands that run the pipeline.
#[derive(Args)]
pub(crate) struct PipelineArgs {
    /// Path to fhirts.toml (defaults to ./fhirts.toml when it exists)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory holding the specification's JSON definitions
    #[arg(short, long)]
    pub spec: Option<PathBuf>,

    /// Write a JSON snapshot of the pipeline state after each phase
    #[arg(long, value_name = "DIR")]
    pub snapshot: Option<PathBuf>,
}

impl PipelineArgs {
    /// Load the configuration, then apply command-line overrides.
    pub fn config(&self) -> Config {
        let mut config = match &self.config {
            Some(path) => FhirtsToml::open(path).unwrap_or_exit().into_config(),
            None if Path::new(DEFAULT_CONFIG).exists() => {
                FhirtsToml::open(DEFAULT_CONFIG).unwrap_or_exit().into_config()
            }
            None => Config::default(),
        };

        if let Some(spec) = &self.spec {
            config.paths.spec = spec.clone();
        }
        config
    }
}
