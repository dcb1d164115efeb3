use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::PipelineArgs;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub pipeline: PipelineArgs,

    /// Output directory (overrides fhirts.toml)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Skip writing valueSets.ts
    #[arg(long)]
    pub no_value_sets: bool,

    /// Preview generated declarations without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<usize> {
        let mut config = self.pipeline.config();
        if let Some(out) = &self.out {
            config.paths.out = out.clone();
        }
        if self.no_value_sets {
            config.emit.value_sets = false;
        }

        let report = ops::generate(
            config,
            GenerateOptions {
                dry_run: self.dry_run,
                snapshot_dir: self.pipeline.snapshot.as_deref(),
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(report.errors.len())
    }
}
