use clap::Args;
use eyre::Result;

use super::PipelineArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub pipeline: PipelineArgs,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<usize> {
        let config = self.pipeline.config();
        let report = ops::check(config, self.pipeline.snapshot.as_deref())?;
        report.render(&mut TerminalOutput::new());

        Ok(report.errors.len())
    }
}
