//! Check operation - specification loading and resolution.

use std::path::Path;

use eyre::Result;
use fhirts_spec::Config;

use super::{error_lines, run_pipeline, warning_lines};
use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs the pipeline over the specification and summarizes the resolved
/// graph. Nothing is written except pipeline snapshots.
pub fn check(config: Config, snapshot_dir: Option<&Path>) -> Result<CheckReport> {
    let spec_dir = config.paths.spec.clone();
    let ctx = run_pipeline(config, snapshot_dir)?;

    let mut categories: Vec<(&'static str, usize)> = Vec::new();
    if let Some(graph) = &ctx.graph {
        for category in graph.iter().filter_map(|ty| ty.category()) {
            let label = category.as_str();
            match categories.iter_mut().find(|(name, _)| *name == label) {
                Some((_, count)) => *count += 1,
                None => categories.push((label, 1)),
            }
        }
    }

    let report = CheckReport {
        spec_dir,
        errors: error_lines(&ctx),
        warnings: warning_lines(&ctx),
        categories,
    };
    tracing::info!(
        spec = %report.spec_dir.display(),
        types = report.type_count(),
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "check finished"
    );
    Ok(report)
}
