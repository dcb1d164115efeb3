//! Generate operation - declaration files from the specification.

use std::path::Path;

use eyre::{Context, Result};
use fhirts_codegen::language::LanguageCodegen;
use fhirts_codegen_typescript::Generator;
use fhirts_spec::Config;

use super::{error_lines, run_pipeline, warning_lines};
use crate::reports::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Where to write pipeline snapshots, if anywhere.
    pub snapshot_dir: Option<&'a Path>,
}

/// Execute the generate operation.
///
/// Runs the pipeline and, if it finished without errors, emits the
/// declaration files into the configured output directory. Emitter errors
/// are reported alongside whatever could still be written.
pub fn generate(config: Config, opts: GenerateOptions) -> Result<GenerateReport> {
    let ctx = run_pipeline(config, opts.snapshot_dir)?;

    let mut report = GenerateReport {
        errors: error_lines(&ctx),
        warnings: warning_lines(&ctx),
        type_count: ctx.graph.as_ref().map_or(0, |graph| graph.len()),
        snapshot_dir: opts.snapshot_dir.map(Path::to_path_buf),
        result: None,
    };
    if !report.errors.is_empty() {
        tracing::info!(errors = report.errors.len(), "pipeline reported errors, nothing generated");
        return Ok(report);
    }

    let generator = Generator::from_context(&ctx)?;
    let output_dir = &ctx.config.paths.out;

    let result = if opts.dry_run {
        let (files, errors) = generator.preview();
        report.errors.extend(errors);
        GenerationResult::Preview(PreviewResult {
            files: files
                .into_iter()
                .map(|f| PreviewFile {
                    path: f.path,
                    content: f.content,
                })
                .collect(),
        })
    } else {
        let generated = generator
            .generate(output_dir)
            .wrap_err_with(|| format!("Failed to write declarations to {}", output_dir.display()))?;
        report.errors.extend(generated.errors);
        GenerationResult::Written(WrittenResult {
            output_dir: output_dir.clone(),
            written: generated.written,
            unchanged: generated.unchanged,
        })
    };

    tracing::info!(
        types = report.type_count,
        errors = report.errors.len(),
        dry_run = opts.dry_run,
        "generate finished"
    );
    report.result = Some(result);
    Ok(report)
}
