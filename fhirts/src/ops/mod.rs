//! Core operations.
//!
//! This module contains the business logic for fhirts commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;

use std::path::Path;

use eyre::{Context, Result};
use fhirts_codegen::pipeline::{
    CompilationContext, Diagnostic, Pipeline, SnapshotPlugin, TimingPlugin,
};
use fhirts_spec::Config;

pub use check::check;
pub use generate::{GenerateOptions, generate};

/// Run the load, resolve and validate phases, snapshotting into `snapshot_dir`
/// when given.
fn run_pipeline(config: Config, snapshot_dir: Option<&Path>) -> Result<CompilationContext> {
    let mut pipeline = Pipeline::new().plugin(TimingPlugin::new());
    if let Some(dir) = snapshot_dir {
        tracing::debug!(dir = %dir.display(), "writing pipeline snapshots");
        pipeline = pipeline.plugin(SnapshotPlugin::with_output_dir(dir));
    }
    pipeline.run(config).wrap_err("Pipeline failed")
}

fn error_lines(ctx: &CompilationContext) -> Vec<String> {
    ctx.errors().map(Diagnostic::to_string).collect()
}

fn warning_lines(ctx: &CompilationContext) -> Vec<String> {
    ctx.warnings().map(Diagnostic::to_string).collect()
}

/// A specification directory with two primitives and two resources.
#[cfg(test)]
pub(crate) fn fixture_spec() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let write = |name: &str, content: &str| std::fs::write(dir.path().join(name), content).unwrap();

    for primitive in ["string", "boolean"] {
        write(
            &format!("{primitive}.profile.json"),
            &format!(
                r#"{{"resourceType": "StructureDefinition", "id": "{primitive}", "kind": "primitive-type",
                    "differential": {{"element": [{{"path": "{primitive}", "short": "Primitive Type {primitive}"}}]}}}}"#
            ),
        );
    }
    write(
        "resource.profile.json",
        r#"{"resourceType": "StructureDefinition", "id": "Resource", "kind": "resource", "abstract": true,
            "differential": {"element": [
                {"path": "Resource", "short": "Base Resource"},
                {"path": "Resource.id", "min": 0, "max": "1", "type": [{"code": "string"}]}
            ]}}"#,
    );
    write(
        "patient.profile.json",
        r#"{"resourceType": "StructureDefinition", "id": "Patient", "kind": "resource",
            "baseDefinition": "http://hl7.org/fhir/StructureDefinition/Resource",
            "differential": {"element": [
                {"path": "Patient", "short": "Information about an individual"},
                {"path": "Patient.active", "min": 0, "max": "1", "type": [{"code": "boolean"}]}
            ]}}"#,
    );

    dir
}
