//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from declaration generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Error lines, `file: message` where the file is known.
    pub errors: Vec<String>,

    /// Warning messages from the pipeline.
    pub warnings: Vec<String>,

    /// Number of types in the resolved graph.
    pub type_count: usize,

    /// Path to pipeline snapshots, if requested.
    pub snapshot_dir: Option<PathBuf>,

    /// Generation result, absent when the pipeline stopped on errors.
    pub result: Option<GenerationResult>,
}

/// Result of declaration generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Files whose content changed.
    pub written: Vec<PathBuf>,
    /// Files that already had the generated content.
    pub unchanged: Vec<PathBuf>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        if let Some(dir) = &self.snapshot_dir {
            out.key_value("Pipeline snapshots written to", &dir.display().to_string());
            out.newline();
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            Some(GenerationResult::Written(written)) => self.render_written(out, written),
            Some(GenerationResult::Preview(preview)) => self.render_preview(out, preview),
            None => {}
        }

        for error in &self.errors {
            out.error(error);
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.key_value("Types", &self.type_count.to_string());
        out.key_value("Generated", &written.output_dir.display().to_string());

        for path in &written.written {
            out.added_item(&display_file(path));
        }
        for path in &written.unchanged {
            out.list_item(&format!("{} (unchanged)", display_file(path)));
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} types, {} files would be generated",
            self.type_count,
            preview.files.len()
        ));
    }
}

fn display_file(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_errors_rendered_after_results() {
        let report = GenerateReport {
            errors: vec!["patient.profile.json: Unknown base type 'Base'.".to_string()],
            warnings: vec!["bmi.profile.json: Skipping constrained type resource definition.".to_string()],
            type_count: 0,
            snapshot_dir: None,
            result: None,
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "warning: bmi.profile.json: Skipping constrained type resource definition.",
                "patient.profile.json: Unknown base type 'Base'.",
            ]
        );
    }

    #[test]
    fn test_written_files_listed() {
        let report = GenerateReport {
            errors: Vec::new(),
            warnings: Vec::new(),
            type_count: 12,
            snapshot_dir: None,
            result: Some(GenerationResult::Written(WrittenResult {
                output_dir: PathBuf::from("out"),
                written: vec![PathBuf::from("out/fhir.d.ts")],
                unchanged: vec![PathBuf::from("out/valueSets.ts")],
            })),
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "Types: 12",
                "Generated: out",
                "  + fhir.d.ts",
                "  - valueSets.ts (unchanged)",
            ]
        );
    }
}
