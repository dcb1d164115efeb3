//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from loading and resolving the specification.
#[derive(Debug)]
pub struct CheckReport {
    /// Specification directory that was checked.
    pub spec_dir: PathBuf,
    /// Error lines, `file: message` where the file is known.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Number of resolved types per category, in first-seen order.
    pub categories: Vec<(&'static str, usize)>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub(crate) fn type_count(&self) -> usize {
        self.categories.iter().map(|(_, count)| count).sum()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        for error in &self.errors {
            out.error(error);
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} resolved", self.spec_dir.display()));
        out.newline();
        out.section(&format!("Types ({})", self.type_count()));
        for (category, count) in &self.categories {
            out.list_item(&format!("{category}: {count}"));
        }
    }
}
