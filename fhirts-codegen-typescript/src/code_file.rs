//! Whole declaration files: a `//` comment header, then top-level declarations.

use fhirts_codegen::builder::{CodeBuilder, CodeFragment, Indent, Renderable};

/// A generated TypeScript file.
///
/// An empty header line renders as a bare `//`.
///
/// ```
/// use fhirts_codegen_typescript::{CodeFile, ast::TypeAlias};
///
/// let code = CodeFile::new()
///     .header("Type definitions for FHIR")
///     .add(TypeAlias::new("id", "string"))
///     .render();
///
/// assert_eq!(code, "// Type definitions for FHIR\n\ntype id = string;\n");
/// ```
#[derive(Default)]
pub struct CodeFile {
    header: Vec<String>,
    body: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line to the comment header.
    pub fn header(mut self, line: impl Into<String>) -> Self {
        self.header.push(line.into());
        self
    }

    /// Add header lines from an iterator.
    pub fn headers(mut self, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.header.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Append a top-level declaration.
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    /// Render the file with the declaration files' indentation.
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::TYPESCRIPT)
    }

    /// Render the file with custom indentation.
    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);
        for line in &self.header {
            match line.as_str() {
                "" => builder.push_line("//"),
                text => builder.push_line(&format!("// {text}")),
            };
        }
        if !self.header.is_empty() && !self.body.is_empty() {
            builder.push_blank();
        }
        builder.apply_fragment(&CodeFragment::Declarations(self.body.clone()));
        builder.build()
    }

    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.body.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Enum, EnumVariant, TypeAlias};

    #[test]
    fn test_empty_file() {
        let file = CodeFile::new();
        assert!(file.is_empty());
        assert_eq!(file.render(), "");
    }

    #[test]
    fn test_header_only() {
        let code = CodeFile::new()
            .headers(["Type definitions for FHIR", ""])
            .render();
        assert_eq!(code, "// Type definitions for FHIR\n//\n");
    }

    #[test]
    fn test_blank_lines_between_body() {
        let code = CodeFile::new()
            .add(Enum::new("A").variant(EnumVariant::new("X", "x")))
            .add(Enum::new("B").variant(EnumVariant::new("Y", "y")))
            .render();
        assert!(code.contains("}\n\nexport enum B {"));
    }

    #[test]
    fn test_add_all() {
        let code = CodeFile::new()
            .add_all([TypeAlias::new("a", "string"), TypeAlias::new("b", "number")])
            .render();
        assert_eq!(code, "type a = string;\n\ntype b = number;\n");
    }
}
