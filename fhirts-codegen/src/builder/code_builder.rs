//! Line-oriented writer for declaration files.

use super::{CodeFragment, Indent, Renderable};

/// Writes indented lines into a string buffer.
///
/// Methods prefixed with `push_` borrow the builder mutably; the others
/// consume and return it for chaining.
///
/// ```
/// use fhirts_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::typescript()
///     .braced("declare module fhir", |b| b.line("type id = string;"))
///     .build();
///
/// assert_eq!(code, "declare module fhir {\n    type id = string;\n}\n");
/// ```
///
/// ```
/// use fhirts_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::typescript();
/// builder
///     .push_jsdoc("A stream of bytes")
///     .push_line("type base64Binary = string;");
/// assert_eq!(
///     builder.build(),
///     "/**\n * A stream of bytes\n */\ntype base64Binary = string;\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    depth: usize,
    unit: String,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            depth: 0,
            unit: indent.unit(),
            buffer: String::new(),
        }
    }

    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    pub fn push_line(&mut self, s: &str) -> &mut Self {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.unit);
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    /// Write `text` as a JSDoc block. Empty text writes nothing.
    ///
    /// Each line of `text` becomes one ` * ` line; carriage returns are dropped.
    pub fn push_jsdoc(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            return self;
        }
        self.push_line("/**");
        for line in text.lines() {
            self.push_line(&format!(" * {line}"));
        }
        self.push_line(" */")
    }

    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(&fragment);
        }
        self
    }

    pub fn apply_fragment(&mut self, fragment: &CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Braced { header, body } => {
                self.push_line(&format!("{header} {{"));
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                self.push_line("}");
            }
            CodeFragment::JsDoc(text) => {
                self.push_jsdoc(text);
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
            CodeFragment::Declarations(groups) => {
                for (i, group) in groups.iter().enumerate() {
                    if i > 0 {
                        self.push_blank();
                    }
                    for f in group {
                        self.apply_fragment(f);
                    }
                }
            }
        }
    }

    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    pub fn jsdoc(mut self, text: &str) -> Self {
        self.push_jsdoc(text);
        self
    }

    /// Write `header {`, the body built by `f` one level deeper, then `}`.
    pub fn braced<F>(self, header: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let mut builder = f(self.line(&format!("{header} {{")).indented());
        builder.push_dedent();
        builder.line("}")
    }

    fn indented(mut self) -> Self {
        self.push_indent();
        self
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn build(self) -> String {
        self.buffer
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::typescript()
    }
}
