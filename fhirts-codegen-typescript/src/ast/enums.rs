//! TypeScript string enum builder.

use fhirts_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A member of a string enum.
#[derive(Debug, Clone)]
pub struct EnumVariant {
    pub name: String,
    pub value: String,
    pub doc: Option<String>,
}

impl EnumVariant {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            doc: None,
        }
    }

    pub fn doc(mut self, doc: Option<impl Into<String>>) -> Self {
        self.doc = doc.map(Into::into);
        self
    }
}

/// Builder for exported string enums (`export enum X { A = "a" }`).
#[derive(Debug, Clone)]
pub struct Enum {
    name: String,
    doc: Option<String>,
    variants: Vec<EnumVariant>,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            variants: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: Option<impl Into<String>>) -> Self {
        self.doc = doc.map(Into::into);
        self
    }

    pub fn variant(mut self, variant: EnumVariant) -> Self {
        self.variants.push(variant);
        self
    }

    /// Build the enum as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Enum {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let last = self.variants.len().saturating_sub(1);
        let body = self
            .variants
            .iter()
            .enumerate()
            .flat_map(|(i, variant)| {
                let separator = if i == last { "" } else { "," };
                [
                    CodeFragment::doc(variant.doc.as_deref()),
                    CodeFragment::Line(format!(
                        "{} = \"{}\"{}",
                        variant.name,
                        escape(&variant.value),
                        separator
                    )),
                ]
            })
            .collect();

        vec![
            CodeFragment::doc(self.doc.as_deref()),
            CodeFragment::braced(format!("export enum {}", self.name), body),
        ]
    }
}

/// Escape a value for use inside a double-quoted string literal.
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
    out
}
