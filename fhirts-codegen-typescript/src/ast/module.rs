//! Ambient module declarations.

use fhirts_codegen::builder::{CodeFragment, Renderable};

/// `declare module <name> { ... }` wrapping a list of declarations.
///
/// Declarations are separated by blank lines.
#[derive(Debug, Clone, Default)]
pub struct Module {
    name: String,
    body: Vec<Vec<CodeFragment>>,
}

impl Module {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: Vec::new(),
        }
    }

    pub fn add(&mut self, node: impl Renderable) -> &mut Self {
        self.body.push(node.to_fragments());
        self
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl Renderable for Module {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::braced(
            format!("declare module {}", self.name),
            vec![CodeFragment::Declarations(self.body.clone())],
        )]
    }
}
