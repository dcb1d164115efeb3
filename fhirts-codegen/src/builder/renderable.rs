//! Declaration fragments and the trait for nodes that produce them.

/// A piece of a generated declaration file.
///
/// Nodes describe their output as fragments; [`CodeBuilder`](super::CodeBuilder)
/// decides indentation and line endings.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line at the current indentation.
    Line(String),
    /// An empty line, never indented.
    Blank,
    /// `header {`, the body one level deeper, then `}`.
    Braced {
        header: String,
        body: Vec<CodeFragment>,
    },
    /// A `/** ... */` comment, one ` * ` line per line of text.
    JsDoc(String),
    /// Fragments emitted one after another.
    Sequence(Vec<CodeFragment>),
    /// Top-level declarations with one blank line between each.
    Declarations(Vec<Vec<CodeFragment>>),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn braced(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::Braced {
            header: header.into(),
            body,
        }
    }

    /// Doc comment for optional text; nothing when absent.
    pub fn doc(text: Option<&str>) -> Self {
        match text {
            Some(text) => Self::JsDoc(text.to_string()),
            None => Self::Sequence(Vec::new()),
        }
    }
}

/// A node that can be rendered into declaration fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

impl<T: Renderable + ?Sized> Renderable for Box<T> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.as_ref().to_fragments()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doc_is_empty_without_text() {
        assert_eq!(CodeFragment::doc(None), CodeFragment::Sequence(vec![]));
        assert_eq!(
            CodeFragment::doc(Some("Patient")),
            CodeFragment::JsDoc("Patient".to_string())
        );
    }

    #[test]
    fn test_boxed_node_renders_like_inner() {
        struct Alias;
        impl Renderable for Alias {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::line("type id = string;")]
            }
        }

        let boxed: Box<dyn Renderable> = Box::new(Alias);
        assert_eq!(boxed.to_fragments(), Alias.to_fragments());
    }
}
