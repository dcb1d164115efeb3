//! Per-document resolution state, kept beside the documents rather than on them.

/// Depth-first traversal colour of a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum Colour {
    #[default]
    Unvisited,
    InProgress,
    Done,
}

/// Index of a type in the resolver's arena.
pub(crate) type TypeId = usize;

#[derive(Debug, Default)]
pub(crate) struct DocState {
    pub colour: Colour,
    /// Selected for the output list.
    pub referenced: bool,
    /// Name hint left by the first element bound to this document.
    pub symbol: Option<String>,
    /// The type this document resolved to, possibly still being built.
    pub ty: Option<TypeId>,
}
