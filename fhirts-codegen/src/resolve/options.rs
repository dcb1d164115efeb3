use fhirts_core::IntrinsicType;
use fhirts_spec::Config;
use indexmap::IndexMap;

/// Names longer than this are not used for enumeration members.
pub const MAX_NAME_LENGTH: usize = 56;

/// Tables the resolver consults while building the graph.
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Primitive structure name to intrinsic representation.
    pub primitives: IndexMap<String, IntrinsicType>,
    /// Punctuation code to member name.
    pub symbols: IndexMap<String, String>,
    pub max_name_length: usize,
}

impl ResolveOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            primitives: config.primitives.clone(),
            symbols: config.symbols.clone(),
            max_name_length: MAX_NAME_LENGTH,
        }
    }
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
