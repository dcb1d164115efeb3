//! Emitter abstractions shared by target languages.

mod traits;

pub use traits::{GenerateResult, LanguageCodegen, PreviewFile, TypeMapper};
