//! Strongly-typed view of the specification documents the generator reads.

mod common;
mod structure_definition;
mod value_set;

pub use common::{Extension, OneOrMany, Reference, extension_value_string};
pub use structure_definition::{
    BindingStrength, Differential, ElementBinding, ElementDefinition, ElementType,
    StructureDefinition, StructureKind,
};
pub use value_set::{CodeSystem, Compose, Concept, Filter, Include, InlineCodeSystem, ValueSet};
