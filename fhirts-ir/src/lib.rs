//! Resolved type graph for the fhirts generator.
//!
//! This crate provides the closed set of type variants the resolver produces
//! and the emitters consume.
//!
//! # Architecture
//!
//! ```text
//! JSON definitions → fhirts-spec (loading) → resolver → fhirts-ir (type graph) → emitter
//! ```
//!
//! The IR types are designed to be:
//! - Language-agnostic (no TypeScript-specific concerns)
//! - Name-addressed (types refer to each other by name, never by pointer)

mod enumeration;
mod graph;
mod types;

pub use enumeration::{EnumMember, EnumType};
pub use fhirts_core::IntrinsicType;
pub use graph::TypeGraph;
pub use types::{
    AliasType, InterfaceType, ObjectType, PrimitiveType, Property, Type, TypeCategory,
    TypeReference,
};
