//! Core utilities and types for the fhirts generator.
//!
//! This crate provides fundamental types and utilities used across
//! the fhirts workspace.

mod file;
mod intrinsic;
pub mod naming;

// File operations
pub use file::{GeneratedFile, WriteResult, write_file};
// Fundamental types
pub use intrinsic::{IntrinsicType, ParseIntrinsicError};
// Naming
pub use naming::{format_name, starts_with_number, with_suffix};
