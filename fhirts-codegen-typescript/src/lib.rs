//! TypeScript declaration emitter for the fhirts generator.
//!
//! # Usage
//!
//! This crate is used internally by the `fhirts` CLI tool. You typically
//! don't need to use it directly.
//!
//! ```ignore
//! use fhirts_codegen::pipeline::Pipeline;
//! use fhirts_codegen_typescript::{Generator, LanguageCodegen};
//! use std::path::Path;
//!
//! let ctx = Pipeline::new().run(config)?;
//! let generator = Generator::from_context(&ctx)?;
//!
//! // Preview files without writing
//! let (files, errors) = generator.preview();
//!
//! // Generate files to disk
//! let result = generator.generate(Path::new("out"))?;
//! ```
//!
//! # Generated Output
//!
//! - `fhir.d.ts` - interfaces and primitive aliases inside `declare module fhir`,
//!   plus a union of every concrete resource
//! - `valueSets.ts` - one exported string enum per value set

mod code_file;
mod generator;
mod type_expr;
mod type_mapper;

pub mod ast;
pub mod files;

pub use code_file::CodeFile;
pub use fhirts_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use generator::Generator;
pub use type_expr::{render_type, trim_union};
pub use type_mapper::TypeScriptTypeMapper;
