//! TypeScript AST builders for the declaration files.
//!
//! These provide a high-level API for constructing TypeScript syntax,
//! which can then be rendered via CodeBuilder.

mod enums;
mod interface;
mod module;
mod types;

pub use enums::{Enum, EnumVariant};
pub use interface::{Interface, InterfaceField};
pub use module::Module;
pub use types::{TypeAlias, Union};
