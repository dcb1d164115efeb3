//! Text layout shared by the emitters.
//!
//! Emitter nodes implement [`Renderable`] and describe themselves as
//! [`CodeFragment`]s. A [`CodeBuilder`] turns fragments into text at a
//! given [`Indent`].

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
