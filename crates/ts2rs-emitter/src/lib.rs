//! The Emitter (spec §4.3): deterministically renders the closed IR
//! produced by `ts2rs-resolver` into Rust source text, with `serde`
//! attributes preserving the original wire format.

mod alias_decl;
mod emitter;
mod enum_decl;
mod imports;
mod naming;
mod options;
mod render_type;
mod struct_decl;
mod union_decl;

pub use emitter::{EmitOutput, Emitter};
pub use options::{EmitterOptions, TypeMapping};
