//! The Convert façade (spec §4.4): the single entry point composing
//! `ts2rs-resolver` and `ts2rs-emitter` for a caller that just wants a
//! surface project converted to Rust source text.

mod convert;
mod options;

pub use convert::{ConvertOutput, convert};
pub use options::ConvertOptions;
