//! The closed intermediate representation that is the Resolver ↔ Emitter
//! contract (spec §3). This crate has no behavior of its own beyond the
//! invariant-preserving constructors on `ResolvedType` — discovery,
//! classification, and rendering live in `ts2rs-resolver` and
//! `ts2rs-emitter`.

pub mod collected;
pub mod literal;
pub mod resolved_type;

pub use collected::{CollectedType, EnumVariant, Field, UnionVariant};
pub use literal::{EnumMemberValue, LiteralValue};
pub use resolved_type::{PrimitiveKind, ResolvedType};
