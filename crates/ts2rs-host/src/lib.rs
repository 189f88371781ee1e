//! The Host Query API (spec §4.1): the abstraction the Resolver is driven
//! through so that the surface language's own parser and type checker stay
//! an external collaborator (spec §1). A production integration implements
//! `HostQuery` on top of a real structural type checker; this crate also
//! ships `MemoryHost`, an in-memory implementation used by this workspace's
//! own test suite.

pub mod memory_host;
pub mod traits;

pub use memory_host::MemoryHost;
pub use traits::{
    AliasSymbol, Declaration, DeclarationKind, HostQuery, PropertySignature, SyntacticTypeNode,
    TypeHandle,
};
