//! The Resolver (spec §4.2): walks the surface type graph reachable from an
//! entry module and a set of root type names, normalizing every reachable
//! declaration into the closed IR defined by `ts2rs-ir`. Drives discovery,
//! recursion control, structural-pattern classification, and fallback
//! accounting; the only thing it depends on is the `HostQuery` trait
//! boundary in `ts2rs-host` (spec §4.1) — the surface language's own parser
//! and type checker are external collaborators (spec §1).

mod dispatch;
mod enum_decl;
mod interface;
mod options;
mod resolver;
mod type_alias;
mod union;
mod well_known;

pub use options::ResolverOptions;
pub use resolver::{ResolveOutcome, Resolver};
