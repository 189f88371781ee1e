//! Centralized limits for the Resolver.
//!
//! The `processing` cycle sentinel (§4.2.1 of the spec) already makes
//! self- and mutually-recursive named types safe; this limit exists purely
//! as a backstop against pathological nesting that never revisits a name
//! (deeply nested anonymous object literals, for instance), which the
//! sentinel cannot see.

/// Maximum depth of nested `resolve_type` calls before the Resolver aborts
/// with `ConvertError::TypeConversion`. Chosen generously above any
/// plausible hand-written surface type; exists only to turn a stack
/// overflow into a catchable error.
pub const MAX_TYPE_RESOLUTION_DEPTH: usize = 256;

/// Maximum number of warnings accumulated in a single run before the
/// Resolver stops recording new ones (the run still completes). Guards
/// against unbounded memory growth when a single pathological alias is
/// used at thousands of sites.
pub const MAX_WARNINGS: usize = 10_000;
