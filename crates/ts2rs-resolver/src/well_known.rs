//! The built-in alias names the dispatcher (spec §4.2.5) special-cases
//! before falling back to treating a named reference as a user type.

/// Names handled by step 11 of `resolve_type`'s dispatch order rather than
/// by loading a user declaration. `Object`/`Function` and any name
/// beginning with `__` are also well-known but are recognized by a
/// predicate (`is_internal_symbol`) rather than exact match, since `__`
/// covers an open-ended family of compiler-internal names.
pub const WELL_KNOWN_CONTAINER_ALIASES: &[&str] =
    &["Array", "ReadonlyArray", "Record", "Map", "Set", "Date", "Promise"];

/// True for any alias name the dispatcher recognizes as built-in (spec
/// §4.2.5 step 2's "not a built-in alias" exclusion, and step 11).
pub fn is_well_known_alias(name: &str) -> bool {
    WELL_KNOWN_CONTAINER_ALIASES.contains(&name) || is_internal_symbol(name)
}

/// True for the subset of well-known aliases step 11 renders as a
/// container type rather than folding into `InternalSymbol`.
pub fn is_well_known_container(name: &str) -> bool {
    WELL_KNOWN_CONTAINER_ALIASES.contains(&name)
}

/// `Object`, `Function`, or anything prefixed `__` (spec §4.2.5 step 11).
pub fn is_internal_symbol(name: &str) -> bool {
    name == "Object" || name == "Function" || name.starts_with("__")
}
