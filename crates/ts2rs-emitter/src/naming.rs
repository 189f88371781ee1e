//! Emitter-local naming helpers layered on `ts2rs_common::naming`.

use ts2rs_common::naming::{escape_rust_keyword, to_snake_case};

/// A `__Anonymous{n}`-prefixed struct is an implementation convention for
/// inline object literals and discriminated-union variant payloads (spec §9
/// open question 3) — it is never rendered as a standalone top-level
/// declaration; its fields are inlined wherever it's referenced.
pub(crate) fn is_anonymous(name: &str) -> bool {
    name.starts_with("__Anonymous")
}

/// A field's Rust identifier: `to_snake_case`, then escaped if it collides
/// with a keyword. The wire spelling is preserved separately by the
/// struct-level `rename_all = "camelCase"` attribute, not a per-field
/// rename.
pub(crate) fn field_ident(name: &str) -> String {
    escape_rust_keyword(&to_snake_case(name))
}
