//! Import computation (spec §4.3): "computed from the set of tags actually
//! used" rather than emitted unconditionally.

use ts2rs_ir::{CollectedType, ResolvedType};

#[derive(Default)]
struct ImportFlags {
    map_used: bool,
    set_used: bool,
    json_used: bool,
}

fn scan(ty: &ResolvedType, flags: &mut ImportFlags) {
    match ty {
        ResolvedType::Record(k, v) | ResolvedType::Map(k, v) => {
            flags.map_used = true;
            scan(k, flags);
            scan(v, flags);
        }
        ResolvedType::Set(el) => {
            flags.set_used = true;
            scan(el, flags);
        }
        ResolvedType::JsonValue => flags.json_used = true,
        ResolvedType::Array(inner) | ResolvedType::Option(inner) | ResolvedType::Box(inner) => scan(inner, flags),
        ResolvedType::Tuple(elements) => {
            for e in elements {
                scan(e, flags);
            }
        }
        ResolvedType::TypeParameter(_) => flags.json_used = true,
        ResolvedType::Primitive(_) | ResolvedType::Literal(_) | ResolvedType::StructRef(_) => {}
    }
}

fn scan_collected(c: &CollectedType, flags: &mut ImportFlags) {
    match c {
        CollectedType::Struct { fields, .. } => {
            for f in fields {
                scan(&f.ty, flags);
            }
        }
        CollectedType::Union { variants, .. } => {
            for v in variants {
                if let Some(ty) = &v.ty {
                    scan(ty, flags);
                }
            }
        }
        CollectedType::TypeAlias { aliased, .. } => scan(aliased, flags),
        CollectedType::Enum { .. } => {}
    }
}

/// Ordered `use` lines this translation unit needs: unconditional `serde`,
/// then `serde_repr` iff any numeric enum is collected, then the
/// conditional container/value imports the IR actually exercises.
pub(crate) fn compute_imports(collected: &[CollectedType]) -> Vec<String> {
    let mut flags = ImportFlags::default();
    let mut has_numeric_enum = false;
    for c in collected {
        scan_collected(c, &mut flags);
        if let CollectedType::Enum { is_string_enum, .. } = c {
            if !is_string_enum {
                has_numeric_enum = true;
            }
        }
    }

    let mut lines = vec!["use serde::{Deserialize, Serialize};".to_string()];
    if has_numeric_enum {
        lines.push("use serde_repr::{Deserialize_repr, Serialize_repr};".to_string());
    }
    if flags.map_used {
        lines.push("use std::collections::HashMap;".to_string());
    }
    if flags.set_used {
        lines.push("use std::collections::HashSet;".to_string());
    }
    let _ = flags.json_used; // serde_json::Value is always written fully-qualified, no import needed.
    lines
}
