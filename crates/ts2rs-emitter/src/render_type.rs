//! `render_type` (spec §4.3's table): deterministic `ResolvedType` → Rust
//! type spelling, honoring `custom_type_mappings` overrides on `struct_ref`.

use std::collections::HashMap;

use ts2rs_ir::{LiteralValue, PrimitiveKind, ResolvedType};

use crate::options::TypeMapping;

pub(crate) fn render_type(ty: &ResolvedType, mappings: &HashMap<String, TypeMapping>) -> String {
    match ty {
        ResolvedType::Primitive(PrimitiveKind::String) => "String".to_string(),
        ResolvedType::Primitive(PrimitiveKind::Number) => "f64".to_string(),
        ResolvedType::Primitive(PrimitiveKind::Boolean) => "bool".to_string(),
        // Never constructed in well-formed, fully-resolved IR (invariant 5);
        // rendered as the dynamic fallback rather than panicking on a
        // malformed Resolver run.
        ResolvedType::Primitive(PrimitiveKind::Null | PrimitiveKind::Undefined) => "serde_json::Value".to_string(),
        ResolvedType::Array(el) => format!("Vec<{}>", render_type(el, mappings)),
        ResolvedType::Tuple(elements) => render_tuple(elements, mappings),
        ResolvedType::Record(k, v) | ResolvedType::Map(k, v) => {
            format!("HashMap<{}, {}>", render_type(k, mappings), render_type(v, mappings))
        }
        ResolvedType::Set(el) => format!("HashSet<{}>", render_type(el, mappings)),
        ResolvedType::Option(inner) => format!("Option<{}>", render_type(inner, mappings)),
        ResolvedType::Box(inner) => format!("Box<{}>", render_type(inner, mappings)),
        ResolvedType::Literal(LiteralValue::Str(_)) => "String".to_string(),
        ResolvedType::Literal(LiteralValue::Num(_)) => "f64".to_string(),
        ResolvedType::Literal(LiteralValue::Bool(_)) => "bool".to_string(),
        ResolvedType::JsonValue => "serde_json::Value".to_string(),
        ResolvedType::StructRef(name) => mappings
            .get(name)
            .map(|m| m.rust_type.clone())
            .unwrap_or_else(|| name.clone()),
        // Generics are erased at emission (spec §4.3 table, §9 design notes).
        ResolvedType::TypeParameter(_) => "serde_json::Value".to_string(),
    }
}

fn render_tuple(elements: &[ResolvedType], mappings: &HashMap<String, TypeMapping>) -> String {
    let rendered: Vec<String> = elements.iter().map(|e| render_type(e, mappings)).collect();
    match rendered.len() {
        1 => format!("({},)", rendered[0]),
        _ => format!("({})", rendered.join(", ")),
    }
}

/// Every `struct_ref` name reachable inside `ty`, for surfacing a mapped
/// struct_ref's `field_annotations` on the field that uses it (spec §4.3:
/// "per-mapping field annotations are prepended to that field's attribute
/// block").
pub(crate) fn struct_refs_in(ty: &ResolvedType, out: &mut Vec<String>) {
    match ty {
        ResolvedType::StructRef(name) => out.push(name.clone()),
        ResolvedType::Array(inner) | ResolvedType::Option(inner) | ResolvedType::Box(inner) | ResolvedType::Set(inner) => {
            struct_refs_in(inner, out)
        }
        ResolvedType::Record(k, v) | ResolvedType::Map(k, v) => {
            struct_refs_in(k, out);
            struct_refs_in(v, out);
        }
        ResolvedType::Tuple(elements) => {
            for e in elements {
                struct_refs_in(e, out);
            }
        }
        ResolvedType::Primitive(_) | ResolvedType::Literal(_) | ResolvedType::JsonValue | ResolvedType::TypeParameter(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_element_tuple_keeps_the_trailing_comma() {
        let rendered = render_tuple(&[ResolvedType::Primitive(PrimitiveKind::String)], &HashMap::new());
        assert_eq!(rendered, "(String,)");
    }

    #[test]
    fn struct_ref_falls_back_to_its_own_name_with_no_mapping() {
        let rendered = render_type(&ResolvedType::StructRef("Widget".to_string()), &HashMap::new());
        assert_eq!(rendered, "Widget");
    }

    #[test]
    fn struct_ref_honors_a_custom_type_mapping() {
        let mut mappings = HashMap::new();
        mappings.insert("Uuid".to_string(), TypeMapping::new("uuid::Uuid"));
        let rendered = render_type(&ResolvedType::StructRef("Uuid".to_string()), &mappings);
        assert_eq!(rendered, "uuid::Uuid");
    }

    #[test]
    fn struct_refs_in_collects_through_nested_containers() {
        let ty = ResolvedType::option(ResolvedType::Array(Box::new(ResolvedType::StructRef("Node".to_string()))));
        let mut out = Vec::new();
        struct_refs_in(&ty, &mut out);
        assert_eq!(out, vec!["Node".to_string()]);
    }
}
