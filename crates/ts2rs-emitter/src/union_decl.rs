//! Union rendering (spec §4.3): a discriminated or plain sum type, each
//! variant a unit, a one-element tuple, or a struct-like variant with named
//! fields, mirroring the IR (§3.1's `UnionVariant`).

use std::collections::HashMap;

use ts2rs_ir::{CollectedType, LiteralValue, ResolvedType, UnionVariant};

use crate::naming::is_anonymous;
use crate::options::EmitterOptions;
use crate::render_type::render_type;
use crate::struct_decl::render_field;

/// The discriminator value formatted the same way regardless of its ground
/// kind — the variant-level `rename` target. Numeric/boolean tags retained
/// in the payload (spec §4.2.8) still get a string-spelled `rename` here;
/// `serde`'s internally-tagged representation has no native non-string tag,
/// which is the "asymmetry" the spec's design notes call out.
fn rename_value(value: &LiteralValue) -> String {
    match value {
        LiteralValue::Str(s) => s.clone(),
        LiteralValue::Num(n) => {
            if n.fract() == 0.0 && n.abs() < 1e15 {
                format!("{}", *n as i64)
            } else {
                n.to_string()
            }
        }
        LiteralValue::Bool(b) => b.to_string(),
    }
}

pub(crate) fn render_union(
    name: &str,
    variants: &[UnionVariant],
    discriminator: Option<&str>,
    documentation: Option<&str>,
    options: &EmitterOptions,
    anonymous_structs: &HashMap<&str, &CollectedType>,
) -> String {
    let mut out = String::new();
    if let Some(doc) = documentation {
        for line in doc.lines() {
            out.push_str(&format!("/// {line}\n"));
        }
    }
    for annotation in &options.custom_type_annotations {
        out.push_str(annotation);
        out.push('\n');
    }
    out.push_str("#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]\n");
    if let Some(tag) = discriminator {
        out.push_str(&format!("#[serde(tag = \"{tag}\", rename_all = \"camelCase\")]\n"));
    } else {
        // No discriminator: the source value is structurally one of several
        // shapes with no wrapper key on the wire, so the default externally
        // tagged representation would not round-trip (spec §1, §8.2).
        out.push_str("#[serde(untagged, rename_all = \"camelCase\")]\n");
    }
    out.push_str(&format!("pub enum {name} {{\n"));
    for variant in variants {
        out.push_str(&render_variant(variant, options, anonymous_structs));
    }
    out.push_str("}\n");
    out
}

fn render_variant(variant: &UnionVariant, options: &EmitterOptions, anonymous_structs: &HashMap<&str, &CollectedType>) -> String {
    let mut out = String::new();
    if let Some(doc) = &variant.documentation {
        for line in doc.lines() {
            out.push_str(&format!("    /// {line}\n"));
        }
    }
    if let Some(tag_value) = &variant.discriminator_value {
        out.push_str(&format!("    #[serde(rename = \"{}\")]\n", rename_value(tag_value)));
    }

    match &variant.ty {
        None => {
            out.push_str(&format!("    {},\n", variant.name));
        }
        Some(ResolvedType::StructRef(ref_name)) if is_anonymous(ref_name) => {
            out.push_str(&render_struct_like_variant(&variant.name, ref_name, options, anonymous_structs));
        }
        Some(ty) => {
            let rendered = render_type(ty, &options.custom_type_mappings);
            out.push_str(&format!("    {}({}),\n", variant.name, rendered));
        }
    }
    out
}

fn render_struct_like_variant(
    variant_name: &str,
    anonymous_name: &str,
    options: &EmitterOptions,
    anonymous_structs: &HashMap<&str, &CollectedType>,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("    {variant_name} {{\n"));
    if let Some(CollectedType::Struct { fields, .. }) = anonymous_structs.get(anonymous_name) {
        for field in fields {
            for line in render_field(field, options).lines() {
                out.push_str("    ");
                out.push_str(line);
                out.push('\n');
            }
        }
    }
    out.push_str("    },\n");
    out
}
