//! Enum rendering (spec §4.3): string-valued enums get a per-variant
//! `rename` to the original wire string; numeric-valued enums are rendered
//! with `serde_repr` and an explicit `#[repr]`, since plain `serde` has no
//! native "this enum serializes as its discriminant" attribute.

use ts2rs_ir::{EnumMemberValue, EnumVariant};

use crate::options::EmitterOptions;

pub(crate) fn render_enum(
    name: &str,
    variants: &[EnumVariant],
    is_string_enum: bool,
    documentation: Option<&str>,
    options: &EmitterOptions,
) -> String {
    if is_string_enum {
        render_string_enum(name, variants, documentation, options)
    } else {
        render_numeric_enum(name, variants, documentation, options)
    }
}

fn render_string_enum(name: &str, variants: &[EnumVariant], documentation: Option<&str>, options: &EmitterOptions) -> String {
    let mut out = String::new();
    push_doc(&mut out, documentation, "");
    for annotation in &options.custom_type_annotations {
        out.push_str(annotation);
        out.push('\n');
    }
    out.push_str("#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]\n");
    out.push_str(&format!("pub enum {name} {{\n"));
    for variant in variants {
        if let Some(doc) = &variant.documentation {
            push_doc(&mut out, Some(doc), "    ");
        }
        if let Some(EnumMemberValue::Str(original)) = &variant.value {
            out.push_str(&format!("    #[serde(rename = \"{original}\")]\n"));
        }
        out.push_str(&format!("    {},\n", variant.name));
    }
    out.push_str("}\n");
    out
}

fn render_numeric_enum(name: &str, variants: &[EnumVariant], documentation: Option<&str>, options: &EmitterOptions) -> String {
    let mut out = String::new();
    push_doc(&mut out, documentation, "");
    for annotation in &options.custom_type_annotations {
        out.push_str(annotation);
        out.push('\n');
    }
    out.push_str("#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]\n");
    out.push_str("#[repr(i64)]\n");
    out.push_str(&format!("pub enum {name} {{\n"));
    for variant in variants {
        if let Some(doc) = &variant.documentation {
            push_doc(&mut out, Some(doc), "    ");
        }
        let discriminant = match &variant.value {
            Some(EnumMemberValue::Num(n)) => *n,
            _ => 0,
        };
        out.push_str(&format!("    {} = {},\n", variant.name, discriminant));
    }
    out.push_str("}\n");
    out
}

fn push_doc(out: &mut String, documentation: Option<&str>, indent: &str) {
    if let Some(doc) = documentation {
        for line in doc.lines() {
            out.push_str(indent);
            out.push_str("/// ");
            out.push_str(line);
            out.push('\n');
        }
    }
}
