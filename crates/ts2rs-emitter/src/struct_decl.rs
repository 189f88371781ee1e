//! Struct rendering (spec §4.3): documentation, attribute block, fields.

use ts2rs_ir::Field;

use crate::naming::field_ident;
use crate::options::EmitterOptions;
use crate::render_type::{render_type, struct_refs_in};

pub(crate) fn render_struct(
    name: &str,
    fields: &[Field],
    documentation: Option<&str>,
    options: &EmitterOptions,
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
    out.push_str("#[serde(rename_all = \"camelCase\")]\n");
    out.push_str(&format!("pub struct {name} {{\n"));
    for field in fields {
        out.push_str(&render_field(field, options));
    }
    out.push_str("}\n");
    out
}

pub(crate) fn render_field(field: &Field, options: &EmitterOptions) -> String {
    let mut out = String::new();
    if let Some(doc) = &field.documentation {
        for line in doc.lines() {
            out.push_str(&format!("    /// {line}\n"));
        }
    }
    let mut mapped_names = Vec::new();
    struct_refs_in(&field.ty, &mut mapped_names);
    for mapped in mapped_names {
        if let Some(mapping) = options.custom_type_mappings.get(&mapped) {
            for annotation in &mapping.field_annotations {
                out.push_str("    ");
                out.push_str(annotation);
                out.push('\n');
            }
        }
    }
    if field.ty.is_option() {
        out.push_str("    #[serde(skip_serializing_if = \"Option::is_none\")]\n");
    }
    let ident = field_ident(&field.name);
    let rendered_type = render_type(&field.ty, &options.custom_type_mappings);
    out.push_str(&format!("    pub {ident}: {rendered_type},\n"));
    out
}
