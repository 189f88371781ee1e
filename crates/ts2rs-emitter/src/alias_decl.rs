//! `TypeAlias` rendering (spec §4.3): a transparent Rust `type` alias, so
//! wire compatibility is inherited from `render_type(aliased)` with no
//! serde wrapper of its own.

use ts2rs_ir::ResolvedType;

use crate::options::EmitterOptions;
use crate::render_type::render_type;

pub(crate) fn render_type_alias(name: &str, aliased: &ResolvedType, documentation: Option<&str>, options: &EmitterOptions) -> String {
    let mut out = String::new();
    if let Some(doc) = documentation {
        for line in doc.lines() {
            out.push_str(&format!("/// {line}\n"));
        }
    }
    let rendered = render_type(aliased, &options.custom_type_mappings);
    out.push_str(&format!("pub type {name} = {rendered};\n"));
    out
}
