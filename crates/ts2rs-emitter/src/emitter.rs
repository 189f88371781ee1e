//! `Emitter::emit` (spec §4.3): deterministically renders collected IR
//! types to a single Rust source text.

use std::collections::HashMap;

use tracing::{span, Level};
use ts2rs_ir::CollectedType;

use crate::alias_decl::render_type_alias;
use crate::enum_decl::render_enum;
use crate::imports::compute_imports;
use crate::naming::is_anonymous;
use crate::options::EmitterOptions;
use crate::struct_decl::render_struct;
use crate::union_decl::render_union;

pub struct Emitter {
    options: EmitterOptions,
}

/// The Emitter's result (spec §4.3: "the list of emitted type names ... are
/// returned to the façade"). Warnings are the Resolver's alone to produce;
/// the façade forwards them unchanged (spec §4.4).
pub struct EmitOutput {
    pub text: String,
    pub emitted_names: Vec<String>,
}

impl Emitter {
    pub fn new(options: EmitterOptions) -> Self {
        Self { options }
    }

    /// Render every top-level (non-anonymous) `CollectedType` in `collected`
    /// order, bracketed by the banner and any custom header/footer text.
    pub fn emit(&self, collected: &[CollectedType]) -> EmitOutput {
        let _span = span!(Level::DEBUG, "emit", count = collected.len()).entered();

        let anonymous_structs: HashMap<&str, &CollectedType> = collected
            .iter()
            .filter(|c| is_anonymous(c.name()))
            .map(|c| (c.name(), c))
            .collect();

        let mut text = String::new();
        text.push_str("// Code generated by ts2rs. DO NOT EDIT.\n");
        if let Some(header) = &self.options.custom_header {
            text.push_str(header);
            if !header.ends_with('\n') {
                text.push('\n');
            }
        }
        text.push('\n');
        for line in compute_imports(collected) {
            text.push_str(&line);
            text.push('\n');
        }
        text.push('\n');

        let mut emitted_names = Vec::new();
        for c in collected {
            if is_anonymous(c.name()) {
                continue;
            }
            emitted_names.push(c.name().to_string());
            text.push_str(&self.render_one(c, &anonymous_structs));
            text.push('\n');
        }

        if let Some(footer) = &self.options.custom_footer {
            text.push_str(footer);
            if !footer.ends_with('\n') {
                text.push('\n');
            }
        }

        EmitOutput { text, emitted_names }
    }

    fn render_one(&self, c: &CollectedType, anonymous_structs: &HashMap<&str, &CollectedType>) -> String {
        match c {
            CollectedType::Struct { name, fields, documentation, .. } => {
                render_struct(name, fields, documentation.as_deref(), &self.options)
            }
            CollectedType::Enum { name, variants, is_string_enum, documentation } => {
                render_enum(name, variants, *is_string_enum, documentation.as_deref(), &self.options)
            }
            CollectedType::Union { name, variants, discriminator, documentation } => render_union(
                name,
                variants,
                discriminator.as_deref(),
                documentation.as_deref(),
                &self.options,
                anonymous_structs,
            ),
            CollectedType::TypeAlias { name, aliased, documentation } => {
                render_type_alias(name, aliased, documentation.as_deref(), &self.options)
            }
        }
    }
}
