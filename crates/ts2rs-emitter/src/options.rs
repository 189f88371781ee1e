//! `EmitterOptions` (spec §6.2): the subset of `ConvertOptions` the Emitter
//! itself consults, builder-constructed the same way `ConvertOptions` and
//! `ResolverOptions` are.

use std::collections::HashMap;

/// A user override for a `struct_ref(N)` occurrence: either a bare target
/// type spelling, or a spelling plus attribute lines to prepend onto the
/// field that uses it.
#[derive(Debug, Clone, Default)]
pub struct TypeMapping {
    pub rust_type: String,
    pub field_annotations: Vec<String>,
}

impl TypeMapping {
    pub fn new(rust_type: impl Into<String>) -> Self {
        Self {
            rust_type: rust_type.into(),
            field_annotations: Vec::new(),
        }
    }

    pub fn with_field_annotations(mut self, annotations: Vec<String>) -> Self {
        self.field_annotations = annotations;
        self
    }
}

impl From<&str> for TypeMapping {
    fn from(rust_type: &str) -> Self {
        Self::new(rust_type)
    }
}

impl From<String> for TypeMapping {
    fn from(rust_type: String) -> Self {
        Self::new(rust_type)
    }
}

#[derive(Debug, Clone, Default)]
pub struct EmitterOptions {
    pub custom_type_mappings: HashMap<String, TypeMapping>,
    pub custom_header: Option<String>,
    pub custom_footer: Option<String>,
    pub custom_type_annotations: Vec<String>,
}

impl EmitterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type_mapping(mut self, surface_name: impl Into<String>, mapping: impl Into<TypeMapping>) -> Self {
        self.custom_type_mappings.insert(surface_name.into(), mapping.into());
        self
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.custom_header = Some(header.into());
        self
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.custom_footer = Some(footer.into());
        self
    }

    pub fn with_type_annotations(mut self, annotations: Vec<String>) -> Self {
        self.custom_type_annotations = annotations;
        self
    }
}
