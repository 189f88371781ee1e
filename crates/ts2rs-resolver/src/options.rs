//! `ResolverOptions`: the subset of the Convert façade's configuration
//! (spec §6.2) that governs the Resolver's own behavior. The Emitter-only
//! options (`custom_type_mappings`, `custom_header`/`footer`,
//! `custom_type_annotations`, `output_path`) live with `ts2rs-convert`'s
//! `ConvertOptions`, which embeds one of these.

/// Plain struct built with `Default` plus builder-style setters, the same
/// shape as `tsz-common`'s `CheckerOptions`.
#[derive(Debug, Clone, Default)]
pub struct ResolverOptions {
    /// If present and non-empty, limits resolution roots to these names;
    /// otherwise every exported declaration of the entry module is
    /// resolved (spec §4.2.1).
    pub type_names: Vec<String>,
    /// Disallow fallback: any `handle_value_fallback` raises instead of
    /// producing `json_value` (spec §4.2.10, §6.2).
    pub strict: bool,
}

impl ResolverOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type_names(mut self, type_names: Vec<String>) -> Self {
        self.type_names = type_names;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
