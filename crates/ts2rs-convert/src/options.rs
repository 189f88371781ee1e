//! `ConvertOptions` (spec §6.2): the façade's full configuration surface,
//! embedding the Resolver's and Emitter's own option structs rather than
//! flattening them, the same composition `tsz-cli` uses over
//! `tsz-common::CheckerOptions`.

use std::path::PathBuf;

use ts2rs_emitter::EmitterOptions;
use ts2rs_resolver::ResolverOptions;

#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Required module path the Resolver starts from (spec §6.1).
    pub entry_file: String,
    pub resolver: ResolverOptions,
    pub emitter: EmitterOptions,
    /// If present, `convert()` writes the rendered text here, creating
    /// parent directories as needed (spec §4.4, §6.2).
    pub output_path: Option<PathBuf>,
}

impl ConvertOptions {
    pub fn new(entry_file: impl Into<String>) -> Self {
        Self {
            entry_file: entry_file.into(),
            ..Self::default()
        }
    }

    pub fn with_type_names(mut self, type_names: Vec<String>) -> Self {
        self.resolver = self.resolver.with_type_names(type_names);
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.resolver = self.resolver.with_strict(strict);
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Escape hatch for the Emitter-only knobs (`custom_type_mappings`,
    /// `custom_header`/`footer`, `custom_type_annotations`) — set once up
    /// front rather than mirroring every `EmitterOptions` builder method
    /// here too.
    pub fn with_emitter_options(mut self, emitter: EmitterOptions) -> Self {
        self.emitter = emitter;
        self
    }
}
